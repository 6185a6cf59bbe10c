//! Database module: connection setup and the statements the bootstrap runs.
//!
//! Layout:
//! - `sqlite.rs`: pool construction, schema batch execution, password update

pub mod sqlite;

pub use sqlite::{SqlitePool, apply_schema, connect, set_password_hash};
