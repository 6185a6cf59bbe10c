pub mod config;
pub mod db;
pub mod error;
pub mod hash;
pub mod init;

pub use config::Config;
pub use error::SeedError;
pub use init::initialize_database;
