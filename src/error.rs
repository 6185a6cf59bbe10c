use std::io;
use std::path::PathBuf;

use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SeedError {
    #[error("schema file missing or unreadable: {path}: {source}")]
    SchemaFileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("schema execution failed at statement {index}: {source}")]
    SchemaExecution {
        index: usize,
        #[source]
        source: SqlxError,
    },

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("no account row matched username `{0}`")]
    AdminRowMissing(String),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}
