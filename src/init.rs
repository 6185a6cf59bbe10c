use sqlx::SqliteConnection;
use tokio::fs;
use tracing::{error, info, warn};

use crate::config::{Config, DEFAULT_ADMIN_PASSWORD};
use crate::db::{self, SqlitePool};
use crate::error::SeedError;
use crate::hash;

/// Run the bootstrap once: apply the schema file, then overwrite the
/// administrator password hash. Any step failing aborts the rest; the
/// connection returns to the pool on drop, success or failure.
pub async fn initialize_database(pool: &SqlitePool, cfg: &Config) -> Result<(), SeedError> {
    let mut conn = pool.acquire().await?;
    let outcome = run(&mut conn, cfg).await;
    if let Err(e) = &outcome {
        error!(error = %e, "database initialization failed");
    }
    outcome
}

async fn run(conn: &mut SqliteConnection, cfg: &Config) -> Result<(), SeedError> {
    let sql = fs::read_to_string(&cfg.schema_path)
        .await
        .map_err(|source| SeedError::SchemaFileUnreadable {
            path: cfg.schema_path.clone(),
            source,
        })?;
    db::apply_schema(conn, &sql).await?;
    info!(path = %cfg.schema_path.display(), "schema applied");

    let password_hash = hash::hash_password(&cfg.admin_password, cfg.bcrypt_cost)?;
    let rows = db::set_password_hash(conn, &cfg.admin_username, &password_hash).await?;
    if rows == 0 {
        return Err(SeedError::AdminRowMissing(cfg.admin_username.clone()));
    }
    info!(username = %cfg.admin_username, "administrator password updated");
    info!(
        username = %cfg.admin_username,
        password = %cfg.admin_password,
        "administrator credentials"
    );
    if cfg.admin_password == DEFAULT_ADMIN_PASSWORD {
        warn!("default administrator password in use; set DBSEED_ADMIN_PASSWORD before deploying");
    }
    Ok(())
}
