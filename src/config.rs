use std::path::PathBuf;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub schema_path: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
    pub bcrypt_cost: u32,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:app.sqlite".to_string(),
            schema_path: PathBuf::from("database/init.sql"),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `DBSEED_*` environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("DBSEED_"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_bootstrap_values() {
        let cfg = Config::default();
        assert_eq!(cfg.admin_username, "admin");
        assert_eq!(cfg.admin_password, "admin123");
        assert_eq!(cfg.bcrypt_cost, 10);
        assert_eq!(cfg.schema_path, PathBuf::from("database/init.sql"));
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DBSEED_ADMIN_USERNAME", "root");
            jail.set_env("DBSEED_BCRYPT_COST", "12");
            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg.admin_username, "root");
            assert_eq!(cfg.bcrypt_cost, 12);
            assert_eq!(cfg.admin_password, "admin123");
            Ok(())
        });
    }
}
