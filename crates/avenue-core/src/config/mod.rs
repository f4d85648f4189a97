//! Application configuration schemas.
//!
//! Configuration is deserialized from TOML files via the `config` crate,
//! overlaid with `AVENUE__*` environment variables. Every section carries
//! serde defaults, so an empty configuration is valid.

pub mod contract;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::contract::{ContractConfig, QuotaPolicy};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Validation policy of the data contract.
    #[serde(default)]
    pub contract: ContractConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Sources, lowest precedence first: `config_path`, `config/{env}`,
    /// environment variables prefixed with `AVENUE__`. Missing files are
    /// skipped.
    pub fn load(config_path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("AVENUE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sources_yield_defaults() {
        let config: AppConfig = config::Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("empty config should deserialize");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.contract.quota_policy, QuotaPolicy::Reject);
        assert!(config.contract.reject_deleted_login);
    }

    #[test]
    fn test_toml_overrides() {
        let toml = r#"
            [logging]
            format = "json"

            [contract]
            quota_policy = "warn"
            max_email_length = 256
        "#;
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("toml config should deserialize");

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.contract.quota_policy, QuotaPolicy::Warn);
        assert_eq!(config.contract.max_email_length, 256);
        assert!(config.contract.normalize_empty_parent);
    }
}
