//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is read with the
//! `CASE_INTAKE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use case_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod questionnaire;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use questionnaire::QuestionnaireConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage configuration (catalog file, answer directory)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Questionnaire rendering configuration (page size)
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads `.env` if present, then reads variables with the
    /// `CASE_INTAKE` prefix, e.g. `CASE_INTAKE__SERVER__PORT=8080` maps
    /// to `server.port`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CASE_INTAKE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.questionnaire.validate()?;
        Ok(())
    }
}
