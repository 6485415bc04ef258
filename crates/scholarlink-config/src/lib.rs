//! # ScholarLink Config
//!
//! Configuration types for the ScholarLink API.
//!
//! Every structure is loaded from environment variables through a
//! `from_env()` constructor:
//!
//! - [`server`]: Listen address (`HOST`, `PORT`)
//! - [`database`]: PostgreSQL connection settings
//! - [`identity`]: Identity provider project and key endpoint
//! - [`cors`]: CORS allowed origins
//! - [`logging`]: Log file directory
//!
//! # Example
//!
//! ```ignore
//! use scholarlink_config::{AppConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! println!("listening on {}", config.server.addr());
//! ```

pub mod cors;
pub mod database;
pub mod identity;
pub mod logging;
pub mod server;

use thiserror::Error;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use identity::IdentityConfig;
pub use logging::LogConfig;
pub use server::ServerConfig;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("failed to read credential bundle {path}: {source}")]
    CredentialsRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("credential bundle {path} is malformed: {source}")]
    CredentialsParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// All configuration the server needs at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub identity: IdentityConfig,
    pub cors: CorsConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            identity: IdentityConfig::from_env()?,
            cors: CorsConfig::from_env(),
            log: LogConfig::from_env(),
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
pub(crate) fn parse_var<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        _ => Ok(default),
    }
}

pub(crate) fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
