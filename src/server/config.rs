//! Server configuration loaded from environment variables.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub log_level: String,
    pub user_agent: String,
    pub starship_feed_url: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".into()))?;

        let listen_addr = var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: format!("{listen_addr:?} is not a socket address: {e}"),
            })?;

        let log_level = var("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let user_agent = var("USER_AGENT")
            .unwrap_or_else(|| format!("shiptrader/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            user_agent,
            starship_feed_url: var("STARSHIP_FEED_URL"),
        })
    }
}
