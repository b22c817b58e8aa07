//! Server configuration.
//!
//! Loaded from environment variables with development-friendly defaults,
//! so `cargo run` works with no setup.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub host: String,

    /// HTTP port.
    pub port: u16,

    /// Path to the SQLite database file.
    pub database_path: String,

    /// Whether to seed the admin operator and payment methods on startup.
    pub seed_on_start: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable             | Default           |
    /// |----------------------|-------------------|
    /// | `CAIXA_HOST`         | `0.0.0.0`         |
    /// | `CAIXA_PORT`         | `3000`            |
    /// | `CAIXA_DATABASE`     | `./data/caixa.db` |
    /// | `CAIXA_SEED`         | `true`            |
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            host: env::var("CAIXA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("CAIXA_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CAIXA_PORT".to_string()))?,

            database_path: env::var("CAIXA_DATABASE")
                .unwrap_or_else(|_| "./data/caixa.db".to_string()),

            seed_on_start: env::var("CAIXA_SEED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CAIXA_SEED".to_string()))?,
        };

        Ok(config)
    }

    /// The `host:port` string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Env vars are process-global; only assert the parts tests don't
        // race on.
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_path: "./data/caixa.db".to_string(),
            seed_on_start: true,
        };
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }
}
