//! Server configuration.
//!
//! Environment variables are the only configuration source:
//! - `HOST` - bind address (default `0.0.0.0`)
//! - `PORT` - listen port (default `3000`)

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl Config {
    /// Build a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!("Invalid PORT value {:?}, using default 3000", raw);
                    3000
                }
            },
            Err(_) => 3000,
        };

        Self { host, port }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
    }
}
