//! User API configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Default server host address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Default database URL: a SQLite file next to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// User API configuration.
#[derive(Debug, Clone)]
pub struct UserApiConfig {
    /// HTTP listener settings
    pub server: ServiceConfig,
    /// Store settings
    pub database: DatabaseConfig,
}

impl UserApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "user-api".to_string(),
                host: env::var("USER_API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port: env::var("USER_API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            database: DatabaseConfig {
                url: env::var("USER_API_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(1),
            },
        }
    }

    /// Override the listener address (from CLI flags).
    pub fn with_listener(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

impl Default for UserApiConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "user-api".to_string(),
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                max_connections: 1,
            },
        }
    }
}
