use std::env;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/users.db";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid HOST value: {0}")]
    InvalidHost(String),
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Process settings read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Opaque token displayed on the profile page. Never validated.
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let host_raw = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let host = host_raw
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port_raw = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        let api_token = env::var("API_TOKEN").ok();

        Ok(Self {
            database_url,
            host,
            port,
            api_token,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
