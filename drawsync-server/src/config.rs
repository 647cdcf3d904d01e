use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OUTBOUND_CAPACITY: usize = 256;

/// Runtime settings of the sync server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the HTTP/WebSocket listener binds on all interfaces.
    pub port: u16,
    /// Frames buffered per connection before new ones are dropped for it.
    pub outbound_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            outbound_capacity: DEFAULT_OUTBOUND_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Reads `WS_PORT`, then `PORT`, from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("WS_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort {
                    value: raw.clone(),
                    source,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            ..Self::default()
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
