use std::net::SocketAddr;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Fallback signature name used when a request carries no sender at all.
    /// Unset means unsigned messages.
    pub default_sender: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:data/bouquet.db".to_string());

        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .and_then(|addr| addr.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let default_sender = std::env::var("DEFAULT_SENDER")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            database_url,
            bind_addr,
            default_sender,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            default_sender: None,
        }
    }
}
