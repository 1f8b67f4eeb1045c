//! Server state and configuration.

/// Server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:3000")
    pub listen_addr: String,
    /// Bearer token required on `/generate-gif`. `None` or empty disables auth.
    pub api_key: Option<String>,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// The configured API key, if auth is enabled.
    pub fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref().filter(|key| !key.is_empty())
    }
}
