use dotenvy::dotenv;
use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::SERVER_API_URL;
use crate::utils::env_utils::read_env;

/// Runtime configuration for the portal client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub server_url: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            server_url: read_env(
                "MAIN_SERVER_BASE_URL",
                &read_env("SERVER_URL", SERVER_API_URL, true),
                true,
            ),
        }
    }
}

impl RuntimeConfig {
    /// Resolve configuration from the environment, reading a `.env` file first
    /// when one is present.
    pub fn from_env() -> Self {
        dotenv().ok();
        let config = Self::default();
        info!("Portal client configured for server: {}", config.server_url);
        config
    }

    /// Configuration pointing at an explicit server URL, bypassing the
    /// environment. Used by tests and embedded setups.
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }
}
