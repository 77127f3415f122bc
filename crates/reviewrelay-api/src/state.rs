//! Application state shared by every route.

use std::sync::Arc;

use reviewrelay_mastra::MastraClient;
use reviewrelay_types::config::RelayConfig;

/// The relay has no per-request state: every handler sees the startup
/// configuration snapshot and the shared Mastra client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub mastra: Arc<MastraClient>,
}

impl AppState {
    /// Wire the state from a configuration snapshot.
    pub fn new(config: RelayConfig) -> Self {
        let mastra = MastraClient::new(config.mastra_api_url.clone());
        Self {
            config: Arc::new(config),
            mastra: Arc::new(mastra),
        }
    }
}
