pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;

use std::sync::Arc;
use config::Config;

/// Application state that will be shared across handlers.
/// Holds configuration only; nothing is carried between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }
}
