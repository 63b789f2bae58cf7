// src/state.rs
// Shared application state. Immutable after startup - handlers only read it,
// so concurrent requests need no locking.

use std::sync::Arc;
use std::time::Duration;

use crate::config::BfhlConfig;
use crate::llm::GeminiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BfhlConfig>,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: BfhlConfig) -> Self {
        let gemini = GeminiClient::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            Duration::from_secs(config.gemini_timeout_secs),
        );
        Self {
            config: Arc::new(config),
            gemini,
        }
    }
}
