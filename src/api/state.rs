use std::sync::Arc;

use crate::ai::interview::{Interviewer, MemoryStore, OpenAiGateway};
use crate::core::AppConfig;

pub struct AppState {
    pub interviewer: Arc<Interviewer>,
}

impl AppState {
    pub fn new(interviewer: Arc<Interviewer>) -> Self {
        Self { interviewer }
    }

    /// Build state backed by an in-memory transcript store and the
    /// configured completion provider.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = MemoryStore::new(&config.system_message, config.max_transcript_messages);
        let gateway = OpenAiGateway::new(
            &config.openai_api_hostname,
            &config.openai_api_key,
            &config.openai_model,
        );
        Self::new(Arc::new(Interviewer::new(
            Arc::new(store),
            Arc::new(gateway),
        )))
    }
}
