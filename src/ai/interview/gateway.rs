use anyhow::{Error, Result};
use async_trait::async_trait;

use crate::openai::{Message, completion};

/// Anything that can produce the next assistant reply for a list of
/// messages.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, Error>;
}

/// Gateway to an OpenAI compatible chat completions API. The provider
/// and model are fixed when it's constructed.
pub struct OpenAiGateway {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
}

impl OpenAiGateway {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(&self, messages: &[Message]) -> Result<String, Error> {
        tracing::debug!(
            "Requesting completion from {} ({}) with {} messages",
            self.api_hostname,
            self.model,
            messages.len()
        );
        completion(
            &self.client,
            messages,
            &self.api_hostname,
            &self.api_key,
            &self.model,
        )
        .await
    }
}
