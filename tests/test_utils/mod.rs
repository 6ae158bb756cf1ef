//! Test utilities for integration tests
use std::sync::Arc;

use axum::{Router, body::Body};

use interview::api::AppState;
use interview::api::app;
use interview::core::AppConfig;

pub const SYSTEM_MESSAGE: &str = "You are an interviewer.";
pub const MODEL: &str = "gpt-4o-mini";

/// Creates a test application router that sends completions to
/// `provider_url`, usually a `mockito` server.
pub fn test_app(provider_url: &str) -> Router {
    let app_config = AppConfig {
        openai_model: String::from(MODEL),
        openai_api_hostname: provider_url.to_string(),
        openai_api_key: String::from("test-api-key"),
        system_message: String::from(SYSTEM_MESSAGE),
        max_transcript_messages: None,
    };
    app(Arc::new(AppState::from_config(&app_config)))
}

/// A chat completions response body with a single reply.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": MODEL,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
