use std::time::Duration;

use anyhow::{Context, Error, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

/// A single role-tagged entry in a conversation. Fields are private so
/// a message can't be changed once it has been created.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Sends the full list of `messages` to an OpenAI compatible chat
/// completions endpoint and returns the text of the first choice.
///
/// Any failure along the way (transport, non-2xx status, a body that
/// isn't JSON or has no content) is returned as an error with a
/// readable description. Nothing is retried.
pub async fn completion(
    client: &reqwest::Client,
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, Error> {
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let resp: Value = response
        .json()
        .await
        .with_context(|| format!("Completion response was not valid JSON (status {})", status))?;

    if !status.is_success() {
        // OpenAI style errors look like {"error": {"message": "..."}}
        let reason = resp["error"]["message"]
            .as_str()
            .map(String::from)
            .unwrap_or_else(|| resp.to_string());
        bail!("Completion request failed with status {}: {}", status, reason);
    }

    resp["choices"][0]["message"]["content"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow!("No message received. Resp:\n\n {}", resp))
}
