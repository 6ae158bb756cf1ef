use std::env;

use anyhow::{Context, Error, Result, anyhow};

use crate::ai::prompt::INTERVIEWER_PROMPT;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_model: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub system_message: String,
    // Unbounded when `None`
    pub max_transcript_messages: Option<usize>,
}

impl AppConfig {
    /// Load config from the environment. `OPENAI_API_KEY` is required
    /// and everything else has a default.
    pub fn from_env() -> Result<Self, Error> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("Missing env var OPENAI_API_KEY"))?;
        let openai_api_hostname = env::var("INTERVIEW_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_model =
            env::var("INTERVIEW_LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let system_message = env::var("INTERVIEW_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| INTERVIEWER_PROMPT.to_string());
        let max_transcript_messages = env::var("INTERVIEW_MAX_MESSAGES")
            .ok()
            .map(|v| parse_max_messages(&v))
            .transpose()?;

        Ok(Self {
            openai_model,
            openai_api_hostname,
            openai_api_key,
            system_message,
            max_transcript_messages,
        })
    }
}

fn parse_max_messages(value: &str) -> Result<usize, Error> {
    let max = value
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid INTERVIEW_MAX_MESSAGES: {}", value))?;
    if max == 0 {
        return Err(anyhow!("INTERVIEW_MAX_MESSAGES must be greater than 0"));
    }
    Ok(max)
}
