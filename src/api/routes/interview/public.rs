//! Public types for the interview API
use anyhow::Error;
use serde::{Deserialize, Serialize};

use crate::ai::interview::Transcript;

#[derive(Deserialize)]
pub struct InterviewRequest {
    pub user_id: String,
    pub message: String,
}

/// Either the assistant's reply or a description of why there isn't
/// one. Both are returned with the same status code.
#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum InterviewResponse {
    Reply { reply: String },
    Error { error: String },
}

impl From<Result<String, Error>> for InterviewResponse {
    fn from(result: Result<String, Error>) -> Self {
        match result {
            Ok(reply) => Self::Reply { reply },
            Err(err) => Self::Error {
                error: format!("{:#}", err),
            },
        }
    }
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub transcript: Transcript,
}
