//! Router for the interview API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Take the next turn in a user's interview. Provider failures are
/// reported in the body, not the status code.
async fn interview_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::InterviewRequest>,
) -> Json<public::InterviewResponse> {
    let result = state
        .interviewer
        .take_turn(&payload.user_id, &payload.message)
        .await;

    Json(result.into())
}

/// View the transcript for a user without starting one
async fn transcript_handler(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(transcript) = state.interviewer.transcript(&user_id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("No interview found for user {}", user_id),
        )
            .into_response());
    };

    Ok(Json(public::TranscriptResponse { transcript }).into_response())
}

/// Create the interview router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(interview_handler))
        .route("/{user_id}", get(transcript_handler))
}
