//! Handlers for the token-gated thank-you survey.
//!
//! The token is the capability: anyone holding the distributed URL can
//! read its entry and answer the survey exactly once. No further
//! authentication applies on these routes.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use thanks_core::entry::SupportEntry;
use thanks_core::error::CoreError;
use thanks_core::survey::{self, SubmitSurveyRequest};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the entry lookup (`?t=<token>`).
#[derive(Debug, Deserialize)]
pub struct EntryQuery {
    /// The support token carried in the distributed URL.
    pub t: Option<String>,
}

/// Envelope for a single entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub entry: SupportEntry,
}

/// Acknowledgement for a recorded submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
}

/// GET /api/thanks?t=<token>
///
/// Resolve a token to its entry so the rendering layer can decide
/// between the survey form and the locked/invalid states. A store
/// failure is not reported as "invalid token" -- the caller needs to
/// tell "service down" apart from "bad URL".
pub async fn fetch_entry(
    State(state): State<AppState>,
    Query(query): Query<EntryQuery>,
) -> AppResult<impl IntoResponse> {
    let token = query.t.as_deref().map(str::trim).unwrap_or_default();
    if token.is_empty() {
        return Err(AppError::BadRequest(
            "query parameter `t` is required".into(),
        ));
    }

    match state.store.find_by_token(token).await? {
        Some(entry) => Ok(Json(EntryResponse { entry })),
        None => Err(AppError::NotFound(
            "This URL is invalid or has expired".into(),
        )),
    }
}

/// POST /api/thanks
///
/// Validate the submitted answers, then record them with a conditional
/// write (`token = ? AND answered_at IS NULL`). Zero matched rows means
/// the entry was already answered or never existed: 409, no retry.
pub async fn submit_survey(
    State(state): State<AppState>,
    Json(body): Json<SubmitSurveyRequest>,
) -> AppResult<impl IntoResponse> {
    let token = body.token.trim().to_string();
    if token.is_empty() {
        return Err(AppError::BadRequest("token is required".into()));
    }

    // Fail fast: no store call until the payload is fully validated.
    let answers = survey::validate(&body)?;

    match state.store.answer_if_open(&token, &answers).await? {
        Some(_entry) => {
            tracing::info!(token_prefix = %token_prefix(&token), "Survey answers recorded");
            Ok(Json(SubmitResponse { ok: true }))
        }
        None => Err(AppError::Core(CoreError::Conflict(
            "This survey has already been answered".into(),
        ))),
    }
}

/// Leading characters of a token, safe for operator logs (the full
/// token is a bearer credential).
fn token_prefix(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}
