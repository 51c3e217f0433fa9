//! Operator endpoints for issuing and reviewing support tokens.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thanks_core::entry::SupportEntry;
use thanks_core::token::generate_token;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::AdminOperator;
use crate::state::AppState;

/// Default number of entries shown in the admin listing.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Query parameters for the admin listing.
#[derive(Debug, Deserialize)]
pub struct ListTokensParams {
    pub limit: Option<u32>,
}

/// Body returned after issuing a token.
#[derive(Debug, Serialize)]
pub struct IssuedTokenResponse {
    pub token: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Body returned by the admin listing.
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub entries: Vec<SupportEntry>,
}

/// POST /api/admin/tokens
///
/// Generate a fresh token and create its unanswered entry. Every call
/// creates a new token; issuance is intentionally not idempotent.
pub async fn issue_token(
    operator: AdminOperator,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    ensure_issuance_enabled(&state)?;

    let token = generate_token();
    let entry = state.store.insert(&token).await?;

    tracing::info!(operator = %operator.username, "Issued new support token");

    Ok(Json(IssuedTokenResponse {
        token: entry.token,
        created_at: entry.created_at,
    }))
}

/// GET /api/admin/tokens
///
/// Recent entries for operator review, newest first. The limit is
/// capped by the store regardless of what was requested.
pub async fn list_tokens(
    _operator: AdminOperator,
    State(state): State<AppState>,
    Query(params): Query<ListTokensParams>,
) -> AppResult<impl IntoResponse> {
    ensure_issuance_enabled(&state)?;

    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let entries = state.store.list_recent(limit).await?;

    Ok(Json(EntryListResponse { entries }))
}

/// Token issuance can be retired administratively without a deploy.
fn ensure_issuance_enabled(state: &AppState) -> Result<(), AppError> {
    if state.config.issuance_enabled {
        Ok(())
    } else {
        Err(AppError::Gone("Token issuance has been retired".into()))
    }
}
