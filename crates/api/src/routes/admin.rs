//! Route definitions for the operator endpoints (mounted at `/admin`).

use axum::routing::get;
use axum::Router;

use crate::handlers::admin_tokens;
use crate::state::AppState;

/// ```text
/// GET  /tokens    -> list_tokens  (operator gate)
/// POST /tokens    -> issue_token  (operator gate)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/tokens",
        get(admin_tokens::list_tokens).post(admin_tokens::issue_token),
    )
}
