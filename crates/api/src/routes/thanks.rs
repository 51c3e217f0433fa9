//! Route definitions for the public thank-you survey.

use axum::routing::get;
use axum::Router;

use crate::handlers::thanks;
use crate::state::AppState;

/// ```text
/// GET  /thanks    -> fetch_entry (token in the `t` query parameter)
/// POST /thanks    -> submit_survey
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/thanks",
        get(thanks::fetch_entry).post(thanks::submit_survey),
    )
}
