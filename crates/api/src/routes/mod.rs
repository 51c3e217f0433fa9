pub mod admin;
pub mod health;
pub mod thanks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /thanks             fetch entry (GET, token in `t`), submit answers (POST)
///
/// /admin/tokens       list recent entries (GET), issue token (POST)
///                     -- both behind the Basic-auth operator gate
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(thanks::router())
        .nest("/admin", admin::router())
}
