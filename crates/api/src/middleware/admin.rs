//! Basic-auth extractor gating the operator endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::AppError;
use crate::state::AppState;

/// Operator identity extracted from a `Basic` credential in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that only the
/// operator may reach:
///
/// ```ignore
/// async fn admin_only(operator: AdminOperator) -> AppResult<Json<()>> {
///     tracing::info!(operator = %operator.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Both configured secrets must match exactly. When they are not
/// configured at all the gate answers 503, not 401: there is no
/// credential that could ever succeed. This gate never touches entry
/// data.
#[derive(Debug, Clone)]
pub struct AdminOperator {
    /// The authenticated operator username.
    pub username: String,
}

impl FromRequestParts<AppState> for AdminOperator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (Some(expected_user), Some(expected_pass)) = (
            state.config.admin_user.as_deref(),
            state.config.admin_password.as_deref(),
        ) else {
            return Err(AppError::AuthNotConfigured);
        };

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::AuthRequired)?;

        let encoded = auth_header
            .strip_prefix("Basic ")
            .ok_or(AppError::AuthRequired)?;

        let decoded = STANDARD
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or(AppError::AuthRequired)?;

        // Split at the first colon; the passphrase may contain more.
        let (username, password) = decoded.split_once(':').ok_or(AppError::AuthRequired)?;

        if username != expected_user || password != expected_pass {
            return Err(AppError::AuthRequired);
        }

        Ok(AdminOperator {
            username: username.to_string(),
        })
    }
}
