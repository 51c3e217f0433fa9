use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thanks_core::error::CoreError;
use thanks_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for the
/// backing table, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `thanks_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A transport or backend error from the entry store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The requested token has no entry.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The operation has been retired administratively.
    #[error("Gone: {0}")]
    Gone(String),

    /// Missing or wrong operator credential.
    #[error("Authentication required")]
    AuthRequired,

    /// The operator credential is not configured at all.
    #[error("Admin credentials are not configured")]
    AuthNotConfigured,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            AppError::Store(err) => classify_store_error(err),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Gone(msg) => (StatusCode::GONE, "GONE", msg.clone()),
            AppError::AuthRequired => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::AuthNotConfigured => {
                tracing::error!("Admin credentials are not configured; rejecting admin request");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "AUTH_NOT_CONFIGURED",
                    "Admin access is not available".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        let mut response = (status, axum::Json(body)).into_response();

        // Basic challenge so browsers prompt for the operator credential.
        if matches!(self, AppError::AuthRequired) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"Admin\""),
            );
        }

        response
    }
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// Detail goes to operator logs only; end users get a generic message,
/// since "service down" must not read as "invalid token".
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Configuration(msg) => {
            tracing::error!(error = %msg, "Store configuration missing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Store request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                "The service is temporarily unavailable. Please try again later.".to_string(),
            )
        }
    }
}
