/// Errors from the entry-store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Required credentials or base URL are missing from configuration.
    #[error("Store is not configured: {0}")]
    Configuration(String),

    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("Store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("Store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for operator logs.
        body: String,
    },

    /// A write that expected its row back got an empty representation.
    #[error("Store write returned no rows")]
    MissingRow,
}
