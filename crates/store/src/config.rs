//! Store configuration, read once at process start.

/// Connection settings for the hosted entry table.
///
/// Absent values do not fail construction: operations fail with
/// [`crate::StoreError::Configuration`] when first used, so an
/// unconfigured deployment still serves everything that does not touch
/// the store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Base URL of the Supabase project (no trailing slash).
    pub base_url: Option<String>,
    /// Service-role key, sent as both the `apikey` header and the
    /// bearer token.
    pub service_key: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                     | Effect when absent              |
    /// |-----------------------------|---------------------------------|
    /// | `SUPABASE_URL`              | store operations fail at call   |
    /// | `SUPABASE_SERVICE_ROLE_KEY` | store operations fail at call   |
    pub fn from_env() -> Self {
        let base_url = std::env::var("SUPABASE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let service_key = std::env::var("SUPABASE_SERVICE_ROLE_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            base_url,
            service_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.service_key.is_some()
    }
}
