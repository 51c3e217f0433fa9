/// Server configuration loaded from environment variables.
///
/// Network settings have defaults suitable for local development. The
/// operator credential is optional by design: when absent, the admin
/// gate rejects every request with 503 instead of crashing the process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Operator identity for the admin gate.
    pub admin_user: Option<String>,
    /// Operator passphrase for the admin gate.
    pub admin_password: Option<String>,
    /// Whether token issuance is operational. When retired, the admin
    /// token routes answer 410 Gone.
    pub issuance_enabled: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `BASIC_AUTH_USER`      | unset (admin gate closed)  |
    /// | `BASIC_AUTH_PASSWORD`  | unset (admin gate closed)  |
    /// | `ISSUANCE_ENABLED`     | `true`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_user = std::env::var("BASIC_AUTH_USER")
            .ok()
            .filter(|s| !s.is_empty());
        let admin_password = std::env::var("BASIC_AUTH_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty());

        let issuance_enabled = std::env::var("ISSUANCE_ENABLED")
            .map(|raw| !matches!(raw.trim(), "false" | "0"))
            .unwrap_or(true);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_user,
            admin_password,
            issuance_enabled,
        }
    }
}
