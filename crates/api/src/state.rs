use std::sync::Arc;

use thanks_store::EntryStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (read by the admin gate and handlers).
    pub config: Arc<ServerConfig>,
    /// Backing entry store: the hosted table in production, an
    /// in-memory store in tests.
    pub store: Arc<dyn EntryStore>,
}
