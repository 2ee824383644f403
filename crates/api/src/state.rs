use std::sync::Arc;

use ironlog_vision::VisionClient;

use crate::cache::StatsCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ironlog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the meal-photo analysis collaborator.
    pub vision: VisionClient,
    /// Per-user dashboard summary cache, invalidated on training mutations.
    pub stats_cache: StatsCache,
}
