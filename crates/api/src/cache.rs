//! In-process per-user cache for the dashboard summary.
//!
//! The summary is four aggregate reads over the caller's training history,
//! so it is cached for a short TTL and dropped the moment any workout,
//! exercise, or set mutation lands for that user.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ironlog_core::types::DbId;
use tokio::sync::RwLock;

use crate::handlers::stats::StatsSummary;

struct CacheEntry {
    summary: StatsSummary,
    inserted_at: Instant,
}

/// TTL cache keyed by user id. Cheap to clone; clones share the same map.
#[derive(Clone)]
pub struct StatsCache {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<DbId, CacheEntry>>>,
}

impl StatsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Fetch a user's cached summary if present and within the TTL.
    pub async fn get(&self, user_id: DbId) -> Option<StatsSummary> {
        let entries = self.entries.read().await;
        let entry = entries.get(&user_id)?;
        if entry.inserted_at.elapsed() > self.ttl {
            return None;
        }
        Some(entry.summary.clone())
    }

    /// Store a freshly computed summary for a user.
    pub async fn insert(&self, user_id: DbId, summary: StatsSummary) {
        let mut entries = self.entries.write().await;
        entries.insert(
            user_id,
            CacheEntry {
                summary,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop a user's cached summary. Called on every training mutation.
    pub async fn invalidate(&self, user_id: DbId) {
        let mut entries = self.entries.write().await;
        entries.remove(&user_id);
    }
}
