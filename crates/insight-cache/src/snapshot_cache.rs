//! moka-backed snapshot cache with explicit freshness checks.
//!
//! moka bounds the capacity (LRU eviction); freshness is decided here against
//! the injected clock so that a stale entry is never returned, even if moka
//! has not evicted it yet.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use moka::policy::EvictionPolicy;
use moka::sync::Cache;

use insight_core::config::CacheConfig;
use insight_core::errors::{InsightError, InsightResult};
use insight_core::models::GroupSnapshot;
use insight_core::traits::IGroupFetcher;
use insight_observability::events;

use crate::clock::{Clock, SystemClock};
use crate::normalize::normalize_group_id;

/// A cached snapshot and when the cache stored it.
#[derive(Debug)]
pub struct CacheEntry {
    pub snapshot: Arc<GroupSnapshot>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }
}

/// Shared cache of group snapshots keyed by normalized group id.
pub struct SnapshotCache {
    entries: Cache<String, Arc<CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SnapshotCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let entries = Cache::builder()
            .max_capacity(config.max_entries)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        let ttl = Duration::from_std(config.ttl()).unwrap_or(Duration::MAX);

        Self {
            entries,
            ttl,
            clock,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return a fresh snapshot of `group_id`, fetching it if the cached one
    /// is missing or stale.
    ///
    /// A failed fetch propagates and leaves any stale entry in place; that
    /// entry is still never returned.
    pub async fn get(
        &self,
        group_id: &str,
        fetcher: &dyn IGroupFetcher,
    ) -> InsightResult<Arc<GroupSnapshot>> {
        let key = Self::key(group_id)?;

        let stale = match self.entries.get(&key) {
            Some(entry) => {
                let age = entry.age(self.clock.now());
                if age < self.ttl {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    events::snapshot_cache_hit(&key, age.num_seconds());
                    return Ok(Arc::clone(&entry.snapshot));
                }
                true
            }
            None => false,
        };

        self.misses.fetch_add(1, Ordering::Relaxed);
        events::snapshot_cache_miss(&key, stale);
        self.fetch_and_store(key, fetcher).await
    }

    /// Fetch `group_id` regardless of what is cached.
    pub async fn refresh(
        &self,
        group_id: &str,
        fetcher: &dyn IGroupFetcher,
    ) -> InsightResult<Arc<GroupSnapshot>> {
        let key = Self::key(group_id)?;
        self.fetch_and_store(key, fetcher).await
    }

    /// Drop the entry for `group_id`, if any.
    pub fn invalidate(&self, group_id: &str) {
        self.entries.invalidate(&normalize_group_id(group_id));
    }

    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }

    /// Whether an entry (fresh or stale) is held for `group_id`.
    pub fn contains(&self, group_id: &str) -> bool {
        self.entries.contains_key(&normalize_group_id(group_id))
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Share of lookups served from the cache; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    /// Approximate number of held entries.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn key(group_id: &str) -> InsightResult<String> {
        let key = normalize_group_id(group_id);
        if key.is_empty() {
            return Err(InsightError::GroupNotFound {
                group_id: group_id.to_string(),
            });
        }
        Ok(key)
    }

    async fn fetch_and_store(
        &self,
        key: String,
        fetcher: &dyn IGroupFetcher,
    ) -> InsightResult<Arc<GroupSnapshot>> {
        match fetcher.fetch_group_snapshot(&key).await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                let entry = CacheEntry {
                    snapshot: Arc::clone(&snapshot),
                    fetched_at: self.clock.now(),
                };
                self.entries.insert(key, Arc::new(entry));
                Ok(snapshot)
            }
            Err(err) => {
                events::snapshot_refresh_failed(&key, &err.to_string());
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for SnapshotCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCache")
            .field("ttl_secs", &self.ttl.num_seconds())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}
