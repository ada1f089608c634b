//! # insight-cache
//!
//! Snapshot cache shared by command handlers. Entries are served while
//! younger than the configured TTL and refetched on the next access after
//! that; capacity is bounded with LRU eviction.

pub mod clock;
pub mod normalize;
pub mod snapshot_cache;

pub use clock::{Clock, ManualClock, SystemClock};
pub use normalize::normalize_group_id;
pub use snapshot_cache::{CacheEntry, SnapshotCache};
