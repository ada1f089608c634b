use async_trait::async_trait;

use crate::errors::InsightResult;
use crate::models::GroupSnapshot;

/// Source of group membership snapshots.
#[async_trait]
pub trait IGroupFetcher: Send + Sync {
    /// Fetch the current membership of `group_id`.
    async fn fetch_group_snapshot(&self, group_id: &str) -> InsightResult<GroupSnapshot>;
}
