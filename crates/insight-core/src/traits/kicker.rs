use async_trait::async_trait;

use crate::errors::InsightResult;
use crate::models::KickReport;

/// Removes members from a group.
#[async_trait]
pub trait IMemberKicker: Send + Sync {
    /// Remove `member_ids` from `group_id`. The report lists who was actually removed.
    async fn kick_members(&self, group_id: &str, member_ids: &[String])
        -> InsightResult<KickReport>;
}
