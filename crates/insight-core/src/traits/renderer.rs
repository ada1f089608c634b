use async_trait::async_trait;

use crate::errors::InsightResult;
use crate::models::{RenderArtifact, RenderRequest};

/// Draws an assembled invite graph. May be slow; callers bound it with a timeout.
#[async_trait]
pub trait IGraphRenderer: Send + Sync {
    async fn render(&self, request: RenderRequest) -> InsightResult<RenderArtifact>;
}
