//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// A member record was skipped or overwrote an earlier one while indexing.
pub fn index_anomaly(kind: &str, invitee: &str, inviter: Option<&str>, detail: &str) {
    tracing::warn!(
        event = "index_anomaly",
        kind = %kind,
        invitee = %invitee,
        inviter = ?inviter,
        detail = %detail,
        "member record anomaly"
    );
}

/// Index construction finished.
pub fn index_built(members: usize, edges: usize, anomalies: usize) {
    tracing::debug!(
        event = "index_built",
        members = members,
        edges = edges,
        anomalies = anomalies,
        "relationship index built"
    );
}

/// An upstream walk revisited an ancestor.
pub fn upstream_cycle_detected(member_id: &str, at: &str) {
    tracing::warn!(
        event = "upstream_cycle_detected",
        member_id = %member_id,
        at = %at,
        "cycle in upstream invite chain"
    );
}

/// A traversal stopped at its configured bound.
pub fn traversal_truncated(direction: &str, member_id: &str, limit: usize) {
    tracing::info!(
        event = "traversal_truncated",
        direction = %direction,
        member_id = %member_id,
        limit = limit,
        "traversal truncated at bound"
    );
}

/// A downstream candidate disagreed with the parent index and was skipped.
pub fn stale_child_skipped(parent: &str, child: &str, recorded_parent: Option<&str>) {
    tracing::debug!(
        event = "stale_child_skipped",
        parent = %parent,
        child = %child,
        recorded_parent = ?recorded_parent,
        "children entry disagrees with parent index"
    );
}

/// The assembled graph contains invite cycles.
pub fn graph_cycles_found(group_id: &str, components: usize, largest: usize) {
    tracing::warn!(
        event = "graph_cycles_found",
        group_id = %group_id,
        components = components,
        largest = largest,
        "invite graph contains cycles"
    );
}

/// Topology classification result.
pub fn topology_classified(group_id: &str, shape: &str, max_fanout: usize, group_size: usize) {
    tracing::info!(
        event = "topology_classified",
        group_id = %group_id,
        shape = %shape,
        max_fanout = max_fanout,
        group_size = group_size,
        "topology classified"
    );
}

/// A snapshot was served from cache.
pub fn snapshot_cache_hit(group_id: &str, age_secs: i64) {
    tracing::debug!(
        event = "snapshot_cache_hit",
        group_id = %group_id,
        age_secs = age_secs,
        "snapshot cache hit"
    );
}

/// A snapshot had to be fetched.
pub fn snapshot_cache_miss(group_id: &str, stale: bool) {
    tracing::debug!(
        event = "snapshot_cache_miss",
        group_id = %group_id,
        stale = stale,
        "snapshot cache miss"
    );
}

/// A fetch behind the cache failed.
pub fn snapshot_refresh_failed(group_id: &str, error: &str) {
    tracing::error!(
        event = "snapshot_refresh_failed",
        group_id = %group_id,
        error = %error,
        "snapshot refresh failed"
    );
}

/// A command arrived.
pub fn command_received(kind: &str, origin_group: &str) {
    tracing::info!(
        event = "command_received",
        kind = %kind,
        origin_group = %origin_group,
        "command received"
    );
}

/// A command failed.
pub fn command_failed(kind: &str, origin_group: &str, error: &str) {
    tracing::error!(
        event = "command_failed",
        kind = %kind,
        origin_group = %origin_group,
        error = %error,
        "command failed"
    );
}

/// A render finished.
pub fn render_completed(group_id: &str, nodes: usize, edges: usize, elapsed_ms: u128) {
    tracing::info!(
        event = "render_completed",
        group_id = %group_id,
        nodes = nodes,
        edges = edges,
        elapsed_ms = elapsed_ms as u64,
        "graph rendered"
    );
}

/// A render exceeded its timeout and was abandoned.
pub fn render_timed_out(group_id: &str, timeout_secs: u64) {
    tracing::error!(
        event = "render_timed_out",
        group_id = %group_id,
        timeout_secs = timeout_secs,
        "render timed out"
    );
}

/// Members were removed from a group.
pub fn members_kicked(group_id: &str, requested: usize, kicked: &[String]) {
    tracing::info!(
        event = "members_kicked",
        group_id = %group_id,
        requested = requested,
        kicked = ?kicked,
        "members kicked"
    );
}
