// Single source of truth for all default values.

// --- Traversal ---
pub const DEFAULT_MAX_UPSTREAM_DEPTH: usize = 50;
pub const DEFAULT_MAX_DOWNSTREAM_NODES: usize = 500;

// --- Topology ---
pub const DEFAULT_STAR_ABSOLUTE_THRESHOLD: usize = 15;
pub const DEFAULT_STAR_RATIO_THRESHOLD: f64 = 0.3;

// --- Cache ---
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 256;

// --- Render ---
pub const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 90;

// --- API ---
pub const DEFAULT_API_REQUEST_TIMEOUT_SECS: u64 = 20;

// --- Commands ---
pub const DEFAULT_TRIGGER_GRAPH: &str = "#邀请关系";
pub const DEFAULT_TRIGGER_NETWORK: &str = "#查关系网";
pub const DEFAULT_TRIGGER_KICK_MEMBER: &str = "#踢人";
pub const DEFAULT_TRIGGER_KICK_DOWNLINE: &str = "#踢关系网";
pub const DEFAULT_TRIGGER_HELP: &str = "#帮助";
pub const DEFAULT_TARGET_SEPARATOR: &str = "到";
pub const DEFAULT_KICK_CONFIRM_DELAY_SECS: u64 = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
