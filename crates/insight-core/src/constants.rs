/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on upstream walks, regardless of configuration.
pub const MAX_UPSTREAM_DEPTH: usize = 10_000;

/// Hard ceiling on downstream collection, regardless of configuration.
pub const MAX_DOWNSTREAM_NODES: usize = 100_000;

/// Separator used when joining an upstream chain into one line.
pub const CHAIN_SEPARATOR: &str = " -> ";

/// Suffix carried by chat-room group identifiers.
pub const CHATROOM_SUFFIX: &str = "@chatroom";
