//! Bounded, cycle-safe walks over the relationship index.
//!
//! - `upstream`: inviter chain toward the root, nearest ancestor last.
//! - `downstream`: breadth-first set of everyone a member transitively invited.

pub mod downstream;
pub mod upstream;

pub use downstream::{Descendant, DownstreamSet};
pub use upstream::{Ancestor, ChainEntry, UpstreamChain};
