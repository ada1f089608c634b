//! # insight-observability
//!
//! Structured tracing setup and the catalogue of structured log events
//! emitted by the graph engine, the snapshot cache, and the command handler.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
