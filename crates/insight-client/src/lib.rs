//! # insight-client
//!
//! Talks to the messaging backend over HTTP. `protocol` holds the wire
//! types and their conversion into core models; `http_client` sends them.

pub mod http_client;
pub mod protocol;

pub use http_client::ApiClient;
pub use protocol::{ApiEnvelope, ChatRoomInfo, KickResult};
