//! Seams toward the external collaborators.

pub mod fetcher;
pub mod kicker;
pub mod messenger;
pub mod renderer;

pub use fetcher::IGroupFetcher;
pub use kicker::IMemberKicker;
pub use messenger::IMessageSink;
pub use renderer::IGraphRenderer;
