//! # insight-service
//!
//! Turns chat text into typed commands and runs them against the graph
//! engine, the snapshot cache, and the external collaborators.

pub mod handler;
pub mod help;
pub mod parser;

pub use handler::{Collaborators, CommandHandler, CommandOutcome};
pub use parser::CommandParser;
