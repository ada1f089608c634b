//! Error taxonomy. Data anomalies and traversal bounds never surface here;
//! only collaborator failures and failed lookups do.

pub mod api_error;
pub mod parse_error;
pub mod render_error;

pub use api_error::ApiError;
pub use parse_error::CommandParseError;
pub use render_error::RenderError;

/// Convenience alias used across the workspace.
pub type InsightResult<T> = Result<T, InsightError>;

/// Top-level error for every fallible operation.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("group not found: {group_id}")]
    GroupNotFound { group_id: String },

    #[error("group {group_id} has no members")]
    EmptyGroup { group_id: String },

    #[error("member {member_id} is not in group {group_id}")]
    MemberNotFound { member_id: String, group_id: String },

    #[error("kick failed in group {group_id}: {reason}")]
    KickFailed { group_id: String, reason: String },

    #[error("api error: {0}")]
    ApiError(#[from] ApiError),

    #[error("render error: {0}")]
    RenderError(#[from] RenderError),

    #[error("parse error: {0}")]
    ParseError(#[from] CommandParseError),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl InsightError {
    /// Text shown to the end user when a command fails.
    pub fn user_message(&self) -> String {
        match self {
            Self::GroupNotFound { group_id } => format!("Failed to fetch group '{group_id}'."),
            Self::EmptyGroup { group_id } => format!("Group '{group_id}' has no members."),
            Self::MemberNotFound { member_id, .. } => {
                format!("Member '{member_id}' is not in this group.")
            }
            Self::KickFailed { .. } => {
                "Kick failed. Please check the bot's permissions.".to_string()
            }
            Self::RenderError(RenderError::TimedOut { .. }) => {
                "Render timed out, please try again later.".to_string()
            }
            Self::RenderError(RenderError::Unavailable) => {
                "Graph rendering is not available.".to_string()
            }
            Self::RenderError(RenderError::Failed { .. }) => {
                "Failed to generate the relationship graph.".to_string()
            }
            Self::ParseError(CommandParseError::InvalidFormat { usage }) => {
                format!("Invalid command format. Usage: {usage}")
            }
            Self::ApiError(_) => "The messaging backend request failed.".to_string(),
            Self::ConfigError(_) => "Internal error, please check the logs.".to_string(),
        }
    }
}
