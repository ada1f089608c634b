/// Command text parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum CommandParseError {
    #[error("invalid command format, expected: {usage}")]
    InvalidFormat { usage: String },
}
