/// Rendering collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no renderer is available")]
    Unavailable,

    #[error("render timed out after {secs}s")]
    TimedOut { secs: u64 },

    #[error("render failed: {reason}")]
    Failed { reason: String },
}
