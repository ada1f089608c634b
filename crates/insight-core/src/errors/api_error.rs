/// Messaging backend API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("api is not configured: {missing}")]
    NotConfigured { missing: String },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("api rejected request with code {code}: {message}")]
    Rejected { code: i64, message: String },

    #[error("cannot decode api response: {reason}")]
    Decode { reason: String },
}
