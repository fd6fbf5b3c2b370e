use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("failed to reach insight service at {0}")]
    Connection(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("insight service returned status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("failed to parse insight response: {0}")]
    ResponseParsing(String),
}
