//! Errors at the model gateway boundary

use thiserror::Error;

/// Failure of a model gateway call. The router swallows all of these.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("model gateway timed out after {0} ms")]
    Timeout(u64),

    #[error("model gateway transport error: {0}")]
    Transport(String),

    #[error("model gateway returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode model gateway response: {0}")]
    Decode(String),

    #[error("model gateway unavailable: {0}")]
    Unavailable(String),
}
