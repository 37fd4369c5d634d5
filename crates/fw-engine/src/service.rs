//! Draw service capability — the remote authority for winning values

use async_trait::async_trait;
use thiserror::Error;

/// Draw service failure modes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawServiceError {
    /// Network/transport failure before any response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status from the service
    #[error("Draw service returned status {0}")]
    Status(u16),

    /// Response arrived but the body could not be decoded
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

/// The remote draw service.
///
/// Returns the winning segment label for a draw identifier. Per contract the
/// returned label must exist on the configured wheel; the controller treats
/// any other value as a fatal session failure, never as something to clamp.
#[async_trait]
pub trait DrawService: Send + Sync {
    /// Request the winning value for `draw_code`, passing the optional
    /// session-context token through to the service.
    async fn request_winning_value(
        &self,
        draw_code: &str,
        session_context: Option<&str>,
    ) -> Result<String, DrawServiceError>;
}
