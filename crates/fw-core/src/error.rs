//! Error types for FortuneWheel

use thiserror::Error;

/// Core error type
///
/// A rejected concurrent spin is deliberately not represented here: it is a
/// normal outcome (`SpinOutcome::Rejected` in fw-engine), not a failure.
#[derive(Error, Debug)]
pub enum FwError {
    /// Wheel construction failed validation (empty, duplicate labels)
    #[error("Invalid wheel: {0}")]
    InvalidWheel(String),

    /// The draw service returned a value absent from the wheel.
    /// Fatal contract violation — never clamped to a nearby segment.
    #[error("Winning value not on the wheel: {0:?}")]
    InvalidWinningValue(String),

    /// Network/transport/non-success response from the draw service
    #[error("Draw service error: {0}")]
    Draw(String),

    /// The draw request did not answer within the configured timeout
    #[error("Draw request timed out after {0} ms")]
    Timeout(u64),

    /// A caller-supplied parameter was out of range
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),
}

/// Result type alias
pub type FwResult<T> = Result<T, FwError>;
