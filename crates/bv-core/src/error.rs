//! Error types for the scoring engine.
//!
//! Recording and undoing rolls never fails; these errors only cover
//! turning user-supplied text into deliveries and symbols.

/// Errors that can occur while interpreting bowling input.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The text is not a pin count, `x`, `/`, `f`, or `-`.
    #[error("invalid delivery: \"{0}\"")]
    InvalidDelivery(String),

    /// A pin count above ten.
    #[error("pin count {0} is out of range (0-10)")]
    PinsOutOfRange(u32),

    /// A spare was entered as the first ball of a frame.
    #[error("a spare cannot be the first ball of a frame")]
    SpareOnFirstBall,
}

/// Convenience result type for engine input handling.
pub type CoreResult<T> = Result<T, CoreError>;
