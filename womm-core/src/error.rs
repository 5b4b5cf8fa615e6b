use thiserror::Error;

/// Errors raised by the probability helpers.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProbabilityError {
    /// A success rate fell outside the closed interval `[0.0, 1.0]`.
    #[error("success rate must be between 0.0 and 1.0, got {value}")]
    InvalidArgument {
        /// The rejected value.
        value: f64,
    },
}

/// A type alias for `Result<T, ProbabilityError>`.
pub type ProbabilityResult<T> = Result<T, ProbabilityError>;
