//! Generator and session error types.
//!
//! A distractor shortfall is deliberately absent here: the option builder
//! always finishes the set on its own.

use thiserror::Error;

/// Errors raised by the question generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The operation tag is not one of the known kinds.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The requested range cannot produce a valid question.
    #[error("invalid range [{min}, {max}]: {reason}")]
    InvalidRange {
        min: i64,
        max: i64,
        reason: &'static str,
    },
}

impl GeneratorError {
    pub(crate) fn invalid_range(min: i64, max: i64, reason: &'static str) -> Self {
        GeneratorError::InvalidRange { min, max, reason }
    }
}

/// Errors raised while driving a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Question generation failed while building the quiz.
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// A quiz needs at least one question.
    #[error("a quiz needs at least one question")]
    EmptyQuiz,

    /// An answer was submitted after the last question.
    #[error("quiz already finished")]
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message() {
        let err = GeneratorError::invalid_range(9, 3, "min is greater than max");
        assert_eq!(err.to_string(), "invalid range [9, 3]: min is greater than max");
    }

    #[test]
    fn session_error_wraps_generator_error() {
        let err: SessionError = GeneratorError::UnknownOperation("modulo".into()).into();
        assert_eq!(err.to_string(), "unknown operation: modulo");
    }
}
