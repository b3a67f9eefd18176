//! Error types returned by the scan kernels.

use thiserror::Error;

/// The error type for kernel calls that violate a precondition.
///
/// A kernel either returns its full output or one of these; no partial
/// output is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input sequence is empty and the operation needs at least one element.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// A scalar parameter violates its documented precondition.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_empty_input_message() {
        assert_eq!(Error::EmptyInput.to_string(), "empty input: no data provided");
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::InvalidArgument {
            argument: "lag",
            reason: "must be less than the input length",
        };
        assert_eq!(
            err.to_string(),
            "invalid argument `lag`: must be less than the input length"
        );
    }

    #[test]
    fn test_error_equality() {
        let lag_zero = Error::InvalidArgument {
            argument: "lag",
            reason: "must be at least 1",
        };
        assert_eq!(lag_zero.clone(), lag_zero);
        assert_ne!(Error::EmptyInput, lag_zero);
    }

    #[test]
    fn test_error_is_core_error() {
        fn accepts_error<E: core::error::Error>(_: E) {}
        accepts_error(Error::EmptyInput);
    }
}
