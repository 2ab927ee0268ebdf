//! Error taxonomy for batch first-position calls.
//!
//! Only precondition violations and searcher construction failures are errors.
//! Empty haystacks, empty needle sets and zero matches are ordinary results.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Shared needle set exceeds what fits in a one-byte pattern id.
    #[error(
        "Number of arguments for function {function} doesn't match: passed {passed}, should be at most {max}"
    )]
    TooManyArguments {
        function: &'static str,
        passed: usize,
        max: usize,
    },

    #[error("Malformed offsets: {reason}")]
    MalformedOffsets { reason: String },

    #[error("Row count mismatch: expected {expected} needle rows, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("Pattern length {length} exceeds the maximum of {max}")]
    PatternTooLong { length: usize, max: usize },

    #[error("Total pattern length {length} exceeds the maximum of {max}")]
    PatternsTooLong { length: usize, max: usize },

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedOffsets {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_arguments_message_names_function_and_bounds() {
        let err = Error::TooManyArguments {
            function: "multiSearchFirstPosition",
            passed: 256,
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "Number of arguments for function multiSearchFirstPosition doesn't match: passed 256, should be at most 255"
        );
    }
}
