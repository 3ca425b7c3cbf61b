// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for length arguments.
//!
//! The counting core is infallible; these errors arise only where raw
//! arguments are turned into lengths.

use std::num::ParseIntError;

/// Why an argument could not be counted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
    /// The argument is not an integer.
    #[error("{arg} is not a number: {source}")]
    NotANumber { arg: String, source: ParseIntError },

    /// The count for this length would overflow a `u64`.
    #[error("{length} exceeds the maximum supported length {max}")]
    TooLong { length: i64, max: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_number_display() {
        let source = "ten".parse::<i64>().unwrap_err();
        let err = LengthError::NotANumber {
            arg: "ten".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "ten is not a number: invalid digit found in string"
        );
    }

    #[test]
    fn test_too_long_display() {
        let err = LengthError::TooLong { length: 40, max: 36 };
        assert_eq!(
            err.to_string(),
            "40 exceeds the maximum supported length 36"
        );
    }
}
