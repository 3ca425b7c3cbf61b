// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Turns raw length arguments into printed counts.
//!
//! One line of output per argument, in order. A bad argument is reported on
//! the error stream and the remaining arguments are still counted.

use std::io::{self, Write};

use crate::counter::SequenceCounter;
use crate::error::LengthError;
use crate::geometry::constants::{DEFAULT_LENGTH, MAX_LENGTH};

/// Outcome of a run over a list of arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub counted: usize,
    pub rejected: usize,
}

/// Parse one argument as a sequence length.
///
/// Zero and negative lengths are accepted; the counter treats them as
/// length 1.
pub fn parse_length(arg: &str) -> Result<i64, LengthError> {
    let length = arg.parse::<i64>().map_err(|source| LengthError::NotANumber {
        arg: arg.to_string(),
        source,
    })?;
    if length > MAX_LENGTH {
        return Err(LengthError::TooLong {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok(length)
}

/// Count each argument, writing counts to `out` and rejections to `err`.
///
/// With no arguments, counts [`DEFAULT_LENGTH`].
pub fn run<O: Write, E: Write>(
    counter: &SequenceCounter<'_>,
    args: &[String],
    out: &mut O,
    err: &mut E,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    if args.is_empty() {
        writeln!(out, "{}", counter.count_sequences(DEFAULT_LENGTH))?;
        summary.counted += 1;
        return Ok(summary);
    }

    for arg in args {
        match parse_length(arg) {
            Ok(length) => {
                writeln!(out, "{}", counter.count_sequences(length))?;
                summary.counted += 1;
            }
            Err(rejection) => {
                tracing::debug!(%arg, "rejected length argument");
                writeln!(err, "{}", rejection)?;
                summary.rejected += 1;
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("10"), Ok(10));
        assert_eq!(parse_length("+3"), Ok(3));
        assert_eq!(parse_length("0"), Ok(0));
        assert_eq!(parse_length("-4"), Ok(-4));
        assert_eq!(parse_length("36"), Ok(36));
    }

    #[test]
    fn test_parse_length_rejects_text() {
        assert!(matches!(
            parse_length("x1"),
            Err(LengthError::NotANumber { ref arg, .. }) if arg == "x1"
        ));
        assert!(matches!(
            parse_length(""),
            Err(LengthError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_length("2.5"),
            Err(LengthError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_parse_length_rejects_overflowing_length() {
        assert_eq!(
            parse_length("37"),
            Err(LengthError::TooLong { length: 37, max: 36 })
        );
    }
}
