use std::io;
use std::num::ParseIntError;
use std::result;
use thiserror::Error;

/// Errors produced by the tree and its loader.
///
/// A missing key is not an error: lookups return `Option` and `delete` returns `bool`. Inserting
/// a duplicate key is likewise reported by `insert` returning `false`.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation needs at least one key but the tree is empty.
    #[error("the tree is empty")]
    EmptyTree,

    /// The input holds more values than the configured maximum. Reading stops at the first value
    /// over the limit, so `count` is `max + 1`.
    #[error("input contains more than the configured maximum of {max} values")]
    CapacityExceeded { count: usize, max: usize },

    /// A line of the input is not an integer.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    /// A range bound given on the command line is not an integer.
    #[error("invalid range bound {value:?}: {source}")]
    InvalidBound {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// An environment override does not hold a valid value.
    #[error("invalid value {value:?} for {var}")]
    InvalidConfig { var: &'static str, value: String },
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::EmptyTree.to_string(), "the tree is empty");
        assert_eq!(
            Error::CapacityExceeded { count: 101, max: 100 }.to_string(),
            "input contains more than the configured maximum of 100 values",
        );
    }

    #[test]
    fn test_parse_display() {
        let source = "x".parse::<i32>().unwrap_err();
        let error = Error::Parse { line: 3, source };
        assert_eq!(error.to_string(), "line 3: invalid digit found in string");
    }

    #[test]
    fn test_invalid_bound_display() {
        let source = "x".parse::<i32>().unwrap_err();
        let error = Error::InvalidBound { value: "x".to_string(), source };
        assert_eq!(error.to_string(), "invalid range bound \"x\": invalid digit found in string");
    }
}
