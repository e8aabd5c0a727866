//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Configuration problems are reported before any simulation starts, so a
/// caller never sees partial results next to an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame capacity was negative.
    #[error("Invalid configuration: frame capacity {capacity} is negative")]
    InvalidConfiguration { capacity: i64 },

    /// Frame capacity is larger than this platform can address.
    #[error("Invalid configuration: frame capacity {capacity} exceeds this platform's address space")]
    CapacityOverflow { capacity: i64 },

    /// No replacement policy was requested.
    #[error("No replacement policies requested")]
    EmptyPolicySet,

    /// A trace token is not a valid page identifier.
    #[error("Invalid page reference: {token:?}")]
    InvalidPageReference { token: String },

    /// Policy name not recognized.
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),

    /// I/O error from a result sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfiguration { capacity: -3 };
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: frame capacity -3 is negative"
        );

        let err = Error::CapacityOverflow {
            capacity: 1 << 40,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: frame capacity 1099511627776 exceeds this platform's address space"
        );

        let err = Error::EmptyPolicySet;
        assert_eq!(format!("{}", err), "No replacement policies requested");

        let err = Error::InvalidPageReference {
            token: "x1".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid page reference: \"x1\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = Error::from(io_err);
        assert!(err.source().is_some());
        assert!(Error::EmptyPolicySet.source().is_none());
    }
}
