//! Error types for timerange

use thiserror::Error;

/// Result type for timerange operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when working with time ranges.
///
/// Every kind is a precondition violation reported synchronously to the
/// caller; none are transient or retryable. Variants carry no payload so
/// callers can match on kind rather than message text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// End instant strictly precedes the start instant at construction
    #[error("end time must be after start time")]
    InvalidRange,

    /// Pairwise merge requested on ranges that neither overlap nor touch
    #[error("time ranges do not overlap")]
    NoOverlap,

    /// The common intersection window of all ranges is empty
    #[error("no intersection found")]
    NoIntersection,

    /// A set operation was given an empty input collection
    #[error("invalid argument")]
    InvalidArgument,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidRange.to_string(),
            "end time must be after start time"
        );
        assert_eq!(Error::NoOverlap.to_string(), "time ranges do not overlap");
    }

    #[test]
    fn test_errors_compare_by_kind() {
        assert_eq!(Error::NoIntersection, Error::NoIntersection);
        assert_ne!(Error::NoIntersection, Error::InvalidArgument);
    }
}
