//! Error types for Summit.

use std::fmt;

/// The main error type for Summit operations.
#[derive(Debug)]
pub enum Error {
    /// A filter referenced an unknown field or operator token, or supplied
    /// a non-numeric value for an integer field
    InvalidFilter(String),

    /// More than one field carried a non-equality operator in a single query
    MultipleInequalityFields,

    /// Malformed client input outside the filter language
    BadRequest(String),

    /// No authenticated user on a request that requires one
    Unauthorized,

    /// A referenced record does not exist
    NotFound(String),

    /// The request conflicts with current record state
    Conflict(String),

    /// A websafe key string could not be decoded
    InvalidKey(String),

    /// Record encode/decode error (internal)
    Serialization(String),

    /// A lock was poisoned (internal error)
    LockPoisoned,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFilter(msg) => write!(f, "Invalid filter: {}", msg),
            Error::MultipleInequalityFields => {
                write!(f, "Inequality filter is allowed on only one field")
            }
            Error::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Error::Unauthorized => write!(f, "Authorization required"),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Error::LockPoisoned => write!(f, "Lock poisoned"),
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for Summit operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true when the error should be reported to the client as a
    /// rejection of its input rather than as a service fault.
    ///
    /// Client rejections are terminal: retrying the same request cannot
    /// succeed.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Serialization(_) | Error::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidFilter("unknown field 'SPEAKER'".to_string());
        assert_eq!(err.to_string(), "Invalid filter: unknown field 'SPEAKER'");

        assert_eq!(
            Error::MultipleInequalityFields.to_string(),
            "Inequality filter is allowed on only one field"
        );
        assert_eq!(Error::Unauthorized.to_string(), "Authorization required");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::InvalidFilter(String::new()).is_client_error());
        assert!(Error::MultipleInequalityFields.is_client_error());
        assert!(Error::NotFound(String::new()).is_client_error());
        assert!(Error::Conflict(String::new()).is_client_error());
        assert!(!Error::LockPoisoned.is_client_error());
        assert!(!Error::Serialization(String::new()).is_client_error());
    }
}
