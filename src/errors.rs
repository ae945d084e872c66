//! Unified error type for the inventory service.
//!
//! Every fallible operation in the crate returns [`Result`]. The HTTP layer maps
//! each variant to a status code and a `{ "message": ... }` body in `api::error`.

use thiserror::Error;

/// Every failure the service can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong and where
        message: String,
    },

    /// Any fault reported by the store (connectivity, SQL, constraint)
    #[error("Database error: {0}")]
    Database(String),

    /// Listener bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No record exists for the identifier
    #[error("Item not found")]
    ItemNotFound {
        /// The identifier that was looked up
        id: i64,
    },

    /// The path identifier is not a valid record identifier
    #[error("Invalid item id: {id}")]
    MalformedId {
        /// The raw path segment
        id: String,
    },

    /// Missing or malformed create/update fields
    #[error("{message}")]
    InvalidInput {
        /// Which field was rejected and why
        message: String,
    },

    /// Applying the delta would drive the quantity below zero
    #[error("Insufficient stock to remove")]
    InsufficientStock {
        /// Units currently in stock
        available: i64,
        /// Units the update tried to remove
        requested: i64,
    },
}

impl From<sea_orm::DbErr> for Error {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Database(value.to_string())
    }
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let missing = Error::ItemNotFound { id: 7 };
        assert_eq!(missing.to_string(), "Item not found");

        let malformed = Error::MalformedId {
            id: "abc".to_string(),
        };
        assert_eq!(malformed.to_string(), "Invalid item id: abc");

        let short = Error::InsufficientStock {
            available: 2,
            requested: 5,
        };
        assert_eq!(short.to_string(), "Insufficient stock to remove");

        let io: Error = std::io::Error::other("address in use").into();
        assert!(matches!(io, Error::Io(_)));
        assert_eq!(io.to_string(), "I/O error: address in use");
    }
}
