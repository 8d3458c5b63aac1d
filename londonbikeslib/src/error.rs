//! Error types for londonbikeslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating, answering or sourcing a query
#[derive(Error, Debug)]
pub enum LondonBikesError {
    /// `search` was given no term
    #[error("Please specify a search term")]
    MissingSearchTerm,

    /// `search` was given an argument list of the wrong shape
    #[error("The search request is invalid: {0}")]
    InvalidSearch(String),

    /// A proximity-search latitude, longitude or radius is not a number
    #[error("The search request is invalid: '{value}' is not a valid {field}")]
    NonNumericArgument { field: &'static str, value: String },

    /// The name-search term does not compile as a pattern
    #[error("The search request is invalid: bad search pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// `id` was given no bike point id
    #[error("Please specify a bike point ID")]
    MissingId,

    /// `id` was given more than one argument
    #[error("unexpected arguments: {0}")]
    UnexpectedArguments(String),

    /// No station exists with the requested id
    #[error("Bike point ID {id} not recognised")]
    NotFound { id: String },

    /// The station registry answered with a non-success status
    #[error("unexpected response from station registry ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Station data could not be decoded
    #[error("failed to parse station data: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a snapshot file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LondonBikesError {
    /// Process exit code for this error.
    ///
    /// 10 missing search term, 11 invalid search, 12 missing id,
    /// 13 id not found, 1 for usage and upstream failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            LondonBikesError::MissingSearchTerm => 10,
            LondonBikesError::InvalidSearch(_)
            | LondonBikesError::NonNumericArgument { .. }
            | LondonBikesError::InvalidPattern { .. } => 11,
            LondonBikesError::MissingId => 12,
            LondonBikesError::NotFound { .. } => 13,
            LondonBikesError::UnexpectedArguments(_)
            | LondonBikesError::Upstream { .. }
            | LondonBikesError::Http(_)
            | LondonBikesError::Json(_)
            | LondonBikesError::FileRead { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(LondonBikesError::MissingSearchTerm.exit_code(), 10);
        assert_eq!(
            LondonBikesError::InvalidSearch("2 arguments".to_string()).exit_code(),
            11
        );
        assert_eq!(
            LondonBikesError::NonNumericArgument {
                field: "radius",
                value: "far".to_string(),
            }
            .exit_code(),
            11
        );
        assert_eq!(LondonBikesError::MissingId.exit_code(), 12);
        assert_eq!(
            LondonBikesError::NotFound {
                id: "BikePoints_0".to_string(),
            }
            .exit_code(),
            13
        );
        assert_eq!(
            LondonBikesError::Upstream {
                status: 500,
                message: String::new(),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = LondonBikesError::NotFound {
            id: "BikePoints_9999".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Bike point ID BikePoints_9999 not recognised"
        );
    }
}
