//! Error types for the Punk API query layer.
//!
//! Translating a [`BeerFilter`](crate::beers::BeerFilter) never fails. Errors
//! only come from parsing user-supplied text and from encoding a finished
//! request.

use thiserror::Error;

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a beers query.
#[derive(Debug, Error)]
pub enum Error {
    /// The text does not name a known condition.
    #[error("invalid condition: {value} (expected gt or lt)")]
    InvalidCondition {
        /// The unrecognized input.
        value: String,
    },

    /// The text is not a brew date in `MM-YYYY` or `YYYY-MM-DD` form.
    #[error("invalid brew date: {value} (expected MM-YYYY or YYYY-MM-DD)")]
    InvalidDate {
        /// The unparseable input.
        value: String,
    },

    /// Form encoding of the query pairs failed.
    #[error("failed to encode query: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl Error {
    /// Creates an invalid condition error.
    pub fn invalid_condition(value: impl Into<String>) -> Self {
        Error::InvalidCondition {
            value: value.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Error::InvalidDate {
            value: value.into(),
        }
    }

    /// Returns true if the error was caused by malformed user input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidCondition { .. } | Error::InvalidDate { .. })
    }
}
