//! Error types for the conversion helpers.
//!
//! The error surface here is deliberately small. Almost every operation in
//! this crate recovers from type mismatches by returning its input unchanged;
//! the only hard failures are caller misuse (handing a scalar to a function
//! that iterates a collection, or an empty grouping list to the nested
//! converter) and JSON encoding.
//!
//! ## Examples
//!
//! ```rust
//! use jsglue::{data_to_script, Error, Grouping, QuoteStyle, Value};
//!
//! let result = data_to_script(&Value::from(42), Grouping::Array, QuoteStyle::Double);
//! assert!(matches!(result, Err(Error::InvalidArgument(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors reported by the conversion helpers.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Caller misuse: a non-collection where a collection is required, or an
    /// empty grouping list.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON encoding failed.
    #[error("JSON encoding failed: {0}")]
    Json(String),

    /// Custom error with a display message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an invalid-argument error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsglue::Error;
    ///
    /// let err = Error::invalid_argument("values must be an array");
    /// assert!(err.to_string().contains("must be an array"));
    /// ```
    pub fn invalid_argument(msg: &str) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates a JSON encoding error.
    pub fn json<T: fmt::Display>(msg: T) -> Self {
        Error::Json(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
