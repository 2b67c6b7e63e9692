//! Error types for cdr-core operations.
//!
//! Color conversion itself never fails. Errors only arise at the text
//! edges of the system: parsing hex color strings and model tags typed by
//! a user or read from a configuration file.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing color values from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A `#RRGGBB` string was malformed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cdr_core::Rgb24;
    ///
    /// let err = "#12345".parse::<Rgb24>().unwrap_err();
    /// assert!(err.to_string().contains("#12345"));
    /// ```
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A numeric field could not be parsed.
    #[error("invalid number {input:?}: {reason}")]
    InvalidNumber {
        /// The offending input.
        input: String,
        /// Parser message.
        reason: String,
    },

    /// A number parsed but does not fit the target field.
    #[error("value {value} out of range for {field}")]
    OutOfRange {
        /// Field being parsed.
        field: &'static str,
        /// The parsed value.
        value: u64,
    },
}
