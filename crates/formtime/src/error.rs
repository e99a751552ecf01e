//! Error types for the converter library.

use thiserror::Error;

use crate::value::TemporalFamily;

/// Comprehensive error type for all converter operations.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Pattern string rejected by the underlying formatting library
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: jiff::Error,
    },
    /// Formatter preset unknown, or not usable by the converter's family
    #[error("Invalid formatter preset '{name}': {reason}")]
    InvalidFormatter { name: String, reason: String },
    /// Zone identifier not known to the time zone database
    #[error("Invalid zone identifier '{zone_id}': {source}")]
    InvalidZone {
        zone_id: String,
        #[source]
        source: jiff::Error,
    },
    /// Value of the wrong temporal family passed to a format call
    #[error("Unsupported value: expected {expected} value, got {actual} value")]
    UnsupportedValue {
        expected: TemporalFamily,
        actual: TemporalFamily,
    },
    /// Text did not match the active format during a parse call
    #[error("Cannot parse '{text}' as {family}: {source}")]
    Parse {
        text: String,
        family: TemporalFamily,
        #[source]
        source: jiff::Error,
    },
    /// The active format cannot render the given value
    #[error("Cannot format {family} value: {source}")]
    Format {
        family: TemporalFamily,
        #[source]
        source: jiff::Error,
    },
}

impl ConvertError {
    /// Creates a pattern error for a pattern rejected during validation.
    pub(crate) fn invalid_pattern(pattern: impl Into<String>, source: jiff::Error) -> Self {
        ConvertError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates a parse error for text that did not match the active format.
    pub(crate) fn parse(text: impl Into<String>, family: TemporalFamily, source: jiff::Error) -> Self {
        ConvertError::Parse {
            text: text.into(),
            family,
            source,
        }
    }

    /// Creates a format error for a value the active format cannot render.
    pub(crate) fn format(family: TemporalFamily, source: jiff::Error) -> Self {
        ConvertError::Format { family, source }
    }
}

/// Result type alias for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;
