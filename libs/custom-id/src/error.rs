//! Error types for building and editing identifier formats.
//!
//! Generation and validation never fail; these errors only come from the
//! `Format` constructor and its editing operations.

use thiserror::Error;

/// Errors that can occur when constructing or editing a format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// More than one sequence element in the same format.
    #[error("format has more than one SEQUENCE element (positions {first} and {second})")]
    DuplicateSequence { first: usize, second: usize },

    /// Sequence padding outside the accepted range.
    #[error("invalid sequence padding {value}: must be between {min} and {max}")]
    InvalidPadding { value: i64, min: u8, max: u8 },

    /// An editing operation referenced a position that does not exist.
    #[error("element index {index} out of bounds (format has {len} elements)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The recognition pattern could not be compiled.
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    /// The persisted representation could not be decoded.
    #[error("invalid format JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormatError {
    /// Returns true if this error is a violation of the single-sequence rule.
    pub fn is_duplicate_sequence(&self) -> bool {
        matches!(self, FormatError::DuplicateSequence { .. })
    }

    /// Returns true if this error came from decoding JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, FormatError::Json(_))
    }
}
