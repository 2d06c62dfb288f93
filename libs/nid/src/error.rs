//! Error types for identifier parsing, naming, and generation.

use thiserror::Error;

/// Errors that can occur when parsing, naming, or generating identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NidError {
    /// The encoded base has the wrong length (text or raw bytes).
    #[error("nid: failed to parse: invalid base id length: {0}")]
    InvalidLength(usize),

    /// The encoded base contains a byte outside the alphabet.
    #[error("nid: failed to parse: invalid base encoding: illegal byte {byte:#04x} at offset {offset}")]
    InvalidCharacter { byte: u8, offset: usize },

    /// The composite identifier has no usable `name_base` separator.
    #[error("nid: failed to parse: invalid named identifier: {0:?}")]
    InvalidFormat(String),

    /// The name part of a composite identifier breaks the name grammar.
    #[error("nid: failed to parse: identifier name must be a non-empty snake_case string: {0:?}")]
    InvalidIdentifierName(String),

    /// A storage value of an unsupported type was scanned.
    #[error("nid: failed to parse: invalid scan source: {0}")]
    InvalidSource(&'static str),

    /// A typed identifier was parsed from an identifier with another name.
    #[error("nid: failed to parse: expected identifier name '{expected}', got '{actual}'")]
    NameMismatch {
        expected: &'static str,
        actual: String,
    },

    /// A naming was constructed from an invalid name.
    #[error("nid: invalid name: must be a non-empty snake_case string: {0:?}")]
    InvalidName(String),

    /// The random source could not supply bytes.
    #[error("nid: entropy source failed: {0}")]
    Entropy(String),
}

impl NidError {
    /// Returns true if this error came from a decode boundary.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            NidError::InvalidLength(_)
                | NidError::InvalidCharacter { .. }
                | NidError::InvalidFormat(_)
                | NidError::InvalidIdentifierName(_)
                | NidError::InvalidSource(_)
                | NidError::NameMismatch { .. }
        )
    }

    /// Returns true if this error was raised while constructing a naming.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, NidError::InvalidName(_))
    }

    /// Returns true if the random source failed.
    pub fn is_entropy_failure(&self) -> bool {
        matches!(self, NidError::Entropy(_))
    }
}
