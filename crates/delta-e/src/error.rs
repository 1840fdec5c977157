//! Error types for color parsing and reference set construction

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not an optional `#` followed by exactly six
/// hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The digit part (after stripping an optional '#') is not 6 characters long
    InvalidLength {
        /// Number of characters found after the optional '#'
        len: usize,
    },
    /// A character in the digit part is not a hexadecimal digit
    InvalidHex {
        /// Character offset within the input string
        position: usize,
        /// The offending character
        found: char,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { len } => {
                write!(
                    f,
                    "invalid hex color length: expected 6 digits, found {}",
                    len
                )
            }
            ParseColorError::InvalidHex { position, found } => {
                write!(f, "invalid hex character {:?} at position {}", found, position)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for reference set validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// No reference colors provided
    Empty,
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for ReferenceError {
    fn from(err: ParseColorError) -> Self {
        ReferenceError::ParseColor(err)
    }
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceError::Empty => write!(f, "at least one reference color is required"),
            ReferenceError::DuplicateColor { index } => {
                write!(f, "duplicate reference color at index {}", index)
            }
            ReferenceError::ParseColor(err) => write!(f, "invalid color: {}", err),
        }
    }
}

impl std::error::Error for ReferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReferenceError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
