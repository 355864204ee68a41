//! Text codec errors

use std::fmt;
use std::fmt::Display;

/// Base64 text decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input is not valid padded base64
    ///
    /// Occurs when:
    /// - a character outside the standard alphabet appears
    /// - padding is missing or misplaced
    Invalid,

    /// Decoded bytes are not UTF-8 text
    NotUtf8,
}

impl std::error::Error for CodecError {}

impl Display for CodecError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodecError::Invalid => "invalid base64 input".fmt(fmt),
            CodecError::NotUtf8 => "decoded data is not valid UTF-8 text".fmt(fmt),
        }
    }
}
