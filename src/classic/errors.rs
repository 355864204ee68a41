//! Classical cipher validation and parsing errors
//!
//! Every error here is produced before any text is transformed: cipher
//! constructors validate their parameters up front, and the textual variant
//! parser rejects malformed input before a cipher is ever built.

use std::fmt;
use std::fmt::Display;

/// Classical cipher failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key reduces to nothing once non-letters are removed
    ///
    /// Raised by Vigenère when the key contains no ASCII letters.
    EmptyKey,

    /// The substitution key is not a permutation of A-Z
    ///
    /// Occurs when, after uppercasing and stripping non-letters, the key:
    /// - is not exactly 26 letters long
    /// - repeats a letter
    InvalidKey,

    /// Rail fence needs at least two rails
    InvalidRailCount,

    /// Affine multiplier shares a factor with 26, so it has no inverse
    NonCoprimeParameter,

    /// A numeric cipher parameter (shift, rails, a, b) did not parse
    MalformedNumericParameter,

    /// A binary token is not a base-2 number naming a valid character
    MalformedBinaryToken(String),

    /// The variant name is not one of the supported ciphers
    UnknownVariant(String),
}

impl std::error::Error for CipherError {}

impl Display for CipherError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CipherError::EmptyKey => "key must contain at least one letter".fmt(fmt),
            CipherError::InvalidKey => "key must be a permutation of the 26 letters".fmt(fmt),
            CipherError::InvalidRailCount => "rail fence requires at least 2 rails".fmt(fmt),
            CipherError::NonCoprimeParameter => {
                "parameter \"a\" must be coprime with 26".fmt(fmt)
            }
            CipherError::MalformedNumericParameter => "numeric parameter expected".fmt(fmt),
            CipherError::MalformedBinaryToken(token) => {
                write!(fmt, "invalid binary token: {:?}", token)
            }
            CipherError::UnknownVariant(name) => write!(fmt, "unknown cipher: {}", name),
        }
    }
}
