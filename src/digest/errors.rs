//! Digest selection errors

use std::fmt;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Name is not one of md5, sha1 / sha-1, sha256 / sha-256
    UnknownAlgorithm(String),
}

impl std::error::Error for DigestError {}

impl Display for DigestError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DigestError::UnknownAlgorithm(name) => {
                write!(fmt, "unknown digest algorithm: {}", name)
            }
        }
    }
}
