//! Password encryption errors
//!
//! Decryption deliberately has a single failure value. Whether the password
//! was wrong or the envelope was damaged is never reported.

use std::fmt;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Envelope is not valid base64 or is shorter than salt + nonce
    ///
    /// Only surfaced when parsing an envelope on its own; the password
    /// decryption path reports [`CryptoError::DecryptionFailed`] instead.
    MalformedEnvelope,

    /// The authenticated cipher refused to encrypt
    EncryptionFailed,

    /// Decryption failed
    ///
    /// Covers malformed envelopes, wrong passwords, tampered ciphertext and
    /// plaintext that is not UTF-8 alike.
    DecryptionFailed,
}

impl std::error::Error for CryptoError {}

impl Display for CryptoError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CryptoError::MalformedEnvelope => "malformed envelope".fmt(fmt),
            CryptoError::EncryptionFailed => "encryption failed".fmt(fmt),
            CryptoError::DecryptionFailed => {
                "decryption failed, check your password and data".fmt(fmt)
            }
        }
    }
}
