//! Envelope wire format
//!
//! ```text
//! +----------------+------------+---------------------------+
//! |  salt (16 B)   | nonce (12B)|  ciphertext || tag (16 B) |
//! +----------------+------------+---------------------------+
//! ```
//!
//! The whole buffer travels as standard, padded base64 with no length
//! prefix. This layout must stay stable so old envelopes keep decrypting.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::errors::CryptoError;
use super::{HEADER_LEN, NONCE_LEN, SALT_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext with the authentication tag appended
    pub sealed: Vec<u8>,
}

impl Envelope {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.sealed.len());
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.nonce);
        buf.extend_from_slice(&self.sealed);
        buf
    }

    /// Splits a raw envelope
    ///
    /// # Returns
    /// * `Err(CryptoError::MalformedEnvelope)` if `buf` is shorter than
    ///   salt + nonce (28 bytes)
    pub fn from_bytes(buf: &[u8]) -> Result<Self, CryptoError> {
        if buf.len() < HEADER_LEN {
            return Err(CryptoError::MalformedEnvelope);
        }

        let (salt, rest) = buf.split_at(SALT_LEN);
        let (nonce, sealed) = rest.split_at(NONCE_LEN);
        Ok(Self {
            salt: salt.try_into().map_err(|_| CryptoError::MalformedEnvelope)?,
            nonce: nonce.try_into().map_err(|_| CryptoError::MalformedEnvelope)?,
            sealed: sealed.to_vec(),
        })
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decodes and splits a base64 envelope
    ///
    /// Surrounding whitespace is ignored.
    pub fn from_base64(s: &str) -> Result<Self, CryptoError> {
        let buf = STANDARD
            .decode(s.trim())
            .map_err(|_| CryptoError::MalformedEnvelope)?;
        Self::from_bytes(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let envelope = Envelope {
            salt: [0xAA; SALT_LEN],
            nonce: [0xBB; NONCE_LEN],
            sealed: vec![1, 2, 3],
        };
        let bytes = envelope.to_bytes();
        assert_eq!(bytes.len(), 31);
        assert_eq!(&bytes[..16], &[0xAA; 16]);
        assert_eq!(&bytes[16..28], &[0xBB; 12]);
        assert_eq!(&bytes[28..], &[1, 2, 3]);

        let parsed = Envelope::from_base64(&envelope.to_base64()).unwrap();
        assert_eq!(parsed, envelope);
    }

    #[test]
    fn test_minimum_length() {
        assert_eq!(
            Envelope::from_bytes(&[0u8; 27]),
            Err(CryptoError::MalformedEnvelope)
        );
        let empty_payload = Envelope::from_bytes(&[0u8; 28]).unwrap();
        assert!(empty_payload.sealed.is_empty());
    }

    #[test]
    fn test_bad_base64() {
        assert_eq!(
            Envelope::from_base64("not base64 at all!"),
            Err(CryptoError::MalformedEnvelope)
        );
        assert_eq!(Envelope::from_base64(""), Err(CryptoError::MalformedEnvelope));
    }
}
