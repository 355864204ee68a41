use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};

use super::errors::CryptoError;
use super::kdf::KeyMaterial;
use super::NONCE_LEN;

/// AES-256-GCM cipher block
///
/// Thin wrapper over the AEAD primitive. The caller owns nonce generation;
/// output is ciphertext with the 16-byte tag appended.
pub struct Aes256Block {
    cipher: Aes256Gcm,
}

impl Aes256Block {
    pub fn new(key: &KeyMaterial) -> Self {
        let cipher = Aes256Gcm::new(key.as_bytes().into());
        Self { cipher }
    }

    /// Encrypts data in-place: plaintext becomes ciphertext || tag
    pub fn encrypt(&self, nonce: &[u8; NONCE_LEN], data: &mut Vec<u8>) -> Result<(), CryptoError> {
        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(nonce), data.as_ref())
            .map_err(|_| CryptoError::EncryptionFailed)?;

        data.clear();
        data.extend_from_slice(&ciphertext);
        Ok(())
    }

    /// Decrypts data in-place: ciphertext || tag becomes plaintext
    ///
    /// Fails if the tag does not verify.
    pub fn decrypt(&self, nonce: &[u8; NONCE_LEN], data: &mut Vec<u8>) -> Result<(), CryptoError> {
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), data.as_ref())
            .map_err(|_| CryptoError::DecryptionFailed)?;

        data.clear();
        data.extend_from_slice(&plaintext);
        Ok(())
    }
}
