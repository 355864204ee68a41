//! Password-based authenticated encryption
//!
//! A fresh random salt and nonce are drawn for every encryption:
//! - PBKDF2-HMAC-SHA256 stretches the password with the salt into a 256-bit key
//! - AES-256-GCM encrypts and authenticates the plaintext under that key
//! - salt, nonce and sealed ciphertext are packed into a base64 [`Envelope`]
//!
//! Both operations are synchronous CPU work (the key derivation dominates);
//! async callers should run them on `tokio::task::spawn_blocking`.

pub mod aes256;
pub mod envelope;
pub mod errors;
pub mod kdf;

pub use crate::crypto::envelope::Envelope;
pub use crate::crypto::errors::CryptoError;

use crate::crypto::aes256::Aes256Block;
use crate::crypto::kdf::KeyMaterial;
use aes_gcm::aead::{rand_core::RngCore, OsRng};

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// Derived key length in bytes (AES-256)
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count, SHA-256 as the PRF
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt + nonce; anything shorter is not an envelope
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN;

/// Encrypts `plaintext` under a key derived from `password`
///
/// # Returns
/// * base64 envelope `salt || nonce || ciphertext || tag`
/// * `Err(CryptoError::EncryptionFailed)` if the AEAD primitive fails
///
/// # Examples
/// ```
/// use textcrypt::crypto::{decrypt_with_password, encrypt_with_password};
/// let envelope = encrypt_with_password("attack at dawn", "hunter2").unwrap();
/// assert_eq!(decrypt_with_password(&envelope, "hunter2").unwrap(), "attack at dawn");
/// ```
pub fn encrypt_with_password(plaintext: &str, password: &str) -> Result<String, CryptoError> {
    let salt: [u8; SALT_LEN] = random_bytes();
    let nonce: [u8; NONCE_LEN] = random_bytes();

    let key = KeyMaterial::derive(password, &salt);
    let mut sealed = plaintext.as_bytes().to_vec();
    Aes256Block::new(&key).encrypt(&nonce, &mut sealed)?;

    let envelope = Envelope {
        salt,
        nonce,
        sealed,
    };
    tracing::debug!(
        "sealed {} plaintext bytes into {} envelope bytes",
        plaintext.len(),
        HEADER_LEN + envelope.sealed.len()
    );
    Ok(envelope.to_base64())
}

/// Decrypts a base64 envelope produced by [`encrypt_with_password`]
///
/// # Returns
/// * the original plaintext
/// * `Err(CryptoError::DecryptionFailed)` for any failure: bad base64, short
///   envelope, wrong password, tampered data, or non-UTF-8 plaintext
pub fn decrypt_with_password(envelope: &str, password: &str) -> Result<String, CryptoError> {
    let envelope = Envelope::from_base64(envelope).map_err(|_| CryptoError::DecryptionFailed)?;

    let key = KeyMaterial::derive(password, &envelope.salt);
    let mut data = envelope.sealed;
    Aes256Block::new(&key)
        .decrypt(&envelope.nonce, &mut data)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    String::from_utf8(data).map_err(|_| CryptoError::DecryptionFailed)
}

/// Fills an array from the operating system's CSPRNG
fn random_bytes<const N: usize>() -> [u8; N] {
    let mut buf = [0u8; N];
    OsRng.fill_bytes(&mut buf);
    buf
}
