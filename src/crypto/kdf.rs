//! Password-based key derivation
//!
//! ```text
//! key = PBKDF2-HMAC-SHA256(password, salt, PBKDF2_ITERATIONS, KEY_LEN)
//! ```
//!
//! The iteration count and hash are fixed policy; changing either breaks
//! every envelope produced so far.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};

/// A derived 256-bit key
///
/// Lives for one encrypt or decrypt call and is wiped on drop. `Debug` is
/// intentionally not derived.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    bytes: [u8; KEY_LEN],
}

impl KeyMaterial {
    /// Stretches `password` with `salt`
    pub fn derive(password: &str, salt: &[u8; SALT_LEN]) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut bytes);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
