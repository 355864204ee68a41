//! Caesar shift and its fixed-shift special case, ROT13

use super::alphabet::{map_letters, modulo};
use super::{Cipher, CipherError};

/// Caesar cipher block
///
/// Shifts every letter by a fixed amount, wrapping around the alphabet.
/// Any shift is accepted; it is reduced modulo 26.
pub struct CaesarCipher {
    shift: i64,
}

impl CaesarCipher {
    pub fn new(shift: i64) -> Self {
        Self { shift }
    }

    fn shift_text(&self, text: &str, shift: i64) -> String {
        let offset = modulo(shift) as i64;
        map_letters(text, |i| modulo(i as i64 + offset))
    }
}

impl Cipher for CaesarCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.shift_text(text, self.shift))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        // reduce first so i64::MIN cannot overflow on negation
        Ok(self.shift_text(text, -(modulo(self.shift) as i64)))
    }
}

/// ROT13: Caesar with shift 13, its own inverse
pub struct Rot13Cipher {
    inner: CaesarCipher,
}

impl Rot13Cipher {
    pub fn new() -> Self {
        Self {
            inner: CaesarCipher::new(13),
        }
    }
}

impl Default for Rot13Cipher {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for Rot13Cipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        self.inner.encrypt(text)
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        self.inner.encrypt(text)
    }
}
