//! Vigenère cipher implementation
//!
//! The key is reduced to its letters and uppercased. A key pointer walks the
//! reduced key and advances only on letters of the text, so spaces and
//! punctuation do not shift the key stream out of alignment.

use super::alphabet::{letter_index, map_letters, modulo};
use super::{Cipher, CipherError};

pub struct VigenereCipher {
    // key letters as alphabet indices, never empty
    key: Vec<u8>,
}

impl VigenereCipher {
    /// Builds the cipher from a free-form key
    ///
    /// # Returns
    /// * `Err(CipherError::EmptyKey)` if the key contains no ASCII letters
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let key: Vec<u8> = key.chars().filter_map(letter_index).collect();
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Self { key })
    }

    fn apply(&self, text: &str, sign: i64) -> String {
        let mut pointer = 0;
        map_letters(text, |i| {
            let k = self.key[pointer % self.key.len()] as i64;
            pointer += 1;
            modulo(i as i64 + sign * k)
        })
    }
}

impl Cipher for VigenereCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.apply(text, 1))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.apply(text, -1))
    }
}
