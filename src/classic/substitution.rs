use super::alphabet::{letter_index, map_letters, ALPHABET_LEN};
use super::{Cipher, CipherError};

/// Monoalphabetic substitution over a full 26-letter key alphabet
///
/// The key's n-th letter replaces the n-th letter of the standard alphabet.
/// Case follows the input letter; non-letters pass through.
pub struct SubstitutionCipher {
    forward: [u8; 26],
    inverse: [u8; 26],
}

impl SubstitutionCipher {
    /// # Returns
    /// * `Err(CipherError::InvalidKey)` unless the key's letters, uppercased,
    ///   are exactly a permutation of A-Z
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let letters: Vec<u8> = key.chars().filter_map(letter_index).collect();
        if letters.len() != ALPHABET_LEN as usize {
            return Err(CipherError::InvalidKey);
        }

        let mut forward = [0u8; 26];
        let mut inverse = [u8::MAX; 26];
        for (plain, &cipher) in letters.iter().enumerate() {
            if inverse[cipher as usize] != u8::MAX {
                return Err(CipherError::InvalidKey);
            }
            forward[plain] = cipher;
            inverse[cipher as usize] = plain as u8;
        }
        Ok(Self { forward, inverse })
    }
}

impl Cipher for SubstitutionCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(map_letters(text, |i| self.forward[i as usize]))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(map_letters(text, |i| self.inverse[i as usize]))
    }
}
