use super::alphabet::{map_letters, ALPHABET_LEN};
use super::{Cipher, CipherError};

/// Atbash: reflects the alphabet, `A <-> Z`, `B <-> Y`, ...
///
/// Self-inverse, so encryption and decryption are the same operation.
pub struct AtbashCipher;

impl AtbashCipher {
    fn reflect(text: &str) -> String {
        map_letters(text, |i| ALPHABET_LEN - 1 - i)
    }
}

impl Cipher for AtbashCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(Self::reflect(text))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(Self::reflect(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect() {
        assert_eq!(AtbashCipher.encrypt("Hello").unwrap(), "Svool");
        assert_eq!(AtbashCipher.encrypt("abc XYZ 1").unwrap(), "zyx CBA 1");
    }

    #[test]
    fn test_involution() {
        let text = "Wizard of Oz, 1939.";
        let once = AtbashCipher.encrypt(text).unwrap();
        assert_eq!(AtbashCipher.decrypt(&once).unwrap(), text);
        assert_eq!(AtbashCipher.encrypt(&once).unwrap(), text);
    }
}
