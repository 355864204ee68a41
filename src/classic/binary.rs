use super::{Cipher, CipherError};

/// Binary text encoding
///
/// Each character becomes its code point in base 2, zero-padded to at least
/// eight digits, tokens separated by a single space. Code points above 255
/// simply produce longer tokens.
pub struct BinaryCodec;

impl Cipher for BinaryCodec {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let tokens: Vec<String> = text.chars().map(|c| format!("{:08b}", c as u32)).collect();
        Ok(tokens.join(" "))
    }

    /// # Returns
    /// * `Err(CipherError::MalformedBinaryToken)` for a token that is not
    ///   base 2 or does not name a character
    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        text.split(' ')
            .map(|token| {
                u32::from_str_radix(token, 2)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| CipherError::MalformedBinaryToken(token.to_string()))
            })
            .collect()
    }
}
