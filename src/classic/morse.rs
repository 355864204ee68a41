//! International Morse code
//!
//! Encoding uppercases the text and joins one token per character with a
//! single space; a space becomes `/`. Characters without a code are emitted
//! as-is in place of a token. Decoding splits on single spaces and maps
//! tokens back, emitting unknown tokens unchanged.
//!
//! Text with unsupported characters or consecutive spaces does not survive a
//! round trip exactly.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Cipher, CipherError};

const SEPARATOR: &str = " ";

const TABLE: [(char, &str); 37] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', "/"),
];

static ENCODE: Lazy<HashMap<char, &'static str>> = Lazy::new(|| TABLE.into_iter().collect());

static DECODE: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| TABLE.into_iter().map(|(c, code)| (code, c)).collect());

pub struct MorseCodec;

impl Cipher for MorseCodec {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let tokens: Vec<String> = text
            .to_uppercase()
            .chars()
            .map(|c| match ENCODE.get(&c) {
                Some(code) => code.to_string(),
                None => c.to_string(),
            })
            .collect();
        Ok(tokens.join(SEPARATOR))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text
            .split(SEPARATOR)
            .map(|token| match DECODE.get(token) {
                Some(c) => c.to_string(),
                None => token.to_string(),
            })
            .collect())
    }
}
