//! Case-preserving letter indexing shared by the letter ciphers
//!
//! Only ASCII letters take part in the classical transforms. Everything
//! else, including accented and non-Latin letters, is passed through.

/// Number of letters in the alphabet every cipher works over
pub const ALPHABET_LEN: u8 = 26;

/// Returns the zero-based position of `c` within its own case alphabet
///
/// `'A'` and `'a'` both map to `0`, `'Z'` and `'z'` to `25`. Non-letters
/// return `None`.
pub fn letter_index(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a'),
        _ => None,
    }
}

/// Rebuilds a letter from its index, in the case of `case_of`
///
/// The index is reduced modulo 26. A lowercase `case_of` yields a lowercase
/// letter; anything else yields uppercase.
pub fn char_from_index(index: u8, case_of: char) -> char {
    let base = if case_of.is_ascii_lowercase() { b'a' } else { b'A' };
    (base + index % ALPHABET_LEN) as char
}

/// Applies `f` to the index of every letter, keeping case and non-letters
pub fn map_letters<F>(text: &str, mut f: F) -> String
where
    F: FnMut(u8) -> u8,
{
    text.chars()
        .map(|c| match letter_index(c) {
            Some(index) => char_from_index(f(index), c),
            None => c,
        })
        .collect()
}

/// Reduces a signed offset into `0..26`
pub(crate) fn modulo(value: i64) -> u8 {
    value.rem_euclid(ALPHABET_LEN as i64) as u8
}
