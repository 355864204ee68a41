//! Affine cipher: `E(x) = (a·x + b) mod 26`, `D(y) = a⁻¹·(y − b) mod 26`
//!
//! `a` must be coprime with 26 for the inverse `a⁻¹` to exist, which leaves
//! twelve usable multipliers: 1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25.

use super::alphabet::{map_letters, modulo, ALPHABET_LEN};
use super::{Cipher, CipherError};

pub struct AffineCipher {
    a: i64,
    b: i64,
    a_inv: i64,
}

impl AffineCipher {
    /// # Returns
    /// * `Err(CipherError::NonCoprimeParameter)` if `gcd(a, 26) != 1`
    pub fn new(a: i64, b: i64) -> Result<Self, CipherError> {
        let a = modulo(a) as i64;
        if gcd(a, ALPHABET_LEN as i64) != 1 {
            return Err(CipherError::NonCoprimeParameter);
        }
        let a_inv = mod_inverse(a).ok_or(CipherError::NonCoprimeParameter)?;
        Ok(Self {
            a,
            b: modulo(b) as i64,
            a_inv,
        })
    }
}

impl Cipher for AffineCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(map_letters(text, |x| modulo(self.a * x as i64 + self.b)))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(map_letters(text, |y| modulo(self.a_inv * (y as i64 - self.b))))
    }
}

fn gcd(mut x: i64, mut y: i64) -> i64 {
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x.abs()
}

/// Multiplicative inverse of `a` modulo 26, by search
fn mod_inverse(a: i64) -> Option<i64> {
    (1..ALPHABET_LEN as i64).find(|i| (a * i) % ALPHABET_LEN as i64 == 1)
}
