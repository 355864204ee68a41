//! Playfair digraph cipher
//!
//! ⚠️ Lossy: the text is reduced to uppercase letters with `J` folded into
//! `I`, doubled letters are split with a filler `X` and an odd tail is padded
//! with `X`. Decryption therefore returns the prepared text, not the
//! original formatting.

use std::collections::HashSet;

use super::{Cipher, CipherError};

const GRID_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";
const FILLER: char = 'X';
const SIDE: usize = 5;

pub struct PlayfairCipher {
    grid: [char; SIDE * SIDE],
    // (row, col) per letter A-Z; J shares I's slot
    positions: [(usize, usize); 26],
}

impl PlayfairCipher {
    /// Builds the 5x5 key square
    ///
    /// Deduplicated key letters come first, followed by the rest of the
    /// 25-letter alphabet in order. Non-letters in the key are ignored and an
    /// empty key gives the plain alphabet square.
    pub fn new(key: &str) -> Self {
        let mut seen = HashSet::new();
        let mut grid = [' '; SIDE * SIDE];
        let mut slot = 0;

        for c in normalize(key).chain(GRID_ALPHABET.chars()) {
            if seen.insert(c) {
                grid[slot] = c;
                slot += 1;
            }
        }

        let mut positions = [(0, 0); 26];
        for (i, c) in grid.iter().enumerate() {
            positions[(*c as u8 - b'A') as usize] = (i / SIDE, i % SIDE);
        }
        positions[(b'J' - b'A') as usize] = positions[(b'I' - b'A') as usize];

        Self { grid, positions }
    }

    fn position(&self, c: char) -> (usize, usize) {
        self.positions[(c as u8 - b'A') as usize]
    }

    fn at(&self, row: usize, col: usize) -> char {
        self.grid[row * SIDE + col]
    }

    fn apply(&self, text: &str, step: usize) -> String {
        let mut out = String::new();
        for (first, second) in digraphs(text) {
            let (r1, c1) = self.position(first);
            let (r2, c2) = self.position(second);
            if r1 == r2 {
                out.push(self.at(r1, (c1 + step) % SIDE));
                out.push(self.at(r2, (c2 + step) % SIDE));
            } else if c1 == c2 {
                out.push(self.at((r1 + step) % SIDE, c1));
                out.push(self.at((r2 + step) % SIDE, c2));
            } else {
                out.push(self.at(r1, c2));
                out.push(self.at(r2, c1));
            }
        }
        out
    }
}

impl Cipher for PlayfairCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.apply(text, 1))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        // moving back one on a ring of 5 is moving forward four
        Ok(self.apply(text, SIDE - 1))
    }
}

/// Uppercase ASCII letters of `s` with `J` folded into `I`
fn normalize(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            upper => upper,
        })
}

/// Splits normalized text into digraphs
///
/// Identical neighbours get a filler between them and the second letter
/// starts the next pair; an odd tail is padded with the filler.
fn digraphs(text: &str) -> Vec<(char, char)> {
    let letters: Vec<char> = normalize(text).collect();
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                pairs.push((first, second));
                i += 2;
            }
            _ => {
                pairs.push((first, FILLER));
                i += 1;
            }
        }
    }
    pairs
}
