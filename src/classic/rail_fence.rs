//! Rail Fence transposition
//!
//! Characters are written along a zigzag that bounces between the top and
//! bottom rail, then read off rail by rail:
//!
//! ```text
//! rails = 3, "HELLOWORLD"
//!
//! H . . . O . . . L .      -> HOL
//! . E . L . W . R . D      -> ELWRD
//! . . L . . . O . . .      -> LO
//! ```
//!
//! Rail lengths are uneven, so decryption rebuilds the same zigzag skeleton
//! first, fills it rail by rail with the ciphertext, then reads it back along
//! the zigzag.

use super::{Cipher, CipherError};

pub struct RailFenceCipher {
    rails: usize,
}

impl RailFenceCipher {
    /// # Returns
    /// * `Err(CipherError::InvalidRailCount)` if `rails < 2`
    pub fn new(rails: usize) -> Result<Self, CipherError> {
        if rails < 2 {
            return Err(CipherError::InvalidRailCount);
        }
        Ok(Self { rails })
    }

    /// Rails a text of `len` characters can actually reach
    ///
    /// The zigzag never descends past row `len - 1`, so extra rails are
    /// always empty and need no storage.
    fn rails_for(&self, len: usize) -> usize {
        self.rails.min(len.max(2))
    }

    /// Rail index of every text position along the zigzag
    fn zigzag(rails: usize, len: usize) -> Vec<usize> {
        let mut rows = Vec::with_capacity(len);
        let mut rail = 0usize;
        let mut down = true;
        for _ in 0..len {
            rows.push(rail);
            if down {
                rail += 1;
            } else {
                rail -= 1;
            }
            if rail == rails - 1 || rail == 0 {
                down = !down;
            }
        }
        rows
    }
}

impl Cipher for RailFenceCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = text.chars().collect();
        let rails = self.rails_for(chars.len());
        let rows = Self::zigzag(rails, chars.len());

        let mut fence: Vec<String> = vec![String::new(); rails];
        for (c, row) in chars.iter().zip(rows) {
            fence[row].push(*c);
        }
        Ok(fence.concat())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let rails = self.rails_for(len);
        let rows = Self::zigzag(rails, len);

        // grid[row * len + col]; a marked cell is Some(_) once filled
        let mut marked = vec![false; rails * len];
        for (col, row) in rows.iter().enumerate() {
            marked[row * len + col] = true;
        }

        let mut grid: Vec<Option<char>> = vec![None; rails * len];
        let mut next = chars.into_iter();
        for (cell, is_marked) in grid.iter_mut().zip(&marked) {
            if *is_marked {
                *cell = next.next();
            }
        }

        Ok(rows
            .iter()
            .enumerate()
            .filter_map(|(col, row)| grid[row * len + col])
            .collect())
    }
}
