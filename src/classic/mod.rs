//! Classical cipher engine
//!
//! This module supports the following reversible text transforms:
//! - Caesar / ROT13: fixed alphabet shift
//! - Vigenère: running key shift that skips non-letters
//! - Atbash: alphabet reflection
//! - Rail Fence: zigzag transposition
//! - Playfair: 5x5 digraph substitution (lossy on formatting)
//! - Substitution: 26-letter permutation key
//! - Affine: `a·x + b mod 26`
//! - Morse / Binary: textual encodings
//!
//! None of these provide confidentiality; use [`crate::crypto`] for that.

pub mod affine;
pub mod alphabet;
pub mod atbash;
pub mod binary;
pub mod caesar;
pub mod errors;
pub mod morse;
pub mod playfair;
pub mod rail_fence;
pub mod substitution;
pub mod vigenere;

pub use crate::classic::errors::CipherError;

use crate::classic::affine::AffineCipher;
use crate::classic::atbash::AtbashCipher;
use crate::classic::binary::BinaryCodec;
use crate::classic::caesar::{CaesarCipher, Rot13Cipher};
use crate::classic::morse::MorseCodec;
use crate::classic::playfair::PlayfairCipher;
use crate::classic::rail_fence::RailFenceCipher;
use crate::classic::substitution::SubstitutionCipher;
use crate::classic::vigenere::VigenereCipher;
use serde::{Deserialize, Serialize};

/// Core transform trait
///
/// Every classical cipher implements this trait. Parameters are validated
/// when the cipher is constructed, so `encrypt` and `decrypt` only fail on
/// input that cannot be decoded at all (malformed binary tokens).
pub trait Cipher: Send + Sync {
    /// Applies the forward transform (encrypt / encode)
    fn encrypt(&self, text: &str) -> Result<String, CipherError>;

    /// Applies the inverse transform (decrypt / decode)
    fn decrypt(&self, text: &str) -> Result<String, CipherError>;
}

/// Cipher selection with its parameters
///
/// Serialized to lowercase so it can be written in TOML:
/// `cipher = { caesar = { shift = 3 } }` or `cipher = "atbash"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherVariant {
    /// Alphabet shift
    Caesar { shift: i64 },

    /// Running-key shift; only letters of the key are used
    Vigenere { key: String },

    /// Alphabet reflection, no key
    Atbash,

    /// Caesar with shift 13, no key
    Rot13,

    /// Zigzag transposition over `rails` rows (at least 2)
    #[serde(rename = "railfence")]
    RailFence { rails: usize },

    /// 5x5 digraph substitution keyed by a word
    Playfair { key: String },

    /// Full 26-letter substitution alphabet
    Substitution { key: String },

    /// `a·x + b mod 26`, `a` coprime with 26
    Affine { a: i64, b: i64 },

    /// International Morse code
    Morse,

    /// Space-separated 8-bit binary code points
    Binary,
}

impl CipherVariant {
    /// Lowercase tag used in logs and textual configuration
    pub fn name(&self) -> &'static str {
        match self {
            CipherVariant::Caesar { .. } => "caesar",
            CipherVariant::Vigenere { .. } => "vigenere",
            CipherVariant::Atbash => "atbash",
            CipherVariant::Rot13 => "rot13",
            CipherVariant::RailFence { .. } => "railfence",
            CipherVariant::Playfair { .. } => "playfair",
            CipherVariant::Substitution { .. } => "substitution",
            CipherVariant::Affine { .. } => "affine",
            CipherVariant::Morse => "morse",
            CipherVariant::Binary => "binary",
        }
    }
}

/// Which of the two inverse transforms to apply
///
/// For Morse and Binary, `Encrypt` encodes and `Decrypt` decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// A single transform request
#[derive(Debug, Clone)]
pub struct CipherRequest {
    pub variant: CipherVariant,
    pub direction: Direction,
    pub text: String,
}

impl CipherRequest {
    pub fn new(variant: CipherVariant, direction: Direction, text: impl Into<String>) -> Self {
        Self {
            variant,
            direction,
            text: text.into(),
        }
    }
}

/// Runs a classical transform
///
/// Dispatches on the variant, builds (and thereby validates) the matching
/// cipher, then applies it in the requested direction.
///
/// # Examples
/// ```
/// use textcrypt::classic::{transform, CipherRequest, CipherVariant, Direction};
/// let request = CipherRequest::new(CipherVariant::Caesar { shift: 3 }, Direction::Encrypt, "Hello");
/// assert_eq!(transform(&request).unwrap(), "Khoor");
/// ```
pub fn transform(request: &CipherRequest) -> Result<String, CipherError> {
    tracing::debug!(
        "{} {:?}: {} chars",
        request.variant.name(),
        request.direction,
        request.text.chars().count()
    );

    let result = match &request.variant {
        CipherVariant::Caesar { shift } => apply(&CaesarCipher::new(*shift), request),
        CipherVariant::Vigenere { key } => apply(&VigenereCipher::new(key)?, request),
        CipherVariant::Atbash => apply(&AtbashCipher, request),
        CipherVariant::Rot13 => apply(&Rot13Cipher::new(), request),
        CipherVariant::RailFence { rails } => apply(&RailFenceCipher::new(*rails)?, request),
        CipherVariant::Playfair { key } => apply(&PlayfairCipher::new(key), request),
        CipherVariant::Substitution { key } => apply(&SubstitutionCipher::new(key)?, request),
        CipherVariant::Affine { a, b } => apply(&AffineCipher::new(*a, *b)?, request),
        CipherVariant::Morse => apply(&MorseCodec, request),
        CipherVariant::Binary => apply(&BinaryCodec, request),
    };

    if let Err(e) = &result {
        tracing::debug!("{} failed: {}", request.variant.name(), e);
    }
    result
}

fn apply<C: Cipher>(cipher: &C, request: &CipherRequest) -> Result<String, CipherError> {
    match request.direction {
        Direction::Encrypt => cipher.encrypt(&request.text),
        Direction::Decrypt => cipher.decrypt(&request.text),
    }
}

/// Parses a cipher selection from a `name[:params]` string
///
/// # Format
/// - `caesar:<shift>`
/// - `vigenere:<key>`
/// - `atbash`, `rot13`, `morse`, `binary`
/// - `railfence:<rails>`
/// - `playfair:<key>`
/// - `substitution:<26 letters>`
/// - `affine:<a>,<b>`
///
/// Parameter validation beyond number parsing happens when the cipher is
/// built, so `railfence:1` parses but fails in [`transform`].
///
/// # Examples
/// ```
/// use textcrypt::classic::{parse_cipher_config, CipherVariant};
/// let variant = parse_cipher_config("affine:5,8").unwrap();
/// assert_eq!(variant, CipherVariant::Affine { a: 5, b: 8 });
/// ```
pub fn parse_cipher_config(s: &str) -> Result<CipherVariant, CipherError> {
    let (name, param) = match s.split_once(':') {
        Some((name, param)) => (name, param),
        None => (s, ""),
    };

    match name.trim().to_lowercase().as_str() {
        "caesar" => Ok(CipherVariant::Caesar {
            shift: parse_number(param)?,
        }),
        "vigenere" => Ok(CipherVariant::Vigenere {
            key: param.to_string(),
        }),
        "atbash" => Ok(CipherVariant::Atbash),
        "rot13" => Ok(CipherVariant::Rot13),
        "railfence" | "rail_fence" => Ok(CipherVariant::RailFence {
            rails: parse_number(param)?,
        }),
        "playfair" => Ok(CipherVariant::Playfair {
            key: param.to_string(),
        }),
        "substitution" => Ok(CipherVariant::Substitution {
            key: param.to_string(),
        }),
        "affine" => {
            let (a, b) = param
                .split_once(',')
                .ok_or(CipherError::MalformedNumericParameter)?;
            Ok(CipherVariant::Affine {
                a: parse_number(a)?,
                b: parse_number(b)?,
            })
        }
        "morse" => Ok(CipherVariant::Morse),
        "binary" => Ok(CipherVariant::Binary),
        other => Err(CipherError::UnknownVariant(other.to_string())),
    }
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T, CipherError> {
    s.trim()
        .parse()
        .map_err(|_| CipherError::MalformedNumericParameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cipher_config() {
        assert_eq!(
            parse_cipher_config("caesar:3").unwrap(),
            CipherVariant::Caesar { shift: 3 }
        );
        assert_eq!(
            parse_cipher_config("caesar:-4").unwrap(),
            CipherVariant::Caesar { shift: -4 }
        );
        assert_eq!(
            parse_cipher_config("Vigenere:LEMON").unwrap(),
            CipherVariant::Vigenere {
                key: "LEMON".to_string()
            }
        );
        assert_eq!(parse_cipher_config("rot13").unwrap(), CipherVariant::Rot13);
        assert_eq!(
            parse_cipher_config("railfence:3").unwrap(),
            CipherVariant::RailFence { rails: 3 }
        );
        assert_eq!(
            parse_cipher_config("affine: 5 , 8").unwrap(),
            CipherVariant::Affine { a: 5, b: 8 }
        );
    }

    #[test]
    fn test_parse_cipher_config_malformed_numbers() {
        assert_eq!(
            parse_cipher_config("caesar:three"),
            Err(CipherError::MalformedNumericParameter)
        );
        assert_eq!(
            parse_cipher_config("caesar"),
            Err(CipherError::MalformedNumericParameter)
        );
        assert_eq!(
            parse_cipher_config("affine:5"),
            Err(CipherError::MalformedNumericParameter)
        );
        assert_eq!(
            parse_cipher_config("railfence:-2"),
            Err(CipherError::MalformedNumericParameter)
        );
    }

    #[test]
    fn test_parse_cipher_config_unknown() {
        assert_eq!(
            parse_cipher_config("enigma"),
            Err(CipherError::UnknownVariant("enigma".to_string()))
        );
    }

    #[test]
    fn test_transform_dispatch() {
        let request = CipherRequest::new(CipherVariant::Rot13, Direction::Encrypt, "Hello");
        assert_eq!(transform(&request).unwrap(), "Uryyb");

        let request = CipherRequest::new(
            CipherVariant::Vigenere {
                key: "123".to_string(),
            },
            Direction::Encrypt,
            "Hello",
        );
        assert_eq!(transform(&request), Err(CipherError::EmptyKey));
    }

    #[test]
    fn test_variant_toml_shape() {
        #[derive(Deserialize)]
        struct Wrapper {
            cipher: CipherVariant,
        }

        let w: Wrapper = toml::from_str("cipher = { caesar = { shift = 3 } }").unwrap();
        assert_eq!(w.cipher, CipherVariant::Caesar { shift: 3 });

        let w: Wrapper = toml::from_str("cipher = \"atbash\"").unwrap();
        assert_eq!(w.cipher, CipherVariant::Atbash);

        let w: Wrapper = toml::from_str("cipher = { railfence = { rails = 4 } }").unwrap();
        assert_eq!(w.cipher, CipherVariant::RailFence { rails: 4 });
    }
}
