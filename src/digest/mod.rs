//! Message digests
//!
//! - MD5: computed by the in-crate [`md5`] implementation
//! - SHA-1 / SHA-256: delegated to the RustCrypto `sha1` / `sha2` crates
//!
//! Results are rendered as hex, lowercase unless asked otherwise.

pub mod errors;
pub mod md5;

pub use crate::digest::errors::DigestError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 3] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha256,
    ];
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Md5 => f.pad("MD5"),
            DigestAlgorithm::Sha1 => f.pad("SHA-1"),
            DigestAlgorithm::Sha256 => f.pad("SHA-256"),
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(DigestAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(DigestError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// One computed digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestOutput {
    pub algorithm: DigestAlgorithm,
    pub hex: String,
}

/// Raw digest of `bytes`
pub fn digest_bytes(bytes: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Md5 => md5::compute(bytes).to_vec(),
        DigestAlgorithm::Sha1 => Sha1::digest(bytes).to_vec(),
        DigestAlgorithm::Sha256 => Sha256::digest(bytes).to_vec(),
    }
}

/// Hex digest of the UTF-8 encoding of `text`, upper- or lowercase
pub fn digest_hex(text: &str, algorithm: DigestAlgorithm, uppercase: bool) -> String {
    let bytes = digest_bytes(text.as_bytes(), algorithm);
    if uppercase {
        hex::encode_upper(bytes)
    } else {
        hex::encode(bytes)
    }
}

/// Lowercase hex digest of the UTF-8 encoding of `text`
///
/// # Examples
/// ```
/// use textcrypt::digest::{digest, DigestAlgorithm};
/// assert_eq!(digest("abc", DigestAlgorithm::Md5), "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn digest(text: &str, algorithm: DigestAlgorithm) -> String {
    digest_hex(text, algorithm, false)
}

/// Computes several digests of `text` concurrently
///
/// Each algorithm runs on tokio's blocking pool; results come back in the
/// order the algorithms were requested. `uppercase` selects the hex case.
pub async fn digest_many(
    text: &str,
    algorithms: &[DigestAlgorithm],
    uppercase: bool,
) -> crate::Result<Vec<DigestOutput>> {
    let handles: Vec<_> = algorithms
        .iter()
        .map(|&algorithm| {
            let input = text.to_owned();
            (
                algorithm,
                tokio::task::spawn_blocking(move || digest_hex(&input, algorithm, uppercase)),
            )
        })
        .collect();

    let mut outputs = Vec::with_capacity(handles.len());
    for (algorithm, handle) in handles {
        outputs.push(DigestOutput {
            algorithm,
            hex: handle.await?,
        });
    }
    tracing::debug!("computed {} digests", outputs.len());
    Ok(outputs)
}
