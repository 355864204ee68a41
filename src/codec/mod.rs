//! Plain text encodings that are neither ciphers nor encryption
//!
//! Currently only base64 over UTF-8 text.

pub mod base64;
pub mod errors;

pub use crate::codec::errors::CodecError;
