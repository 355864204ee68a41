use ::base64::{engine::general_purpose::STANDARD, Engine as _};

use super::errors::CodecError;

/// Encodes the UTF-8 bytes of `text` as standard padded base64
pub fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes standard padded base64 back into UTF-8 text
///
/// Leading and trailing whitespace is ignored.
///
/// # Returns
/// * `Err(CodecError::Invalid)` if the input is not base64
/// * `Err(CodecError::NotUtf8)` if the decoded bytes are not text
pub fn decode_text(encoded: &str) -> Result<String, CodecError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|_| CodecError::Invalid)?;
    String::from_utf8(bytes).map_err(|_| CodecError::NotUtf8)
}
