//! Text encodings: base64, hex and UTF-8.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::error::CodecError;

/// Decoder for the alphabet-only prefix extracted by [`base64_to_bytes`].
const PREFIX_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

fn is_base64(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'/'
}

/// Encodes bytes as standard base64 with `=` padding.
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard base64.
///
/// Decoding stops at the first `=` or any character outside the alphabet;
/// whatever follows is ignored. A lone trailing sextet carries no whole byte
/// and is dropped.
pub fn base64_to_bytes(text: &str) -> Result<Vec<u8>, CodecError> {
    let bytes = text.as_bytes();
    let mut end = bytes.iter().position(|&b| !is_base64(b)).unwrap_or(bytes.len());
    if end % 4 == 1 {
        end -= 1;
    }
    Ok(PREFIX_DECODER.decode(&bytes[..end])?)
}

/// Encodes bytes as lowercase hex.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hex, ignoring surrounding whitespace.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(text.trim())?)
}

/// Returns the UTF-8 bytes of `text`.
pub fn string_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Interprets `bytes` as UTF-8.
pub fn bytes_to_string(bytes: Vec<u8>) -> Result<String, CodecError> {
    Ok(String::from_utf8(bytes)?)
}
