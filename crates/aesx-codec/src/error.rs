//! Errors raised by the codec helpers.

use thiserror::Error;

/// Failures while padding or decoding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Trailing bytes are not valid PKCS#7 padding.
    #[error("invalid padding")]
    InvalidPadding,

    /// Block size outside `1..=255`.
    #[error("unsupported block size {size}")]
    BlockSize {
        /// Rejected block size.
        size: usize,
    },

    /// Base64 input could not be decoded.
    #[error("base64 decode: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Hex input could not be decoded.
    #[error("hex decode: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Bytes are not valid UTF-8.
    #[error("utf-8 decode: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
