//! Error type shared by the cipher engine and the mode layer.

use thiserror::Error;

use crate::mode::Mode;

/// Result alias for cipher operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures detected before any cipher work begins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested key size is not one of 128, 192 or 256 bits.
    #[error("invalid AES key length: {bits} bits (expected 128, 192 or 256)")]
    InvalidKeyLength {
        /// Rejected key size in bits.
        bits: usize,
    },

    /// The raw key does not match the configured key length.
    #[error("key must be {expected} bytes, got {actual}")]
    KeySize {
        /// Bytes required by the cipher configuration.
        expected: usize,
        /// Bytes supplied by the caller.
        actual: usize,
    },

    /// Input is not a whole number of blocks.
    #[error("input length {len} is not a multiple of 16 bytes")]
    Length {
        /// Length of the rejected input.
        len: usize,
    },

    /// A chaining mode was invoked without an initialization vector.
    #[error("{mode} mode requires an initialization vector")]
    MissingIv {
        /// Mode that needed the IV.
        mode: Mode,
    },
}
