//! Byte-level helpers for applying the aesx cipher to arbitrary input.
//!
//! - PKCS#7 padding and its validation.
//! - Division of a buffer into fixed-size blocks.
//! - Base64, hex and UTF-8 text conversion.
//! - Random key generation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod blocks;
mod encoding;
mod error;
mod keygen;
mod padding;

pub use crate::blocks::divide_into_blocks;
pub use crate::encoding::{
    base64_to_bytes, bytes_to_base64, bytes_to_hex, bytes_to_string, hex_to_bytes,
    string_to_bytes,
};
pub use crate::error::CodecError;
pub use crate::keygen::{generate_key, generate_key_with, os_seeded_rng, seeded_rng};
pub use crate::padding::{pad_to_block_size, unpad};
