//! AES block cipher (FIPS-197) with ECB, CBC and CFB modes.
//!
//! This crate provides:
//! - Key expansion for 128, 192 and 256-bit keys.
//! - Single-block encryption and decryption over a 4x4 byte state.
//! - ECB, CBC and CFB-128 chaining over block-aligned buffers.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.
//!
//! ```
//! use aesx_core::{Aes, KeyLength, Mode};
//!
//! let aes = Aes::new(KeyLength::Aes128);
//! let key = [0u8; 16];
//! let iv = [1u8; 16];
//! let ct = aes.encrypt(Mode::Cbc, &[0u8; 32], &key, Some(&iv)).unwrap();
//! let pt = aes.decrypt(Mode::Cbc, &ct, &key, Some(&iv)).unwrap();
//! assert_eq!(pt, [0u8; 32]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod mode;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{check_length, xor_blocks, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, Aes};
pub use crate::error::{Error, Result};
pub use crate::gf::{gmul, xtime};
pub use crate::key::{KeyLength, RoundKeys};
pub use crate::mode::{
    cbc_decrypt, cbc_encrypt, cfb_decrypt, cfb_encrypt, ecb_decrypt, ecb_encrypt, Mode,
    UnknownMode,
};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::schedule::expand_key;
