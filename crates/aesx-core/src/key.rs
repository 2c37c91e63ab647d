//! Cipher configuration and expanded key types.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};

/// Round keys needed by the largest configuration (AES-256, `Nr = 14`).
pub const MAX_ROUND_KEYS: usize = 15;

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyLength {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeyLength {
    /// Key size in bits.
    pub const fn bits(self) -> usize {
        match self {
            KeyLength::Aes128 => 128,
            KeyLength::Aes192 => 192,
            KeyLength::Aes256 => 256,
        }
    }

    /// Key size in bytes (`4 * Nk`).
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Number of 32-bit words in the key.
    pub const fn nk(self) -> usize {
        self.bits() / 32
    }

    /// Number of rounds.
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Number of round keys in the schedule (`Nr + 1`).
    pub const fn round_keys(self) -> usize {
        self.nr() + 1
    }

    /// Infers the configuration from the length of a raw key.
    pub fn from_key_bytes(len: usize) -> Result<Self> {
        Self::try_from(len * 8)
    }
}

impl TryFrom<usize> for KeyLength {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(KeyLength::Aes128),
            192 => Ok(KeyLength::Aes192),
            256 => Ok(KeyLength::Aes256),
            _ => Err(Error::InvalidKeyLength { bits }),
        }
    }
}

impl fmt::Display for KeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Expanded round keys.
///
/// Storage is sized for AES-256; only the first `Nr + 1` keys are populated.
/// The schedule is wiped when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUND_KEYS],
    #[zeroize(skip)]
    length: KeyLength,
}

impl RoundKeys {
    pub(crate) fn from_words(length: KeyLength, words: &[[u8; 4]]) -> Self {
        let mut keys = [[0u8; BLOCK_SIZE]; MAX_ROUND_KEYS];
        for (i, word) in words.iter().enumerate() {
            let offset = (i % 4) * 4;
            keys[i / 4][offset..offset + 4].copy_from_slice(word);
        }
        Self { keys, length }
    }

    /// Configuration this schedule was expanded for.
    pub fn key_length(&self) -> KeyLength {
        self.length
    }

    /// Number of round keys (`Nr + 1`).
    pub fn len(&self) -> usize {
        self.length.round_keys()
    }

    /// Always false; a schedule holds at least 11 round keys.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the round key at the requested index (`0..=Nr`).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.keys[round]
    }

    /// Iterates over the populated round keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.keys[..self.len()].iter()
    }

    /// Copies the schedule out as `4 * Nb * (Nr + 1)` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.iter().flatten().copied().collect()
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}
