//! Single-block encryption/decryption and the `Aes` entry point.

use crate::block::Block;
use crate::error::Result;
use crate::key::{KeyLength, RoundKeys};
use crate::mode::{self, Chain, Mode};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, State,
};
use crate::schedule::expand_key;

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let nr = round_keys.key_length().nr();
    let mut state = State::load(block);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(nr));

    state.store()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let nr = round_keys.key_length().nr();
    let mut state = State::load(block);

    add_round_key(&mut state, round_keys.get(nr));
    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state.store()
}

/// AES cipher bound to one key size.
///
/// The instance holds no key material. Every call takes the raw key,
/// expands a fresh schedule, and wipes it before returning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes {
    length: KeyLength,
}

impl Aes {
    /// Creates a cipher for the given key size.
    pub const fn new(length: KeyLength) -> Self {
        Self { length }
    }

    /// Creates a cipher from a key size in bits (128, 192 or 256).
    pub fn from_bits(bits: usize) -> Result<Self> {
        KeyLength::try_from(bits).map(Self::new)
    }

    /// Configured key size.
    pub fn key_length(&self) -> KeyLength {
        self.length
    }

    /// Expands `key`, which must be exactly `4 * Nk` bytes long.
    pub fn expand(&self, key: &[u8]) -> Result<RoundKeys> {
        expand_key(self.length, key)
    }

    /// Encrypts one block under `key`.
    pub fn encrypt_block(&self, block: &Block, key: &[u8]) -> Result<Block> {
        let round_keys = self.expand(key)?;
        Ok(encrypt_block(block, &round_keys))
    }

    /// Decrypts one block under `key`.
    pub fn decrypt_block(&self, block: &Block, key: &[u8]) -> Result<Block> {
        let round_keys = self.expand(key)?;
        Ok(decrypt_block(block, &round_keys))
    }

    /// Encrypts a block-aligned buffer in the given mode.
    ///
    /// CBC and CFB require `iv`; ECB ignores it. Validation happens before
    /// the key is expanded, so a rejected call does no cipher work.
    pub fn encrypt(
        &self,
        mode: Mode,
        input: &[u8],
        key: &[u8],
        iv: Option<&Block>,
    ) -> Result<Vec<u8>> {
        let chain = mode::bind(mode, input, iv)?;
        let round_keys = self.expand(key)?;
        match chain {
            Chain::Ecb => mode::ecb_encrypt(&round_keys, input),
            Chain::Cbc(iv) => mode::cbc_encrypt(&round_keys, iv, input),
            Chain::Cfb(iv) => mode::cfb_encrypt(&round_keys, iv, input),
        }
    }

    /// Decrypts a block-aligned buffer in the given mode.
    pub fn decrypt(
        &self,
        mode: Mode,
        input: &[u8],
        key: &[u8],
        iv: Option<&Block>,
    ) -> Result<Vec<u8>> {
        let chain = mode::bind(mode, input, iv)?;
        let round_keys = self.expand(key)?;
        match chain {
            Chain::Ecb => mode::ecb_decrypt(&round_keys, input),
            Chain::Cbc(iv) => mode::cbc_decrypt(&round_keys, iv, input),
            Chain::Cfb(iv) => mode::cfb_decrypt(&round_keys, iv, input),
        }
    }
}
