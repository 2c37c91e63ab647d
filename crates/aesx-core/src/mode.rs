//! ECB, CBC and CFB chaining over the block engine.
//!
//! Every function expects a whole number of blocks and produces output of the
//! same length. Nothing here pads.

use core::fmt;
use core::str::FromStr;

use crate::block::{blocks, check_length, xor_blocks, Block};
use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::{Error, Result};
use crate::key::RoundKeys;

/// Block-chaining mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic codebook: blocks are independent.
    Ecb,
    /// Cipher block chaining.
    Cbc,
    /// Full-block cipher feedback (CFB-128).
    Cfb,
}

impl Mode {
    /// Whether the mode needs an initialization vector.
    pub const fn requires_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Cfb => "CFB",
        })
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown mode {0:?} (expected ecb, cbc or cfb)")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            "cfb" => Ok(Mode::Cfb),
            _ => Err(UnknownMode(s.to_owned())),
        }
    }
}

/// A mode paired with the IV it needs.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Chain<'a> {
    Ecb,
    Cbc(&'a Block),
    Cfb(&'a Block),
}

/// Checks the input length and IV presence for `mode`.
pub(crate) fn bind<'a>(mode: Mode, input: &[u8], iv: Option<&'a Block>) -> Result<Chain<'a>> {
    check_length(input.len())?;
    match (mode, iv) {
        (Mode::Ecb, _) => Ok(Chain::Ecb),
        (Mode::Cbc, Some(iv)) => Ok(Chain::Cbc(iv)),
        (Mode::Cfb, Some(iv)) => Ok(Chain::Cfb(iv)),
        (mode, None) => Err(Error::MissingIv { mode }),
    }
}

/// ECB encryption.
pub fn ecb_encrypt(round_keys: &RoundKeys, input: &[u8]) -> Result<Vec<u8>> {
    check_length(input.len())?;
    let mut out = Vec::with_capacity(input.len());
    for block in blocks(input) {
        out.extend_from_slice(&encrypt_block(block, round_keys));
    }
    Ok(out)
}

/// ECB decryption.
pub fn ecb_decrypt(round_keys: &RoundKeys, input: &[u8]) -> Result<Vec<u8>> {
    check_length(input.len())?;
    let mut out = Vec::with_capacity(input.len());
    for block in blocks(input) {
        out.extend_from_slice(&decrypt_block(block, round_keys));
    }
    Ok(out)
}

/// CBC encryption: `c[i] = E(p[i] ^ c[i-1])`, with `c[-1] = iv`.
pub fn cbc_encrypt(round_keys: &RoundKeys, iv: &Block, input: &[u8]) -> Result<Vec<u8>> {
    check_length(input.len())?;
    let mut out = Vec::with_capacity(input.len());
    let mut chain = *iv;
    for block in blocks(input) {
        chain = encrypt_block(&xor_blocks(block, &chain), round_keys);
        out.extend_from_slice(&chain);
    }
    Ok(out)
}

/// CBC decryption: `p[i] = D(c[i]) ^ c[i-1]`.
pub fn cbc_decrypt(round_keys: &RoundKeys, iv: &Block, input: &[u8]) -> Result<Vec<u8>> {
    check_length(input.len())?;
    let mut out = Vec::with_capacity(input.len());
    let mut chain = iv;
    for block in blocks(input) {
        out.extend_from_slice(&xor_blocks(&decrypt_block(block, round_keys), chain));
        chain = block;
    }
    Ok(out)
}

/// CFB encryption: `c[i] = p[i] ^ E(c[i-1])`.
pub fn cfb_encrypt(round_keys: &RoundKeys, iv: &Block, input: &[u8]) -> Result<Vec<u8>> {
    check_length(input.len())?;
    let mut out = Vec::with_capacity(input.len());
    let mut chain = *iv;
    for block in blocks(input) {
        chain = xor_blocks(block, &encrypt_block(&chain, round_keys));
        out.extend_from_slice(&chain);
    }
    Ok(out)
}

/// CFB decryption: `p[i] = c[i] ^ E(c[i-1])`.
///
/// The keystream comes from the forward cipher in both directions.
pub fn cfb_decrypt(round_keys: &RoundKeys, iv: &Block, input: &[u8]) -> Result<Vec<u8>> {
    check_length(input.len())?;
    let mut out = Vec::with_capacity(input.len());
    let mut chain = iv;
    for block in blocks(input) {
        out.extend_from_slice(&xor_blocks(block, &encrypt_block(chain, round_keys)));
        chain = block;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyLength;
    use crate::schedule::expand_key;

    fn round_keys() -> RoundKeys {
        expand_key(KeyLength::Aes128, &[0x42u8; 16]).expect("expand")
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("ECB".parse::<Mode>(), Ok(Mode::Ecb));
        assert_eq!("cbc".parse::<Mode>(), Ok(Mode::Cbc));
        assert_eq!("Cfb".parse::<Mode>(), Ok(Mode::Cfb));
        assert!("ctr".parse::<Mode>().is_err());
        assert_eq!(Mode::Cfb.to_string(), "CFB");
    }

    #[test]
    fn only_ecb_skips_iv() {
        assert!(!Mode::Ecb.requires_iv());
        assert!(Mode::Cbc.requires_iv());
        assert!(Mode::Cfb.requires_iv());
    }

    #[test]
    fn bind_checks_length_before_iv() {
        assert!(matches!(
            bind(Mode::Cbc, &[0u8; 15], None),
            Err(Error::Length { len: 15 })
        ));
        assert!(matches!(
            bind(Mode::Cfb, &[0u8; 32], None),
            Err(Error::MissingIv { mode: Mode::Cfb })
        ));
        assert!(matches!(bind(Mode::Ecb, &[0u8; 32], None), Ok(Chain::Ecb)));
    }

    #[test]
    fn modes_reject_partial_blocks() {
        let rks = round_keys();
        let iv = [0u8; 16];
        let input = [0u8; 20];
        assert_eq!(ecb_encrypt(&rks, &input), Err(Error::Length { len: 20 }));
        assert_eq!(cbc_decrypt(&rks, &iv, &input), Err(Error::Length { len: 20 }));
        assert_eq!(cfb_encrypt(&rks, &iv, &input), Err(Error::Length { len: 20 }));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let rks = round_keys();
        let iv = [7u8; 16];
        assert_eq!(ecb_encrypt(&rks, &[]), Ok(Vec::new()));
        assert_eq!(cbc_encrypt(&rks, &iv, &[]), Ok(Vec::new()));
        assert_eq!(cfb_decrypt(&rks, &iv, &[]), Ok(Vec::new()));
    }

    #[test]
    fn single_block_cbc_is_ecb_of_xor() {
        let rks = round_keys();
        let iv = [0x11u8; 16];
        let pt = [0x22u8; 16];
        let ct = cbc_encrypt(&rks, &iv, &pt).expect("cbc");
        assert_eq!(ct, encrypt_block(&xor_blocks(&pt, &iv), &rks));
    }

    #[test]
    fn cfb_decrypt_uses_forward_cipher() {
        let rks = round_keys();
        let iv = [0x33u8; 16];
        let ct = [0x44u8; 16];
        let pt = cfb_decrypt(&rks, &iv, &ct).expect("cfb");
        assert_eq!(pt, xor_blocks(&ct, &encrypt_block(&iv, &rks)));
        assert_ne!(pt, xor_blocks(&ct, &decrypt_block(&iv, &rks)));
    }

    #[test]
    fn iv_is_not_mutated() {
        let rks = round_keys();
        let iv = [0x55u8; 16];
        let before = iv;
        let _ = cbc_encrypt(&rks, &iv, &[1u8; 48]).expect("cbc");
        let _ = cfb_encrypt(&rks, &iv, &[1u8; 48]).expect("cfb");
        assert_eq!(iv, before);
    }
}
