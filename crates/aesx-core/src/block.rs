//! Block representation helpers.

use crate::error::{Error, Result};

/// Number of bytes in an AES block (`Nb * 4`).
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns `a ^ b` as a new block.
#[inline]
pub fn xor_blocks(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    xor_in_place(&mut out, b);
    out
}

/// Fails with [`Error::Length`] unless `len` is a whole number of blocks.
pub fn check_length(len: usize) -> Result<()> {
    if len % BLOCK_SIZE != 0 {
        return Err(Error::Length { len });
    }
    Ok(())
}

/// Iterates over `input` as a sequence of blocks.
///
/// Callers must have validated the length with [`check_length`]; a trailing
/// partial block is never yielded.
pub fn blocks(input: &[u8]) -> impl Iterator<Item = &Block> {
    input
        .chunks_exact(BLOCK_SIZE)
        .filter_map(|chunk| <&Block>::try_from(chunk).ok())
}
