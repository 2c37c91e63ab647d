//! AES round transformations over the 4x4 state matrix.

use crate::block::{Block, BLOCK_SIZE};
use crate::gf::mul;
use crate::sbox::{inv_sbox, sbox};

/// Columns in the state (`Nb`).
pub const NB: usize = 4;

/// MixColumns circulant matrix.
const CMDS: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// InvMixColumns circulant matrix.
const INV_CMDS: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// One block laid out as rows of the AES state, `state[row][column]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State([[u8; NB]; 4]);

impl State {
    /// Loads a block column by column: byte `i + 4j` lands at `[i][j]`.
    pub fn load(block: &Block) -> Self {
        let mut state = [[0u8; NB]; 4];
        for (i, row) in state.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = block[i + 4 * j];
            }
        }
        Self(state)
    }

    /// Writes the state back out in column-major order.
    pub fn store(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (i, row) in self.0.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                block[i + 4 * j] = *cell;
            }
        }
        block
    }

    /// Returns row `r`.
    #[cfg(test)]
    pub fn row(&self, r: usize) -> &[u8; NB] {
        &self.0[r]
    }
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` to the left by `n` positions.
fn shift_row(state: &mut State, r: usize, n: usize) {
    state.0[r].rotate_left(n % NB);
}

/// Performs ShiftRows in place: row `r` moves left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for r in 1..4 {
        shift_row(state, r, r);
    }
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        shift_row(state, r, NB - r);
    }
}

/// MixColumns over all four columns.
pub fn mix_columns(state: &mut State) {
    let mut out = [[0u8; NB]; 4];
    for (i, coefs) in CMDS.iter().enumerate() {
        for (k, &coef) in coefs.iter().enumerate() {
            for j in 0..NB {
                let term = state.0[k][j];
                out[i][j] ^= if coef == 1 { term } else { mul(coef, term) };
            }
        }
    }
    state.0 = out;
}

/// Inverse MixColumns over all four columns.
pub fn inv_mix_columns(state: &mut State) {
    let mut out = [[0u8; NB]; 4];
    for (i, coefs) in INV_CMDS.iter().enumerate() {
        for (k, &coef) in coefs.iter().enumerate() {
            for j in 0..NB {
                out[i][j] ^= mul(coef, state.0[k][j]);
            }
        }
    }
    state.0 = out;
}

/// Adds (XORs) a round key into the state.
///
/// The key is in block order, so byte `i + 4j` pairs with `state[i][j]`.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    for (i, row) in state.0.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell ^= round_key[i + 4 * j];
        }
    }
}
