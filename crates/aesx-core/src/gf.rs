//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial.
const REDUCTION: u8 = 0x1b;

/// Largest coefficient used by MixColumns or InvMixColumns (`0x0e`).
const MAX_COEFFICIENT: usize = 0x0e;

/// Multiplies `byte` by `x`.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements.
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

const fn build_mul_table() -> [[u8; 256]; MAX_COEFFICIENT + 1] {
    let mut table = [[0u8; 256]; MAX_COEFFICIENT + 1];
    let mut coef = 0;
    while coef <= MAX_COEFFICIENT {
        let mut byte = 0;
        while byte < 256 {
            table[coef][byte] = gmul(coef as u8, byte as u8);
            byte += 1;
        }
        coef += 1;
    }
    table
}

/// `GF_MUL[c][b] == c * b` for every coefficient up to `0x0e`.
pub static GF_MUL: [[u8; 256]; MAX_COEFFICIENT + 1] = build_mul_table();

/// Table-driven product of a MixColumns coefficient and a state byte.
#[inline]
pub fn mul(coef: u8, byte: u8) -> u8 {
    GF_MUL[coef as usize][byte as usize]
}
