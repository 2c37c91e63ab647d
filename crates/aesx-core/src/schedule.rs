//! FIPS-197 key expansion for 128, 192 and 256-bit keys.

use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::gf::xtime;
use crate::key::{KeyLength, RoundKeys, MAX_ROUND_KEYS};
use crate::sbox::sbox;

type Word = [u8; 4];

/// Words in the largest schedule (`Nb * (Nr + 1)` for AES-256).
const MAX_WORDS: usize = 4 * MAX_ROUND_KEYS;

fn rot_word(word: Word) -> Word {
    let [a0, a1, a2, a3] = word;
    [a1, a2, a3, a0]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

/// Round constant `x^(n-1)` in the leading byte.
fn rcon(n: usize) -> Word {
    let mut c = 1u8;
    for _ in 1..n {
        c = xtime(c);
    }
    [c, 0, 0, 0]
}

fn xor_words(a: Word, b: Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expands `key` into `Nr + 1` round keys for the given configuration.
pub fn expand_key(length: KeyLength, key: &[u8]) -> Result<RoundKeys> {
    if key.len() != length.bytes() {
        return Err(Error::KeySize {
            expected: length.bytes(),
            actual: key.len(),
        });
    }

    let nk = length.nk();
    let total = 4 * length.round_keys();
    let mut w = [[0u8; 4]; MAX_WORDS];

    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = xor_words(sub_word(rot_word(temp)), rcon(i / nk));
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = xor_words(w[i - nk], temp);
    }

    let round_keys = RoundKeys::from_words(length, &w[..total]);
    w.zeroize();
    Ok(round_keys)
}
