//! Random key generation.

use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// ChaCha20 generator seeded from the operating system.
pub fn os_seeded_rng() -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
    ChaCha20Rng::from_seed(seed_bytes)
}

/// ChaCha20 generator, reproducible when `seed` is given.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => os_seeded_rng(),
    }
}

/// Generates `length` random key bytes from an OS-seeded generator.
pub fn generate_key(length: usize) -> Vec<u8> {
    generate_key_with(&mut os_seeded_rng(), length)
}

/// Generates `length` random key bytes from a caller-supplied generator.
pub fn generate_key_with<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> Vec<u8> {
    let mut key = vec![0u8; length];
    rng.fill_bytes(&mut key);
    key
}
