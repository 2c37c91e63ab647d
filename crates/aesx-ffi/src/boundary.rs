//! Safe operations behind the exported symbols.

use aesx_codec::{pad_to_block_size, unpad, CodecError};
use aesx_core::{Aes, KeyLength, Mode, BLOCK_SIZE};
use thiserror::Error;

/// Key size used at the boundary (AES-128).
pub const KEY_BYTES: usize = 16;

const CIPHER: Aes = Aes::new(KeyLength::Aes128);

/// Everything that can go wrong behind the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundaryError {
    /// Key size or ciphertext length was rejected by the cipher.
    #[error(transparent)]
    Cipher(#[from] aesx_core::Error),

    /// Padding could not be applied or removed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Generates a random AES-128 key.
pub fn generate_key() -> Vec<u8> {
    aesx_codec::generate_key(KEY_BYTES)
}

/// Pads `plaintext` and encrypts it with AES-128/ECB.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, BoundaryError> {
    let padded = pad_to_block_size(plaintext, BLOCK_SIZE)?;
    Ok(CIPHER.encrypt(Mode::Ecb, &padded, key, None)?)
}

/// Decrypts AES-128/ECB `ciphertext` and strips its padding.
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, BoundaryError> {
    let padded = CIPHER.decrypt(Mode::Ecb, ciphertext, key, None)?;
    Ok(unpad(&padded, BLOCK_SIZE)?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_with_generated_key() {
        let key = generate_key();
        assert_eq!(key.len(), KEY_BYTES);
        let ct = encrypt(&key, b"attack at dawn").unwrap();
        assert_eq!(ct.len(), 16);
        assert_eq!(decrypt(&key, &ct).unwrap(), b"attack at dawn");
    }

    #[test]
    fn aligned_plaintext_gets_extra_block() {
        let key = [9u8; 16];
        let ct = encrypt(&key, &[0x10u8; 32]).unwrap();
        assert_eq!(ct.len(), 48);
        assert_eq!(decrypt(&key, &ct).unwrap(), vec![0x10u8; 32]);
    }

    #[test]
    fn errors_keep_their_kind() {
        let key = [0u8; 16];
        assert_eq!(
            decrypt(&key, &[0u8; 20]),
            Err(BoundaryError::Cipher(aesx_core::Error::Length { len: 20 }))
        );
        assert_eq!(
            encrypt(&key[..10], b"x"),
            Err(BoundaryError::Cipher(aesx_core::Error::KeySize {
                expected: 16,
                actual: 10
            }))
        );
        let garbage = CIPHER.encrypt(Mode::Ecb, &[0u8; 16], &key, None).unwrap();
        assert_eq!(
            decrypt(&key, &garbage),
            Err(BoundaryError::Codec(CodecError::InvalidPadding))
        );
    }
}
