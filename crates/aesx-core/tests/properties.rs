//! Property-based tests for the mode layer.

use aesx_core::{Aes, Error, KeyLength, Mode};
use proptest::prelude::*;

const MODES: [Mode; 3] = [Mode::Ecb, Mode::Cbc, Mode::Cfb];

/// Data that is a whole number of 16-byte blocks.
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    (1usize..=8).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * 16))
}

fn key_length() -> impl Strategy<Value = KeyLength> {
    prop_oneof![
        Just(KeyLength::Aes128),
        Just(KeyLength::Aes192),
        Just(KeyLength::Aes256),
    ]
}

fn key_for(length: KeyLength) -> impl Strategy<Value = (KeyLength, Vec<u8>)> {
    prop::collection::vec(any::<u8>(), length.bytes()).prop_map(move |key| (length, key))
}

proptest! {
    #[test]
    fn every_mode_round_trips(
        (length, key) in key_length().prop_flat_map(key_for),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data(),
    ) {
        let aes = Aes::new(length);
        for mode in MODES {
            let ct = aes.encrypt(mode, &data, &key, Some(&iv)).unwrap();
            prop_assert_eq!(ct.len(), data.len());
            let pt = aes.decrypt(mode, &ct, &key, Some(&iv)).unwrap();
            prop_assert_eq!(&pt, &data);
        }
    }

    #[test]
    fn misaligned_input_is_rejected(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..100usize)
            .prop_filter("not block aligned", |d| d.len() % 16 != 0),
    ) {
        let aes = Aes::new(KeyLength::Aes128);
        for mode in MODES {
            prop_assert_eq!(
                aes.encrypt(mode, &data, &key, Some(&iv)),
                Err(Error::Length { len: data.len() })
            );
            prop_assert_eq!(
                aes.decrypt(mode, &data, &key, Some(&iv)),
                Err(Error::Length { len: data.len() })
            );
        }
    }

    #[test]
    fn ecb_blocks_are_independent(
        key in any::<[u8; 16]>(),
        data in block_aligned_data(),
        index in any::<prop::sample::Index>(),
    ) {
        let aes = Aes::new(KeyLength::Aes128);
        let ct = aes.encrypt(Mode::Ecb, &data, &key, None).unwrap();

        let byte = index.index(data.len());
        let mut altered = data.clone();
        altered[byte] ^= 0x01;
        let ct2 = aes.encrypt(Mode::Ecb, &altered, &key, None).unwrap();

        let changed = byte / 16;
        for (i, (a, b)) in ct.chunks(16).zip(ct2.chunks(16)).enumerate() {
            if i == changed {
                prop_assert_ne!(a, b);
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn chaining_never_touches_earlier_blocks(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data(),
        index in any::<prop::sample::Index>(),
    ) {
        let aes = Aes::new(KeyLength::Aes128);
        let byte = index.index(data.len());
        let mut altered = data.clone();
        altered[byte] ^= 0x80;
        let changed = byte / 16;

        for mode in [Mode::Cbc, Mode::Cfb] {
            let ct = aes.encrypt(mode, &data, &key, Some(&iv)).unwrap();
            let ct2 = aes.encrypt(mode, &altered, &key, Some(&iv)).unwrap();
            prop_assert_eq!(&ct[..changed * 16], &ct2[..changed * 16]);
            prop_assert_ne!(
                &ct[changed * 16..changed * 16 + 16],
                &ct2[changed * 16..changed * 16 + 16]
            );
        }
    }
}

#[test]
fn identical_ecb_blocks_encrypt_identically() {
    let aes = Aes::new(KeyLength::Aes256);
    let key = [0x0fu8; 32];
    let data = [0xabu8; 32];
    let ct = aes.encrypt(Mode::Ecb, &data, &key, None).unwrap();
    assert_eq!(ct[..16], ct[16..]);

    let iv = [0u8; 16];
    let cbc = aes.encrypt(Mode::Cbc, &data, &key, Some(&iv)).unwrap();
    assert_ne!(cbc[..16], cbc[16..]);
}

#[test]
fn chaining_modes_require_iv() {
    let aes = Aes::new(KeyLength::Aes128);
    let key = [0u8; 16];
    for mode in [Mode::Cbc, Mode::Cfb] {
        assert_eq!(
            aes.encrypt(mode, &[0u8; 16], &key, None),
            Err(Error::MissingIv { mode })
        );
        assert_eq!(
            aes.decrypt(mode, &[0u8; 16], &key, None),
            Err(Error::MissingIv { mode })
        );
    }
    assert!(aes.encrypt(Mode::Ecb, &[0u8; 16], &key, None).is_ok());
}

#[test]
fn iv_change_only_affects_first_cbc_plaintext_block() {
    let aes = Aes::new(KeyLength::Aes128);
    let key = [0x24u8; 16];
    let iv = [0u8; 16];
    let ct = aes.encrypt(Mode::Cbc, &[0x5au8; 48], &key, Some(&iv)).unwrap();

    let mut flipped = iv;
    flipped[0] ^= 1;
    let pt = aes.decrypt(Mode::Cbc, &ct, &key, Some(&flipped)).unwrap();
    assert_eq!(pt[0], 0x5a ^ 1);
    assert_eq!(pt[1..], [0x5au8; 47]);
}

#[test]
fn rejected_calls_do_not_depend_on_key_validity() {
    let aes = Aes::new(KeyLength::Aes128);
    assert_eq!(
        aes.encrypt(Mode::Ecb, &[0u8; 17], &[0u8; 3], None),
        Err(Error::Length { len: 17 })
    );
    assert_eq!(
        aes.encrypt(Mode::Ecb, &[0u8; 16], &[0u8; 3], None),
        Err(Error::KeySize {
            expected: 16,
            actual: 3
        })
    );
}
