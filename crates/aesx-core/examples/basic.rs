//! Encrypts two blocks with each mode and checks they decrypt back.

use aesx_core::{Aes, KeyLength, Mode};

fn main() {
    let aes = Aes::new(KeyLength::Aes128);
    let key = [0u8; 16];
    let iv = *b"initial vector!!";

    let mut plaintext = [0u8; 32];
    plaintext[..16].copy_from_slice(b"first block here");
    plaintext[16..].copy_from_slice(b"second blockhere");

    for mode in [Mode::Ecb, Mode::Cbc, Mode::Cfb] {
        let ct = aes
            .encrypt(mode, &plaintext, &key, Some(&iv))
            .expect("aligned input");
        let pt = aes.decrypt(mode, &ct, &key, Some(&iv)).expect("aligned input");
        assert_eq!(pt, plaintext);
        println!("{mode}: {}", hex::encode(&ct));
    }

    println!("example succeeded; every mode round-trips");
}
