//! NIST SP 800-38A known-answer tests for ECB, CBC and CFB-128.

use aesx_core::{Aes, KeyLength, Mode};

const IV: &str = "000102030405060708090a0b0c0d0e0f";
const PLAINTEXT: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);

const KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const KEY_192: &str = "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b";
const KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

struct Vector {
    key: &'static str,
    mode: Mode,
    ciphertext: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        key: KEY_128,
        mode: Mode::Ecb,
        ciphertext: concat!(
            "3ad77bb40d7a3660a89ecaf32466ef97",
            "f5d3d58503b9699de785895a96fdbaaf",
            "43b1cd7f598ece23881b00e3ed030688",
            "7b0c785e27e8ad3f8223207104725dd4",
        ),
    },
    Vector {
        key: KEY_128,
        mode: Mode::Cbc,
        ciphertext: concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7",
        ),
    },
    Vector {
        key: KEY_128,
        mode: Mode::Cfb,
        ciphertext: concat!(
            "3b3fd92eb72dad20333449f8e83cfb4a",
            "c8a64537a0b3a93fcde3cdad9f1ce58b",
            "26751f67a3cbb140b1808cf187a4f4df",
            "c04b05357c5d1c0eeac4c66f9ff7f2e6",
        ),
    },
    Vector {
        key: KEY_192,
        mode: Mode::Cbc,
        ciphertext: concat!(
            "4f021db243bc633d7178183a9fa071e8",
            "b4d9ada9ad7dedf4e5e738763f69145a",
            "571b242012fb7ae07fa9baac3df102e0",
            "08b0e27988598881d920a9e64f5615cd",
        ),
    },
    Vector {
        key: KEY_192,
        mode: Mode::Cfb,
        ciphertext: concat!(
            "cdc80d6fddf18cab34c25909c99a4174",
            "67ce7f7f81173621961a2b70171d3d7a",
            "2e1e8a1dd59b88b1c8e60fed1efac4c9",
            "c05f9f9ca9834fa042ae8fba584b09ff",
        ),
    },
    Vector {
        key: KEY_256,
        mode: Mode::Cbc,
        ciphertext: concat!(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
            "9cfc4e967edb808d679f777bc6702c7d",
            "39f23369a9d9bacfa530e26304231461",
            "b2eb05e2c39be9fcda6c19078c6a9d1b",
        ),
    },
    Vector {
        key: KEY_256,
        mode: Mode::Cfb,
        ciphertext: concat!(
            "dc7e84bfda79164b7ecd8486985d3860",
            "39ffed143b28b1c832113c6331e5407b",
            "df10132415e54b92a13ed0a8267ae2f9",
            "75a385741ab9cef82031623d55b1e471",
        ),
    },
];

fn iv() -> [u8; 16] {
    hex::decode(IV)
        .expect("iv hex")
        .try_into()
        .expect("16-byte iv")
}

#[test]
fn encrypt_matches_sp800_38a() {
    let pt = hex::decode(PLAINTEXT).expect("plaintext hex");
    for v in VECTORS {
        let key = hex::decode(v.key).expect("key hex");
        let aes = Aes::new(KeyLength::from_key_bytes(key.len()).expect("key length"));
        let ct = aes
            .encrypt(v.mode, &pt, &key, Some(&iv()))
            .expect("encrypt");
        assert_eq!(hex::encode(ct), v.ciphertext, "{} {}", aes.key_length(), v.mode);
    }
}

#[test]
fn decrypt_matches_sp800_38a() {
    for v in VECTORS {
        let key = hex::decode(v.key).expect("key hex");
        let ct = hex::decode(v.ciphertext).expect("ciphertext hex");
        let aes = Aes::new(KeyLength::from_key_bytes(key.len()).expect("key length"));
        let pt = aes
            .decrypt(v.mode, &ct, &key, Some(&iv()))
            .expect("decrypt");
        assert_eq!(hex::encode(pt), PLAINTEXT, "{} {}", aes.key_length(), v.mode);
    }
}

#[test]
fn all_zero_ecb_vector() {
    let aes = Aes::new(KeyLength::Aes128);
    let ct = aes
        .encrypt(Mode::Ecb, &[0u8; 16], &[0u8; 16], None)
        .expect("encrypt");
    assert_eq!(hex::encode(ct), "66e94bd4ef8a2c3b884cfa59ca342b2e");
}
