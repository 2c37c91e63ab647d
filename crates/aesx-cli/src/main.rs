//! Command-line interface for `aesx`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aesx_codec::{
    base64_to_bytes, bytes_to_base64, bytes_to_string, generate_key_with, pad_to_block_size,
    seeded_rng, string_to_bytes, unpad,
};
use aesx_core::{Aes, Block, KeyLength, Mode, BLOCK_SIZE};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

/// AES block cipher CLI.
#[derive(Parser)]
#[command(name = "aesx", version, author, about = "AES (FIPS-197) with ECB, CBC and CFB")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random key and print it as hex.
    Keygen {
        /// Key size in bits (128, 192 or 256).
        #[arg(long, default_value_t = 128)]
        bits: usize,
        /// Optional RNG seed for reproducible keys.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file.
    Enc {
        #[command(flatten)]
        args: CipherArgs,
        /// PKCS#7-pad the plaintext before encrypting.
        #[arg(long, default_value_t = false)]
        pad: bool,
        /// Write the ciphertext as base64 text.
        #[arg(long, default_value_t = false)]
        base64: bool,
    },
    /// Decrypt a file.
    Dec {
        #[command(flatten)]
        args: CipherArgs,
        /// Strip PKCS#7 padding after decrypting.
        #[arg(long, default_value_t = false)]
        pad: bool,
        /// Read the ciphertext as base64 text.
        #[arg(long, default_value_t = false)]
        base64: bool,
    },
    /// Run the built-in FIPS-197 known-answer tests.
    Check,
    /// Run a local demo: generate a key, encrypt text, decrypt it back.
    Demo {
        /// Text to encrypt.
        #[arg(long, default_value = "Nguyễn Hoàng Việt")]
        text: String,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args)]
struct CipherArgs {
    /// Mode of operation (ecb, cbc, cfb).
    #[arg(long, default_value_t = Mode::Ecb)]
    mode: Mode,
    /// Key as 32, 48 or 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// Initialization vector as 32 hex characters (CBC and CFB).
    #[arg(long, value_name = "HEX")]
    iv_hex: Option<String>,
    /// Input file.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output file.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { bits, seed } => cmd_keygen(bits, seed),
        Commands::Enc { args, pad, base64 } => cmd_enc(&args, pad, base64),
        Commands::Dec { args, pad, base64 } => cmd_dec(&args, pad, base64),
        Commands::Check => cmd_check(),
        Commands::Demo { text, seed } => cmd_demo(&text, seed),
    }
}

fn cmd_keygen(bits: usize, seed: Option<u64>) -> Result<()> {
    let length = KeyLength::try_from(bits)?;
    let key = generate_key_with(&mut seeded_rng(seed), length.bytes());
    println!("{}", hex::encode(key));
    Ok(())
}

fn cmd_enc(args: &CipherArgs, pad: bool, base64: bool) -> Result<()> {
    let (aes, key) = parse_key_hex(&args.key_hex)?;
    let iv = parse_iv_hex(args.iv_hex.as_deref())?;
    let mut data = read(&args.input)?;
    if pad {
        data = pad_to_block_size(&data, BLOCK_SIZE)?;
    }
    let ciphertext = aes
        .encrypt(args.mode, &data, &key, iv.as_ref())
        .with_context(|| format!("{} encrypt {}", args.mode, args.input.display()))?;
    let out = if base64 {
        bytes_to_base64(&ciphertext).into_bytes()
    } else {
        ciphertext
    };
    write(&args.output, out)
}

fn cmd_dec(args: &CipherArgs, pad: bool, base64: bool) -> Result<()> {
    let (aes, key) = parse_key_hex(&args.key_hex)?;
    let iv = parse_iv_hex(args.iv_hex.as_deref())?;
    let raw = read(&args.input)?;
    let data = if base64 {
        let text = bytes_to_string(raw).context("base64 input is not text")?;
        base64_to_bytes(text.trim())?
    } else {
        raw
    };
    let plaintext = aes
        .decrypt(args.mode, &data, &key, iv.as_ref())
        .with_context(|| format!("{} decrypt {}", args.mode, args.input.display()))?;
    let out = if pad {
        unpad(&plaintext, BLOCK_SIZE)?.to_vec()
    } else {
        plaintext
    };
    write(&args.output, out)
}

/// FIPS-197 appendix C: (key bytes, expected ciphertext) for plaintext 00112233..ff.
const KNOWN_ANSWERS: [(usize, &str); 3] = [
    (16, "69c4e0d86a7b0430d8cdb78070b4c55a"),
    (24, "dda97ca4864cdfe06eaf70a0ec0d7191"),
    (32, "8ea2b7ca516745bfeafc49904b496089"),
];

fn cmd_check() -> Result<()> {
    let plaintext: Block = hex::decode("00112233445566778899aabbccddeeff")?
        .try_into()
        .map_err(|_| anyhow::anyhow!("known-answer plaintext is not one block"))?;
    for (len, expected) in KNOWN_ANSWERS {
        let key: Vec<u8> = (0..len as u8).collect();
        let aes = Aes::new(KeyLength::from_key_bytes(len)?);
        let ct = aes.encrypt_block(&plaintext, &key)?;
        if hex::encode(ct) != expected {
            bail!("{} encrypt mismatch", aes.key_length());
        }
        if aes.decrypt_block(&ct, &key)? != plaintext {
            bail!("{} decrypt mismatch", aes.key_length());
        }
        println!("{}: ok", aes.key_length());
    }
    Ok(())
}

fn cmd_demo(text: &str, seed: Option<u64>) -> Result<()> {
    let aes = Aes::new(KeyLength::Aes128);
    let key = generate_key_with(&mut seeded_rng(seed), aes.key_length().bytes());
    println!("key: {}", hex::encode(&key));
    println!("plaintext: {text}");

    let padded = pad_to_block_size(&string_to_bytes(text), BLOCK_SIZE)?;
    let ciphertext = aes.encrypt(Mode::Ecb, &padded, &key, None)?;
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("base64: {}", bytes_to_base64(&ciphertext));

    let decoded = base64_to_bytes(&bytes_to_base64(&ciphertext))?;
    let decrypted = aes.decrypt(Mode::Ecb, &decoded, &key, None)?;
    let recovered = bytes_to_string(unpad(&decrypted, BLOCK_SIZE)?.to_vec())?;
    println!("decrypted: {recovered}");
    if recovered != text {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<(Aes, Vec<u8>)> {
    let key = hex::decode(hex_str.trim()).context("decode key hex")?;
    let length = KeyLength::from_key_bytes(key.len())
        .context("key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)")?;
    Ok((Aes::new(length), key))
}

fn parse_iv_hex(hex_str: Option<&str>) -> Result<Option<Block>> {
    let Some(hex_str) = hex_str else {
        return Ok(None);
    };
    let bytes = hex::decode(hex_str.trim()).context("decode iv hex")?;
    let iv: Block = bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("IV must be 16 bytes (32 hex characters)"))?;
    Ok(Some(iv))
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn write(path: &Path, bytes: Vec<u8>) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}
