//! C ABI surface for embedding aesx in another process or runtime.
//!
//! The exported functions are fixed to AES-128 in ECB mode with PKCS#7
//! padding. Failures never cross the boundary as panics or structured errors:
//! the caller gets a null pointer and a zero output length. Every non-null
//! buffer must be released exactly once with [`FreeMemory`].

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(non_snake_case)]

mod boundary;
mod buffer;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::slice;

pub use crate::boundary::{decrypt, encrypt, generate_key, BoundaryError, KEY_BYTES};
pub use crate::buffer::ExportBuffer;

/// Borrows `len` bytes at `data`, treating a zero length as empty.
///
/// # Safety
/// When `len > 0`, `data` must be non-null and valid for `len` reads.
unsafe fn input<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if data.is_null() {
        return None;
    }
    // SAFETY: guaranteed by the caller.
    Some(unsafe { slice::from_raw_parts(data, len) })
}

/// Runs `op` and hands its result across the boundary.
///
/// # Safety
/// `out_len` must be null or valid for a single `usize` write.
unsafe fn export<F>(out_len: *mut usize, op: F) -> *mut u8
where
    F: FnOnce() -> Option<Vec<u8>>,
{
    if out_len.is_null() {
        return ptr::null_mut();
    }
    let result = catch_unwind(AssertUnwindSafe(op)).ok().flatten();
    let (ptr, len) = match result {
        Some(bytes) => {
            let len = bytes.len();
            (ExportBuffer::from(bytes).into_raw(), len)
        }
        None => (ptr::null_mut(), 0),
    };
    // SAFETY: non-null and valid for writes per the caller contract.
    unsafe { out_len.write(len) };
    ptr
}

/// Generates a random 16-byte AES-128 key.
///
/// # Safety
/// `key_len` must be null or point to writable memory for one `usize`.
#[no_mangle]
pub unsafe extern "C" fn GenerateKey(key_len: *mut usize) -> *mut u8 {
    // SAFETY: forwarded caller contract.
    unsafe { export(key_len, || Some(generate_key())) }
}

/// Pads and encrypts `plain_len` bytes with AES-128/ECB.
///
/// # Safety
/// `key_bytes` and `plain_bytes` must be valid for `key_len` and `plain_len`
/// reads (they may be null when the matching length is zero), and
/// `encrypted_len` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn Encrypt(
    key_bytes: *const u8,
    key_len: usize,
    plain_bytes: *const u8,
    plain_len: usize,
    encrypted_len: *mut usize,
) -> *mut u8 {
    // SAFETY: forwarded caller contract.
    unsafe {
        let key = input(key_bytes, key_len);
        let plain = input(plain_bytes, plain_len);
        export(encrypted_len, move || encrypt(key?, plain?).ok())
    }
}

/// Decrypts `encrypted_len` bytes with AES-128/ECB and strips the padding.
///
/// # Safety
/// Same contract as [`Encrypt`].
#[no_mangle]
pub unsafe extern "C" fn Decrypt(
    key_bytes: *const u8,
    key_len: usize,
    encrypted_bytes: *const u8,
    encrypted_len: usize,
    decrypted_len: *mut usize,
) -> *mut u8 {
    // SAFETY: forwarded caller contract.
    unsafe {
        let key = input(key_bytes, key_len);
        let ciphertext = input(encrypted_bytes, encrypted_len);
        export(decrypted_len, move || decrypt(key?, ciphertext?).ok())
    }
}

/// Releases a buffer returned by [`GenerateKey`], [`Encrypt`] or [`Decrypt`].
///
/// Null is ignored.
///
/// # Safety
/// `buffer` must be null or a pointer obtained from this library that has not
/// already been freed.
#[no_mangle]
pub unsafe extern "C" fn FreeMemory(buffer: *mut u8) {
    if buffer.is_null() {
        return;
    }
    // SAFETY: guaranteed by the caller.
    drop(unsafe { ExportBuffer::from_raw(buffer) });
}
