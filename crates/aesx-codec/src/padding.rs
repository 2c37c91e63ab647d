//! PKCS#7 padding.
//!
//! Padding is always added, so input that is already aligned gains a whole
//! block of pad bytes. That keeps [`unpad`] unambiguous.

use crate::error::CodecError;

fn check_block_size(block_size: usize) -> Result<(), CodecError> {
    if block_size == 0 || block_size > usize::from(u8::MAX) {
        return Err(CodecError::BlockSize { size: block_size });
    }
    Ok(())
}

/// Pads `data` to a multiple of `block_size`.
///
/// Every pad byte holds the number of bytes added (`1..=block_size`).
pub fn pad_to_block_size(data: &[u8], block_size: usize) -> Result<Vec<u8>, CodecError> {
    check_block_size(block_size)?;
    let pad = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    // pad <= block_size <= 255
    padded.resize(data.len() + pad, pad as u8);
    Ok(padded)
}

/// Strips PKCS#7 padding added by [`pad_to_block_size`].
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8], CodecError> {
    check_block_size(block_size)?;
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(CodecError::InvalidPadding);
    }
    let pad = usize::from(data[data.len() - 1]);
    if pad == 0 || pad > block_size {
        return Err(CodecError::InvalidPadding);
    }
    let (body, tail) = data.split_at(data.len() - pad);
    if tail.iter().any(|&b| usize::from(b) != pad) {
        return Err(CodecError::InvalidPadding);
    }
    Ok(body)
}
