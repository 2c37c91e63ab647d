//! Owned byte buffers handed across the C boundary.
//!
//! The allocation starts with a native-endian `usize` header holding the
//! payload length, so a buffer can be rebuilt from its payload pointer alone.

use core::mem::size_of;
use core::ptr;

const HEADER: usize = size_of::<usize>();

/// Byte buffer whose ownership can be transferred to a foreign caller.
#[derive(Debug, PartialEq, Eq)]
pub struct ExportBuffer {
    data: Box<[u8]>,
}

impl ExportBuffer {
    /// Payload bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[HEADER..]
    }

    /// Payload length.
    pub fn len(&self) -> usize {
        self.data.len() - HEADER
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Leaks the buffer and returns a pointer to its payload.
    ///
    /// The pointer is never null. Reclaim it with [`ExportBuffer::from_raw`].
    pub fn into_raw(self) -> *mut u8 {
        let base = Box::into_raw(self.data).cast::<u8>();
        // SAFETY: the allocation is at least HEADER bytes long.
        unsafe { base.add(HEADER) }
    }

    /// Takes back ownership of a pointer produced by [`ExportBuffer::into_raw`].
    ///
    /// # Safety
    /// `payload` must come from `into_raw` and must not be reclaimed twice.
    pub unsafe fn from_raw(payload: *mut u8) -> Self {
        // SAFETY: `payload` sits HEADER bytes into a live allocation.
        let base = unsafe { payload.sub(HEADER) };
        let mut header = [0u8; HEADER];
        // SAFETY: the header bytes are initialized and do not overlap `header`.
        unsafe { ptr::copy_nonoverlapping(base, header.as_mut_ptr(), HEADER) };
        let len = usize::from_ne_bytes(header);
        // SAFETY: rebuilds the exact boxed slice leaked by `into_raw`.
        let data = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(base, HEADER + len)) };
        Self { data }
    }
}

impl From<Vec<u8>> for ExportBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        let mut data = Vec::with_capacity(HEADER + bytes.len());
        data.extend_from_slice(&bytes.len().to_ne_bytes());
        data.extend_from_slice(&bytes);
        Self {
            data: data.into_boxed_slice(),
        }
    }
}
