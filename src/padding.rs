// src/padding.rs
//! PKCS#7 padding for the 16-byte AES block.
//!
//! Padding is always applied: a block-aligned plaintext gains one whole
//! extra block of 0x10 bytes. Removal reads the final byte N, requires
//! 1 <= N <= 16 and N trailing bytes all equal to N. That check is the
//! only integrity signal this crate has on decrypt — it catches most
//! (not all) wrong-key and corrupted-ciphertext cases.

use crate::consts::BLOCK_SIZE;
use crate::error::CoreError;

/// Append PKCS#7 padding so `buf.len()` becomes a multiple of [`BLOCK_SIZE`].
pub(crate) fn pad_in_place(buf: &mut Vec<u8>) {
    let n = BLOCK_SIZE - buf.len() % BLOCK_SIZE;
    buf.resize(buf.len() + n, n as u8);
}

/// Strip and validate PKCS#7 padding, truncating `buf` to the payload.
pub(crate) fn unpad_in_place(buf: &mut Vec<u8>) -> Result<(), CoreError> {
    let n = *buf.last().ok_or(CoreError::BadPadding)? as usize;
    if n == 0 || n > BLOCK_SIZE || n > buf.len() {
        return Err(CoreError::BadPadding);
    }
    if !buf[buf.len() - n..].iter().all(|&b| b as usize == n) {
        return Err(CoreError::BadPadding);
    }
    buf.truncate(buf.len() - n);
    Ok(())
}
