// src/crypto/encrypt.rs
use crate::consts::BLOCK_SIZE;
use crate::crypto::context;
use crate::error::Result;
use crate::padding;

/// Encrypt plaintext → AES-ECB/PKCS#7 ciphertext (in-memory)
///
/// The output length is always a positive multiple of 16: padding adds
/// between 1 and 16 bytes, so even an empty plaintext encrypts to one
/// full block. The buffer is sized to the `plaintext.len() + 16` upper
/// bound up front and never reallocates.
pub fn encrypt_to_vec(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let ctx = context::for_key(key)?;

    let mut buf = Vec::with_capacity(plaintext.len() + BLOCK_SIZE);
    buf.extend_from_slice(plaintext);
    padding::pad_in_place(&mut buf);
    ctx.encrypt_blocks(&mut buf);
    Ok(buf)
}
