// src/crypto/decrypt.rs
use crate::consts::BLOCK_SIZE;
use crate::crypto::context;
use crate::error::{CoreError, Result};
use crate::padding;

/// Decrypt AES-ECB/PKCS#7 ciphertext → plaintext (in-memory)
///
/// A well-formed ciphertext is a positive multiple of 16 bytes; anything
/// else is rejected before any cipher work. Padding validation after the
/// block pass catches most wrong-key and corrupted-ciphertext cases.
pub fn decrypt_to_vec(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let ctx = context::for_key(key)?;

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CoreError::MalformedCiphertext(ciphertext.len()));
    }

    let mut buf = ciphertext.to_vec();
    ctx.decrypt_blocks(&mut buf);
    padding::unpad_in_place(&mut buf)?;
    Ok(buf)
}
