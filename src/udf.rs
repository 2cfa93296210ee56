// src/udf.rs
//! Nullable call boundary — the surface a query engine sees.
//!
//! Both operators follow warehouse NULL semantics: an absent operand
//! yields an absent result before any cipher work, and every failure the
//! core can report (bad key length, malformed ciphertext, bad padding)
//! also collapses to absent. Callers that need to distinguish failure
//! kinds (the CLI does, for exit codes) call into [`crate::crypto`]
//! directly.

use tracing::debug;

use crate::crypto;

/// `aes_encrypt(input, key)` with NULL-in → NULL-out semantics.
pub fn aes_encrypt(input: Option<&[u8]>, key: Option<&[u8]>) -> Option<Vec<u8>> {
    let (input, key) = (input?, key?);
    match crypto::encrypt_to_vec(input, key) {
        Ok(ciphertext) => Some(ciphertext),
        Err(err) => {
            debug!(error = %err, "aes_encrypt returning NULL");
            None
        }
    }
}

/// `aes_decrypt(input, key)` with NULL-in → NULL-out semantics.
pub fn aes_decrypt(input: Option<&[u8]>, key: Option<&[u8]>) -> Option<Vec<u8>> {
    let (input, key) = (input?, key?);
    match crypto::decrypt_to_vec(input, key) {
        Ok(plaintext) => Some(plaintext),
        Err(err) => {
            debug!(error = %err, "aes_decrypt returning NULL");
            None
        }
    }
}
