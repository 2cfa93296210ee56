// src/crypto/context.rs
//! Per-call cipher contexts.
//!
//! The rest of the engine depends only on [`BlockCipherCtx`]; the factory
//! picks the concrete AES strength from the validated key. A context lives
//! for exactly one call — the expanded key schedule inside it is dropped on
//! every exit path.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::algo::CipherStrength;
use crate::consts::BLOCK_SIZE;
use crate::error::{CoreError, Result};

/// One ECB pass over a block-aligned buffer, in place.
///
/// Callers guarantee `buf.len() % BLOCK_SIZE == 0`; anything left over
/// from a non-aligned slice would be silently skipped by `chunks_exact`,
/// so alignment is checked before a context is ever asked to run.
pub(crate) trait BlockCipherCtx {
    fn encrypt_blocks(&self, buf: &mut [u8]);
    fn decrypt_blocks(&self, buf: &mut [u8]);
}

struct AesCtx<C>(C);

impl<C: BlockEncrypt + BlockDecrypt> BlockCipherCtx for AesCtx<C> {
    fn encrypt_blocks(&self, buf: &mut [u8]) {
        for block in buf.chunks_exact_mut(BLOCK_SIZE) {
            self.0.encrypt_block(GenericArray::from_mut_slice(block));
        }
    }

    fn decrypt_blocks(&self, buf: &mut [u8]) {
        for block in buf.chunks_exact_mut(BLOCK_SIZE) {
            self.0.decrypt_block(GenericArray::from_mut_slice(block));
        }
    }
}

/// Build the cipher context for `key`, validating its length on the way.
pub(crate) fn for_key(key: &[u8]) -> Result<Box<dyn BlockCipherCtx>> {
    let invalid = |_| CoreError::InvalidKeyLength(key.len());
    match CipherStrength::for_key_len(key.len())? {
        CipherStrength::Aes128 => Ok(Box::new(AesCtx(
            Aes128::new_from_slice(key).map_err(invalid)?,
        ))),
        CipherStrength::Aes192 => Ok(Box::new(AesCtx(
            Aes192::new_from_slice(key).map_err(invalid)?,
        ))),
        CipherStrength::Aes256 => Ok(Box::new(AesCtx(
            Aes256::new_from_slice(key).map_err(invalid)?,
        ))),
    }
}
