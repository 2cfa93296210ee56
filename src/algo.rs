// src/algo.rs
//! Cipher selection — the single Hive-compatibility enforcement point.
//!
//! Hive accepts AES keys of exactly 16, 24 or 32 bytes and rejects every
//! other length instead of adapting it. All key validation in this crate
//! funnels through [`CipherStrength::for_key_len`].

use crate::consts::{AES128_KEY_LEN, AES192_KEY_LEN, AES256_KEY_LEN};
use crate::error::CoreError;

/// Supported AES strengths, selected by raw key length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CipherStrength {
    Aes128,
    Aes192,
    Aes256,
}

impl CipherStrength {
    /// Map a key length in bytes to a cipher strength.
    ///
    /// Lengths other than 16/24/32 yield `InvalidKeyLength` — the key is
    /// never padded, truncated or hashed to fit.
    pub fn for_key_len(key_len: usize) -> Result<Self, CoreError> {
        match key_len {
            AES128_KEY_LEN => Ok(Self::Aes128),
            AES192_KEY_LEN => Ok(Self::Aes192),
            AES256_KEY_LEN => Ok(Self::Aes256),
            other => Err(CoreError::InvalidKeyLength(other)),
        }
    }

    /// Key size in bits (128/192/256)
    pub fn key_bits(self) -> usize {
        match self {
            Self::Aes128 => 128,
            Self::Aes192 => 192,
            Self::Aes256 => 256,
        }
    }
}
