// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid AES key length {0} (must be 16, 24 or 32 bytes)")]
    InvalidKeyLength(usize),

    #[error("malformed ciphertext: length {0} is not a positive multiple of 16")]
    MalformedCiphertext(usize),

    #[error("PKCS#7 padding validation failed")]
    BadPadding,
}

pub type Result<T> = std::result::Result<T, CoreError>;
