// src/consts.rs
//! Shared constants — cipher geometry and accepted key sizes

/// AES block size in bytes, fixed across all key sizes
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes
pub const AES128_KEY_LEN: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_LEN: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_LEN: usize = 32;

/// The only key lengths the warehouse dialect accepts.
/// Anything else is rejected outright — never padded, truncated or hashed.
pub const VALID_KEY_LENGTHS: [usize; 3] = [AES128_KEY_LEN, AES192_KEY_LEN, AES256_KEY_LEN];
