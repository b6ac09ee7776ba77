// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/sha256.rs
// Version: 1.0.1
//
// This file implements the SHA256d (double SHA-256) algorithm over an 80-byte
// block header, with batched nonce iteration for the search threads.

use sha2::{Digest, Sha256};
use std::array;

/// Byte offset of the 4-byte little-endian nonce inside the 80-byte header.
pub const NONCE_OFFSET: usize = 76;

pub fn sha256d_hash(header: &[u8; 80]) -> [u8; 32] {
    let first = Sha256::digest(header);
    Sha256::digest(first).into()
}

/// Hash 4 consecutive nonces against the same header base. Each nonce is
/// written little-endian into bytes 76..80 before hashing.
pub fn sha256d_hash_with_nonce_batch(
    header_base: &[u8; 80],
    start_nonce: u32,
) -> [([u8; 32], u32); 4] {
    let mut header = *header_base;
    array::from_fn(|i| {
        let nonce = start_nonce.wrapping_add(i as u32);
        header[NONCE_OFFSET..NONCE_OFFSET + 4].copy_from_slice(&nonce.to_le_bytes());
        (sha256d_hash(&header), nonce)
    })
}
