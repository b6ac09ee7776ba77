// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/compact.rs
// Version: 1.0.3
//
// This file implements the compact-difficulty (nBits) expansion used to build
// the 32-byte search target, located in the core subdirectory of the
// noncescan source tree. It also provides the byte-wise hash-vs-target check
// and the conventional difficulty view of a compact value.

use log::{debug, warn};
use thiserror::Error;
use uint::construct_uint;

const LOG_TARGET: &str = "noncescan::compact";

construct_uint! {
    pub struct U256(4);
}

/// Difficulty-1 target (exponent 0x1d, mantissa 0x00ffff), big-endian bytes.
pub const MAX_TARGET: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Error raised when a compact value cannot be expanded into a 32-byte target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompactError {
    /// The exponent places the 3-byte mantissa outside the target buffer.
    /// Only exponents in 3..=32 keep all three mantissa writes in bounds.
    #[error("compact exponent {exponent} is out of range (valid: 3..=32)")]
    OutOfRange { exponent: u8 },
}

/// Expand a compact difficulty value into a caller-owned 32-byte target.
///
/// The compact form packs `[exponent:8][mantissa:24]`. The buffer is
/// zero-filled, then the 3 mantissa bytes are written in order starting at
/// byte index `32 - exponent` (index 0 is the most significant byte of the
/// 256-bit target). Exponents outside 3..=32 would place a mantissa byte
/// outside the buffer and are rejected; the buffer is left untouched on
/// error.
pub fn expand_compact_into(target: &mut [u8; 32], bits: u32) -> Result<(), CompactError> {
    let exponent = (bits >> 24) as u8;
    if !(3..=32).contains(&exponent) {
        warn!(target: LOG_TARGET, "Rejecting nbits {:08x}: exponent {} out of range", bits, exponent);
        return Err(CompactError::OutOfRange { exponent });
    }

    target.fill(0);
    let msb = 32 - exponent as usize;
    target[msb] = (bits >> 16) as u8;
    target[msb + 1] = (bits >> 8) as u8;
    target[msb + 2] = bits as u8;

    debug!(target: LOG_TARGET, "nbits={:08x} -> target={}", bits, hex::encode(&target[..]));
    Ok(())
}

/// Owned-array form of [`expand_compact_into`].
pub fn expand_compact(bits: u32) -> Result<[u8; 32], CompactError> {
    let mut target = [0u8; 32];
    expand_compact_into(&mut target, bits)?;
    Ok(target)
}

/// Check whether a 32-byte hash satisfies a target. Both are interpreted as
/// big-endian 256-bit integers; the hash satisfies when it does not exceed
/// the target.
pub fn hash_meets_target(hash: &[u8], target: &[u8; 32]) -> bool {
    if hash.len() != 32 {
        warn!(target: LOG_TARGET, "Invalid hash for target check: wrong length ({} bytes)", hash.len());
        return false;
    }
    U256::from_big_endian(hash) <= U256::from_big_endian(target)
}

/// Numeric view of an expanded target.
pub fn target_to_u256(target: &[u8; 32]) -> U256 {
    U256::from_big_endian(target)
}

/// Conventional difficulty of a compact value: `MAX_TARGET / target`,
/// truncated to whole units. Returns 0.0 for an invalid compact value and
/// infinity for an all-zero target.
pub fn bits_difficulty(bits: u32) -> f64 {
    let target = match expand_compact(bits) {
        Ok(bytes) => U256::from_big_endian(&bytes),
        Err(e) => {
            warn!(target: LOG_TARGET, "Cannot compute difficulty for nbits {:08x}: {}", bits, e);
            return 0.0;
        }
    };
    if target.is_zero() {
        return f64::INFINITY;
    }

    let max_target = U256::from_big_endian(&MAX_TARGET);
    let quotient = max_target / target;
    if quotient > U256::from(u64::MAX) {
        return u64::MAX as f64;
    }
    let whole = quotient.low_u64() as f64;
    if whole >= 1.0 {
        whole
    } else {
        // Target above the difficulty-1 maximum: fractional difficulty.
        let inverse = (target / max_target).low_u64();
        if inverse == 0 { 1.0 } else { 1.0 / inverse as f64 }
    }
}
