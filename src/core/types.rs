// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.2
//
// This file defines core data structures for noncescan, located in the core
// subdirectory. It includes the command-line arguments, the search job handed
// to worker threads, the nonce result sink, and the JSON run report.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde, hex

use crate::core::compact::{CompactError, expand_compact};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Command-line arguments for noncescan
#[derive(Parser, Debug)]
#[command(
    name = "noncescan",
    version = "1.0.2",
    about = "Multi-threaded SHA-256d proof-of-work nonce search tool",
    long_about = "Noncescan scans the 32-bit nonce space of an 80-byte block header across CPU\n\
                  threads, looking for a nonce whose double SHA-256 hash does not exceed the\n\
                  target encoded by a compact difficulty (nBits) value.\n\n\
                  The compact difficulty defaults to the nBits field embedded in the header\n\
                  (bytes 72..76, little-endian) and can be overridden with --bits.\n\n\
                  Examples:\n\
                    Scan with header nBits: noncescan --header <160 hex chars>\n\
                    Easy target, 4 threads: noncescan --header <hex> --bits 207fffff --threads 4\n\
                    Bounded run with report: noncescan --header <hex> --max-duration 60 --report run.json"
)]
pub struct Args {
    /// 80-byte block header, hex encoded (160 characters). The nonce field
    /// at bytes 76..80 is overwritten during the search.
    #[arg(
        long = "header",
        value_name = "HEX",
        help = "80-byte block header, hex encoded (nonce bytes 76..80 are overwritten)"
    )]
    pub header: String,

    /// Compact difficulty (nBits) as hex, e.g. 1d00ffff
    #[arg(
        short = 'b',
        long = "bits",
        value_name = "NBITS",
        help = "Compact difficulty as hex (e.g. 1d00ffff); defaults to header bytes 72..76"
    )]
    pub bits: Option<String>,

    /// Number of worker threads
    /// 0 = auto-detect (recommended), or specify exact count
    #[arg(
        short = 't',
        long,
        default_value = "0",
        value_name = "COUNT",
        help = "Number of worker threads (0 = auto-detect)"
    )]
    pub threads: usize,

    /// First nonce to try (the space is scanned with wraparound from here)
    #[arg(
        long,
        default_value = "0",
        value_name = "NONCE",
        help = "First nonce to try"
    )]
    pub start_nonce: u32,

    /// Start from a random nonce instead of --start-nonce
    #[arg(
        long,
        default_value = "false",
        help = "Start from a random nonce instead of --start-nonce"
    )]
    pub random_start: bool,

    /// Give up after this many seconds (0 = scan the full nonce space)
    #[arg(
        long,
        default_value = "0",
        value_name = "SECONDS",
        help = "Give up after this many seconds (0 = scan the full nonce space)"
    )]
    pub max_duration: u64,

    /// Write a JSON run report to this file after the search
    #[arg(
        long,
        value_name = "PATH",
        help = "Write a JSON run report to this file"
    )]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long, default_value = "false", help = "Enable debug logging")]
    pub verbose: bool,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.header.len() != 160 {
            return Err(format!(
                "Header must be 160 hex characters (80 bytes), got {}",
                self.header.len()
            ));
        }
        if hex::decode(&self.header).is_err() {
            return Err("Header is not valid hex".to_string());
        }

        if let Some(ref bits) = self.bits {
            parse_bits(bits)?;
        }

        if self.threads > 1024 {
            return Err("Thread count cannot exceed 1024".to_string());
        }

        if self.max_duration > 86400 {
            return Err("Max duration cannot exceed 24 hours (86400 seconds)".to_string());
        }

        Ok(())
    }

    /// Decode the header into its fixed 80-byte form
    pub fn header_bytes(&self) -> Result<[u8; 80], String> {
        let decoded = hex::decode(&self.header).map_err(|e| format!("Invalid header hex: {}", e))?;
        let mut header = [0u8; 80];
        if decoded.len() != 80 {
            return Err(format!("Header must be 80 bytes, got {}", decoded.len()));
        }
        header.copy_from_slice(&decoded);
        Ok(header)
    }

    /// Compact difficulty for the search: --bits when given, otherwise the
    /// nBits field embedded in the header (bytes 72..76, little-endian)
    pub fn compact_bits(&self) -> Result<u32, String> {
        match self.bits {
            Some(ref bits) => parse_bits(bits),
            None => {
                let header = self.header_bytes()?;
                Ok(u32::from_le_bytes([header[72], header[73], header[74], header[75]]))
            }
        }
    }
}

fn parse_bits(bits: &str) -> Result<u32, String> {
    let trimmed = bits.trim_start_matches("0x");
    u32::from_str_radix(trimmed, 16)
        .map_err(|e| format!("Invalid compact difficulty '{}': {}", bits, e))
}

/// A fully-resolved unit of search work: header base, compact difficulty,
/// and the target expanded from it.
#[derive(Debug, Clone)]
pub struct SearchJob {
    /// Header base (80 bytes); nonce bytes are overwritten per attempt
    pub header: [u8; 80],

    /// Compact difficulty the target was expanded from
    pub bits: u32,

    /// Expanded 32-byte big-endian target
    pub target: [u8; 32],
}

impl SearchJob {
    /// Build a job by expanding the compact difficulty. Fails fast on a
    /// compact value whose exponent is out of range.
    pub fn from_bits(header: [u8; 80], bits: u32) -> Result<Self, CompactError> {
        let target = expand_compact(bits)?;
        Ok(Self { header, bits, target })
    }
}

/// Result sink for the search: found-flag and winning nonce, written at most
/// once by the collector when a satisfying nonce is discovered.
#[derive(Debug, Clone)]
pub struct NonceResult {
    /// Whether a satisfying nonce was found
    pub found: bool,

    /// The satisfying nonce (0 until found)
    pub nonce: u32,

    /// Hash produced by the satisfying nonce
    pub hash: Option<[u8; 32]>,
}

impl NonceResult {
    /// Initialized-empty sink: not found, nonce zero
    pub fn new() -> Self {
        Self {
            found: false,
            nonce: 0,
            hash: None,
        }
    }
}

impl Default for NonceResult {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON run report written after a search completes
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Compact difficulty, hex
    pub bits: String,

    /// Expanded target, hex
    pub target: String,

    /// Conventional difficulty of the target
    pub difficulty: f64,

    /// Whether a satisfying nonce was found
    pub found: bool,

    /// The satisfying nonce, when found
    pub nonce: Option<u32>,

    /// Hash of the satisfying nonce, hex, when found
    pub hash: Option<String>,

    /// Total hashes computed across all threads
    pub total_hashes: u64,

    /// Wall-clock run time in nanoseconds
    pub elapsed_nanos: u64,

    /// Average hashrate (H/s)
    pub hashrate: f64,

    /// Worker threads used
    pub threads: usize,
}
