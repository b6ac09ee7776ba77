// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.1
//
// This file is the module declaration for the core functionality of
// noncescan, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod compact;
pub mod sha256;
pub mod types;

// Re-export the most commonly used items
pub use compact::{CompactError, U256, expand_compact, expand_compact_into, hash_meets_target};
pub use sha256::{sha256d_hash, sha256d_hash_with_nonce_batch};
pub use types::{Args, NonceResult, SearchJob, SearchReport};
