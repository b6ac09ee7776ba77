// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.2
//
// This file serves as the main library entry point for noncescan, located at
// the root of the source tree. It exports all public modules and types that
// other crates or binaries can use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, search, utils

pub mod core;
pub mod search;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::compact::{CompactError, expand_compact, expand_compact_into, hash_meets_target};
pub use crate::core::types::{Args, NonceResult, SearchJob, SearchReport};
pub use crate::search::runner::{SearchOutcome, SearchRunner};
pub use crate::search::timer::{TimeMark, elapsed_nanos};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
