// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the search functionality of
// noncescan, located in the search subdirectory. It declares submodules and
// re-exports key types for use throughout the project.
//
// Tree Location:
// - src/search/mod.rs (search module entry point)
// - Submodules: runner, stats, timer

pub mod runner;
pub mod stats;
pub mod timer;

// Re-export key types for convenience
pub use runner::{SearchConfig, SearchOutcome, SearchRunner};
pub use stats::{SearchStats, ThreadStats};
pub use timer::{TimeMark, elapsed, elapsed_nanos};
