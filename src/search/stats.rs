// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/stats.rs
// Version: 1.0.1
//
// This file implements per-thread and aggregate statistics tracking for the
// search, located in the search subdirectory. It monitors hash counts and
// hashrate using thread-safe atomic counters.
//
// Tree Location:
// - src/search/stats.rs (search statistics logic)
// - Depends on: std

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

pub struct ThreadStats {
    #[allow(dead_code)] // Kept for per-thread diagnostics output
    thread_id: usize,
    pub hashes_computed: AtomicU64,
    start_time: Instant,
    current_hashrate: Mutex<f64>,
    pub peak_hashrate: AtomicU64,
}

impl ThreadStats {
    /// Create a new ThreadStats instance for a specific thread
    pub fn new(thread_id: usize) -> Self {
        Self {
            thread_id,
            hashes_computed: AtomicU64::new(0),
            start_time: Instant::now(),
            current_hashrate: Mutex::new(0.0),
            peak_hashrate: AtomicU64::new(0),
        }
    }

    /// Update hashrate based on computed hashes
    pub fn update_hashrate(&self, hashes: u64) {
        self.hashes_computed.fetch_add(hashes, Ordering::Relaxed);
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            let total_hashes = self.hashes_computed.load(Ordering::Relaxed);
            let current_rate = total_hashes as f64 / elapsed;

            *self.current_hashrate.lock().unwrap() = current_rate;

            let current_rate_u64 = current_rate as u64;
            let current_peak = self.peak_hashrate.load(Ordering::Relaxed);
            if current_rate_u64 > current_peak {
                self.peak_hashrate.store(current_rate_u64, Ordering::Relaxed);
            }
        }
    }

    /// Get the current hashrate
    pub fn get_hashrate(&self) -> f64 {
        *self.current_hashrate.lock().unwrap()
    }

    /// Get the peak hashrate achieved
    pub fn get_peak_hashrate(&self) -> f64 {
        self.peak_hashrate.load(Ordering::Relaxed) as f64
    }
}

/// Aggregate statistics across all search threads
pub struct SearchStats {
    pub thread_stats: Vec<Arc<ThreadStats>>,
    pub total_hashes: AtomicU64,
}

impl SearchStats {
    pub fn new(thread_count: usize) -> Self {
        Self {
            thread_stats: (0..thread_count).map(|id| Arc::new(ThreadStats::new(id))).collect(),
            total_hashes: AtomicU64::new(0),
        }
    }

    /// Sum of per-thread peak hashrates
    pub fn peak_hashrate(&self) -> f64 {
        self.thread_stats.iter().map(|t| t.get_peak_hashrate()).sum()
    }

    /// Sum of per-thread current hashrates
    pub fn current_hashrate(&self) -> f64 {
        self.thread_stats.iter().map(|t| t.get_hashrate()).sum()
    }
}
