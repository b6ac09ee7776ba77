// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/runner.rs
// Version: 1.0.4
//
// This file implements the search execution engine. It expands the compact
// difficulty into the 32-byte target, coordinates the worker threads that
// scan the nonce space, collects the first satisfying nonce into the result
// sink, and reports throughput from explicit start/end time marks.

use crate::Result;
use crate::core::compact::{U256, bits_difficulty, target_to_u256};
use crate::core::sha256::sha256d_hash_with_nonce_batch;
use crate::core::types::{NonceResult, SearchJob, SearchReport};
use crate::search::stats::{SearchStats, ThreadStats};
use crate::search::timer::{TimeMark, elapsed, elapsed_nanos};
use crate::utils::format::FormatUtils;
use log::{debug, info, warn};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use std::thread;
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "noncescan::runner";

/// Size of the 32-bit nonce space each search covers (with wraparound from
/// the configured start nonce).
const NONCE_SPACE: u64 = 1 << 32;

/// Configuration for search execution
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub thread_count: usize,
    pub start_nonce: u32,
    pub max_duration: Option<Duration>,
    pub report_interval: Duration,
}

/// Main search runner
pub struct SearchRunner {
    config: SearchConfig,
    job: SearchJob,
    stats: Arc<SearchStats>,
}

/// Outcome of a completed search run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Result sink: found-flag, nonce, hash
    pub result: NonceResult,

    /// Total hashes computed across all threads
    pub total_hashes: u64,

    /// Wall-clock run time in nanoseconds
    pub elapsed_nanos: u128,

    /// Average hashrate (H/s)
    pub hashrate: f64,

    /// Peak hashrate (H/s), summed over per-thread peaks
    pub peak_hashrate: f64,

    /// Worker threads used
    pub thread_count: usize,
}

impl SearchOutcome {
    /// Build the JSON run report for this outcome
    pub fn to_report(&self, job: &SearchJob) -> SearchReport {
        SearchReport {
            bits: format!("{:08x}", job.bits),
            target: hex::encode(job.target),
            difficulty: bits_difficulty(job.bits),
            found: self.result.found,
            nonce: self.result.found.then_some(self.result.nonce),
            hash: self.result.hash.map(hex::encode),
            total_hashes: self.total_hashes,
            elapsed_nanos: u64::try_from(self.elapsed_nanos).unwrap_or(u64::MAX),
            hashrate: self.hashrate,
            threads: self.thread_count,
        }
    }
}

impl SearchRunner {
    pub fn new(
        job: SearchJob,
        threads: usize,
        start_nonce: u32,
        max_duration: Option<Duration>,
    ) -> Self {
        let actual_threads = if threads == 0 { num_cpus::get() } else { threads };
        let config = SearchConfig {
            thread_count: actual_threads,
            start_nonce,
            max_duration,
            report_interval: Duration::from_secs(5),
        };
        let stats = Arc::new(SearchStats::new(actual_threads));
        Self { config, job, stats }
    }

    pub async fn run(&self) -> Result<SearchOutcome> {
        let thread_count = self.config.thread_count;
        info!(target: LOG_TARGET,
            "🔍 Starting search with {} threads, nbits {:08x}, target {}",
            thread_count,
            self.job.bits,
            hex::encode(self.job.target)
        );
        if target_to_u256(&self.job.target).is_zero() {
            warn!(target: LOG_TARGET,
                "Target for nbits {:08x} is all zero; no hash can satisfy it",
                self.job.bits
            );
        }

        let should_stop = Arc::new(AtomicBool::new(false));
        let threads_done = Arc::new(AtomicUsize::new(0));
        let result = Arc::new(Mutex::new(NonceResult::new()));
        let (found_tx, found_rx): (Sender<(u32, [u8; 32])>, Receiver<(u32, [u8; 32])>) =
            mpsc::channel();

        let start_mark = TimeMark::now();

        let mut thread_handles = Vec::new();
        for thread_id in 0..thread_count {
            let job = self.job.clone();
            let start_nonce = self.config.start_nonce;
            let should_stop = Arc::clone(&should_stop);
            let threads_done = Arc::clone(&threads_done);
            let found_tx = found_tx.clone();
            let thread_stats = Arc::clone(&self.stats.thread_stats[thread_id]);
            let stats = Arc::clone(&self.stats);

            let handle = thread::spawn(move || {
                search_thread(
                    thread_id,
                    thread_count,
                    job,
                    start_nonce,
                    should_stop,
                    threads_done,
                    found_tx,
                    thread_stats,
                    stats,
                );
                debug!(target: LOG_TARGET, "Thread {}: Terminated", thread_id);
            });
            thread_handles.push(handle);
        }

        let result_collector = Arc::clone(&result);
        let should_stop_collector = Arc::clone(&should_stop);
        let collector_handle = thread::spawn(move || {
            loop {
                match found_rx.recv_timeout(Duration::from_millis(100)) {
                    Ok((nonce, hash)) => {
                        let mut sink = result_collector.lock().unwrap();
                        // First satisfying nonce wins; later finds from
                        // racing threads are dropped.
                        if !sink.found {
                            sink.found = true;
                            sink.nonce = nonce;
                            sink.hash = Some(hash);
                            debug!(target: LOG_TARGET,
                                "Collector: recorded nonce {:08x}", nonce);
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        if should_stop_collector.load(Ordering::Relaxed) {
                            break;
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            }
            // A find can still be in flight when the stop flag is observed.
            for (nonce, hash) in found_rx.try_iter() {
                let mut sink = result_collector.lock().unwrap();
                if !sink.found {
                    sink.found = true;
                    sink.nonce = nonce;
                    sink.hash = Some(hash);
                }
            }
            debug!(target: LOG_TARGET, "Result collector thread stopping");
        });

        let stats_reporter = Arc::clone(&self.stats);
        let should_stop_reporter = Arc::clone(&should_stop);
        let report_interval = self.config.report_interval;
        let progress_handle = thread::spawn(move || {
            let mut last_hashes = 0u64;
            let mut last_time = Instant::now();
            while !should_stop_reporter.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(100));
                if last_time.elapsed() < report_interval {
                    continue;
                }
                let current_hashes = stats_reporter.total_hashes.load(Ordering::Relaxed);
                let now = Instant::now();
                let hashes_delta = current_hashes - last_hashes;
                let time_delta = now.duration_since(last_time).as_secs_f64();
                if time_delta > 0.0 {
                    info!(target: LOG_TARGET,
                        "📊 Progress: {} | Total: {} hashes | Space covered: {:.2}%",
                        FormatUtils::format_hashrate(hashes_delta as f64 / time_delta),
                        FormatUtils::format_number(current_hashes),
                        current_hashes as f64 / NONCE_SPACE as f64 * 100.0
                    );
                }
                last_hashes = current_hashes;
                last_time = now;
            }
            debug!(target: LOG_TARGET, "Progress reporter thread stopping");
        });

        // Wait for a find, exhaustion of the space, or the deadline.
        loop {
            tokio::time::sleep(Duration::from_millis(100)).await;
            if should_stop.load(Ordering::Relaxed) {
                break;
            }
            if threads_done.load(Ordering::Relaxed) >= thread_count {
                info!(target: LOG_TARGET, "🔚 Nonce space exhausted without a satisfying hash");
                break;
            }
            if let Some(limit) = self.config.max_duration {
                if elapsed(start_mark, TimeMark::now()) >= limit {
                    info!(target: LOG_TARGET,
                        "⏱️ Max duration of {}s reached, stopping search",
                        limit.as_secs()
                    );
                    break;
                }
            }
        }

        should_stop.store(true, Ordering::Relaxed);
        debug!(target: LOG_TARGET, "Signaled threads to stop");

        for (i, handle) in thread_handles.into_iter().enumerate() {
            if let Err(e) = handle.join() {
                debug!(target: LOG_TARGET, "Thread {} failed to join: {:?}", i, e);
            }
        }
        drop(found_tx);
        if let Err(e) = collector_handle.join() {
            debug!(target: LOG_TARGET, "Result collector thread failed to join: {:?}", e);
        }
        if let Err(e) = progress_handle.join() {
            debug!(target: LOG_TARGET, "Progress reporter thread failed to join: {:?}", e);
        }
        info!(target: LOG_TARGET, "✅ All threads stopped");

        let end_mark = TimeMark::now();
        let elapsed_ns = elapsed_nanos(start_mark, end_mark);
        let elapsed_secs = elapsed(start_mark, end_mark).as_secs_f64();
        let total_hashes = self.stats.total_hashes.load(Ordering::Relaxed);
        let hashrate = if elapsed_secs > 0.0 {
            total_hashes as f64 / elapsed_secs
        } else {
            0.0
        };

        let result = result.lock().unwrap().clone();
        Ok(SearchOutcome {
            result,
            total_hashes,
            elapsed_nanos: elapsed_ns,
            hashrate,
            peak_hashrate: self.stats.peak_hashrate(),
            thread_count,
        })
    }
}

fn search_thread(
    thread_id: usize,
    num_threads: usize,
    job: SearchJob,
    start_nonce: u32,
    should_stop: Arc<AtomicBool>,
    threads_done: Arc<AtomicUsize>,
    found_tx: Sender<(u32, [u8; 32])>,
    thread_stats: Arc<ThreadStats>,
    stats: Arc<SearchStats>,
) {
    let header = job.header;
    let target = target_to_u256(&job.target);
    let stride = (4 * num_threads) as u64;
    // Thread t's batches start at offset 4*t; strides tile the space
    // without overlap.
    let mut offset = (4 * thread_id) as u64;
    let mut local_hash_count = 0u64;
    let mut last_report = Instant::now();

    if thread_id == 0 {
        debug!(target: LOG_TARGET, "Thread 0: Target: {:064x}", target);
    }

    'search: while offset < NONCE_SPACE {
        for _ in (0..10_000).step_by(4) {
            if should_stop.load(Ordering::Relaxed) {
                break 'search;
            }
            if offset >= NONCE_SPACE {
                break;
            }
            let nonce = start_nonce.wrapping_add(offset as u32);
            let batch_results = sha256d_hash_with_nonce_batch(&header, nonce);
            for (hash, batch_nonce) in batch_results.iter() {
                local_hash_count += 1;
                let hash_value = U256::from_big_endian(hash);
                if hash_value <= target {
                    info!(target: LOG_TARGET,
                        "🎯 Thread {}: Nonce {:08x} meets target! Hash: {}",
                        thread_id,
                        batch_nonce,
                        hex::encode(hash)
                    );
                    let _ = found_tx.send((*batch_nonce, *hash));
                    should_stop.store(true, Ordering::Relaxed);
                }
            }
            offset += stride;
        }
        if last_report.elapsed() > Duration::from_secs(1) {
            thread_stats.update_hashrate(local_hash_count);
            stats.total_hashes.fetch_add(local_hash_count, Ordering::Relaxed);
            local_hash_count = 0;
            last_report = Instant::now();
        }
    }

    thread_stats.update_hashrate(local_hash_count);
    stats.total_hashes.fetch_add(local_hash_count, Ordering::Relaxed);
    threads_done.fetch_add(1, Ordering::Relaxed);
}
