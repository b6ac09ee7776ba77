// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/timer.rs
// Version: 1.0.0
//
// This file provides explicit time marks for measuring search throughput.
// Both markers are passed explicitly to the duration functions; there is no
// process-wide timestamp state.

use std::time::{Duration, Instant};

/// An explicit point-in-time marker taken from the monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct TimeMark(Instant);

impl TimeMark {
    pub fn now() -> Self {
        Self(Instant::now())
    }
}

/// Duration between two marks. Saturates to zero when `end` precedes `start`.
pub fn elapsed(start: TimeMark, end: TimeMark) -> Duration {
    end.0.checked_duration_since(start.0).unwrap_or(Duration::ZERO)
}

/// Elapsed nanoseconds between two marks as a single integer.
pub fn elapsed_nanos(start: TimeMark, end: TimeMark) -> u128 {
    elapsed(start, end).as_nanos()
}
