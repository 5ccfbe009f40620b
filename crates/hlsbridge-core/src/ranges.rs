//! Buffered time-range helpers
//!
//! Ranges come from the presentation view as ordered, disjoint intervals.
//! They are only consulted here as an eviction oracle; nothing in this
//! crate mutates them. Boundary comparisons tolerate
//! [`TIME_FUDGE_FACTOR`](crate::config::TIME_FUDGE_FACTOR) of rounding.

use crate::config::TIME_FUDGE_FACTOR;
use serde::{Deserialize, Serialize};

/// A single interval of retained media, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Fudge-tolerant containment test
    pub fn contains(&self, time: f64) -> bool {
        self.start - TIME_FUDGE_FACTOR <= time && self.end + TIME_FUDGE_FACTOR >= time
    }
}

/// Keep the ranges matching a predicate over `(start, end)`
pub fn filter_ranges<F>(ranges: &[TimeRange], predicate: F) -> Vec<TimeRange>
where
    F: Fn(f64, f64) -> bool,
{
    ranges
        .iter()
        .copied()
        .filter(|r| predicate(r.start, r.end))
        .collect()
}

/// Find the buffered ranges containing the given time
pub fn find_range(ranges: &[TimeRange], time: f64) -> Vec<TimeRange> {
    filter_ranges(ranges, |start, end| {
        start - TIME_FUDGE_FACTOR <= time && end + TIME_FUDGE_FACTOR >= time
    })
}

/// Start of the earliest buffered range, if any media is retained
pub fn buffered_start(ranges: &[TimeRange]) -> Option<f64> {
    ranges.first().map(|r| r.start)
}
