//! Closed time intervals and their total order.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A closed time interval `[start, end]`.
///
/// Well-formed intervals satisfy `start <= end`. The fields are public so the
/// engine can be fed pre-validated data without a round-trip through
/// [`TimeInterval::new`]; the algebra does not re-check the invariant.
///
/// The derived order compares `start` first and `end` second, which is the
/// order every sorted sequence in this crate uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    /// Build an interval, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInterval` when `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(EngineError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when `other` lies entirely within `self` (boundaries included).
    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when the two closed intervals share at least one instant.
    pub fn intersects(&self, other: &TimeInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Order two intervals by start instant, breaking ties on end instant.
pub fn compare(a: &TimeInterval, b: &TimeInterval) -> Ordering {
    a.cmp(b)
}

/// Return a sorted copy of `intervals`; the input is left untouched.
pub fn sort_intervals(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(compare);
    sorted
}

