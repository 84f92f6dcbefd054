//! Consolidate busy blocks imported from an external calendar.
//!
//! External free/busy feeds return blocks in no particular order, often
//! overlapping and frequently back to back. Before they can take part in
//! scheduling they are collapsed into a sorted, disjoint set. Unlike
//! [`crate::overlap::merge_overlaps`], blocks that only touch are joined.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interval::{sort_intervals, TimeInterval};

/// One busy block as reported by an external calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyBlock {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<BusyBlock> for TimeInterval {
    fn from(block: BusyBlock) -> Self {
        TimeInterval {
            start: block.start,
            end: block.end,
        }
    }
}

/// Merge an unordered list of busy blocks into sorted, disjoint intervals.
///
/// Blocks that overlap or touch (`current.end >= next.start`) are combined.
pub fn merge_busy_blocks(blocks: &[BusyBlock]) -> Vec<TimeInterval> {
    if blocks.is_empty() {
        return Vec::new();
    }

    let intervals: Vec<TimeInterval> = blocks.iter().copied().map(TimeInterval::from).collect();
    let sorted = sort_intervals(&intervals);

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        if let Some(last) = merged.last_mut() {
            if last.end >= interval.start {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    debug!(blocks = blocks.len(), merged = merged.len(), "consolidated busy blocks");
    merged
}
