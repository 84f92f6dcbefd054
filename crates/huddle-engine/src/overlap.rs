//! Overlap regions between two interval sequences, and their strict merge.
//!
//! [`find_overlaps`] walks two sorted sequences with one cursor each and emits
//! every region where an interval of one sequence meets an interval of the
//! other. The regions come out in start order but may overlap each other, so
//! [`merge_overlaps`] collapses them before they are subtracted from the
//! available time.

use crate::interval::TimeInterval;

/// Find every overlap region between two sorted sequences.
///
/// Each input must be sorted by `(start, end)` and free of internal overlaps.
/// At each step the interval that starts first (the one from `seq_a` on equal
/// starts) is compared against the other; if they share any instant the
/// region `[later.start, min(ends)]` is emitted. The cursor whose interval ends
/// first is advanced. On equal ends the cursor of the later-starting interval
/// moves.
///
/// Touching intervals (`a.end == b.start`) produce a zero-length region.
pub fn find_overlaps(seq_a: &[TimeInterval], seq_b: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut overlaps = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < seq_a.len() && j < seq_b.len() {
        let a = seq_a[i];
        let b = seq_b[j];
        let a_leads = a.start <= b.start;
        let (first, second) = if a_leads { (a, b) } else { (b, a) };

        if first.end >= second.start {
            overlaps.push(TimeInterval {
                start: second.start,
                end: first.end.min(second.end),
            });
        }

        if a.end < b.end {
            i += 1;
        } else if b.end < a.end {
            j += 1;
        } else if a_leads {
            j += 1;
        } else {
            i += 1;
        }
    }

    overlaps
}

/// Collapse a sorted sequence into disjoint maximal intervals, merging only
/// intervals that genuinely overlap.
///
/// Intervals that merely touch (`current.end == next.start`) are kept apart.
/// A zero-length interval still absorbs a following interval that starts at
/// the same instant.
pub fn merge_overlaps(sorted: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        if let Some(last) = merged.last_mut() {
            if interval.start < last.end || interval.start == last.start {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(*interval);
    }
    merged
}

