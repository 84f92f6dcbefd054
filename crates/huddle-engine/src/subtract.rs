//! Subtract busy time from available time, leaving a guard band around every
//! busy interval.

use chrono::{DateTime, Duration, Utc};
use tracing::trace;

use crate::interval::TimeInterval;

/// Compute what remains of `available` once every `busy` interval is removed.
///
/// Both inputs must be sorted; `busy` must already be merged (see
/// [`crate::overlap::merge_overlaps`]). Each busy interval `b` blocks the open
/// region `(b.start - guard_band, b.end + guard_band)`, so a free interval
/// ending just before `b` stops at `b.start - guard_band` and one resuming
/// after it starts at `b.end + guard_band`. Guard-band arithmetic saturates at
/// the edges of the representable time range.
///
/// The walk keeps one cursor per sequence and advances whichever current
/// interval ends first; when both end together the busy cursor moves. A busy
/// interval reaching past the end of the current available interval stays
/// current so it can also cut the next one.
///
/// A cut that would leave `start > end` (possible when a guard band swallows a
/// short gap) is dropped rather than emitted. Zero-length remainders are kept,
/// except with a zero guard band when the single instant is the closed edge of
/// a busy interval: that instant is busy, so touching busy intervals leave
/// nothing between them.
pub fn subtract(
    available: &[TimeInterval],
    busy: &[TimeInterval],
    guard_band: Duration,
) -> Vec<TimeInterval> {
    let mut free = Vec::new();
    let Some(first) = available.first() else {
        return free;
    };

    let guarded = guard_band > Duration::zero();
    let (mut i, mut j) = (0, 0);
    let mut from = first.start;
    // `from` sits on the end instant of a busy interval (zero guard band only).
    let mut at_busy_end = false;

    while i < available.len() {
        let current = available[i];
        let blocking = busy
            .get(j)
            .filter(|b| cut_before(b.start, guard_band) <= current.end);

        let Some(b) = blocking else {
            // Nothing else cuts this interval: the rest of it is free.
            if from < current.end || (from == current.end && !at_busy_end) {
                free.push(TimeInterval {
                    start: from,
                    end: current.end,
                });
            } else {
                trace!(%from, end = %current.end, "no remainder after last cut");
            }
            i += 1;
            if let Some(next) = available.get(i) {
                resume(&mut from, &mut at_busy_end, next.start);
            }
            continue;
        };

        let cut_start = cut_before(b.start, guard_band);
        let cut_end = cut_after(b.end, guard_band);
        if from < cut_start || (from == cut_start && guarded) {
            free.push(TimeInterval {
                start: from,
                end: cut_start,
            });
        }
        if cut_end >= from {
            from = cut_end;
            at_busy_end = !guarded;
        }
        trace!(busy_start = %b.start, busy_end = %b.end, resume = %from, "cut busy interval");

        if b.end <= current.end {
            j += 1;
        } else {
            i += 1;
            if let Some(next) = available.get(i) {
                resume(&mut from, &mut at_busy_end, next.start);
            }
        }
    }

    free
}

fn cut_before(start: DateTime<Utc>, guard_band: Duration) -> DateTime<Utc> {
    start.checked_sub_signed(guard_band).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn cut_after(end: DateTime<Utc>, guard_band: Duration) -> DateTime<Utc> {
    end.checked_add_signed(guard_band).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Move the cursor to the start of the next available interval if it lies
/// further on.
fn resume(from: &mut DateTime<Utc>, at_busy_end: &mut bool, next_start: DateTime<Utc>) {
    if next_start > *from {
        *from = next_start;
        *at_busy_end = false;
    }
}
