//! Suggest meeting times that every participant can attend.
//!
//! Pipeline: sort the combined busy intervals, find where they overlap the
//! candidate window, strictly merge those overlap regions, then subtract them
//! from the window with a guard band on each side.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SuggestionConfig;
use crate::interval::{sort_intervals, TimeInterval};
use crate::overlap::{find_overlaps, merge_overlaps};
use crate::subtract::subtract;

/// A participant and the intervals they are already committed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Opaque identifier supplied by the caller (e.g., a user id).
    pub id: String,
    pub busy: Vec<TimeInterval>,
}

/// Suggest free intervals inside `window` using the default configuration
/// (one-minute guard band, no minimum duration).
pub fn calc_suggestion(existing_busy: &[TimeInterval], window: TimeInterval) -> Vec<TimeInterval> {
    calc_suggestion_with(existing_busy, window, &SuggestionConfig::default())
}

/// Suggest free intervals inside `window` given every participant's busy
/// intervals combined into `existing_busy`.
///
/// The busy intervals need not be sorted. The result is sorted, pairwise
/// disjoint, and contained in `window`. An empty result means no common free
/// time, not an error.
///
/// Inputs are not validated: callers must pass well-formed intervals (see
/// [`crate::wire`] for the checked boundary).
pub fn calc_suggestion_with(
    existing_busy: &[TimeInterval],
    window: TimeInterval,
    config: &SuggestionConfig,
) -> Vec<TimeInterval> {
    let busy = sort_intervals(existing_busy);
    let available = vec![window];

    let overlaps = find_overlaps(&busy, &available);
    let suggestions = if overlaps.is_empty() {
        available
    } else {
        let merged = merge_overlaps(&overlaps);
        debug!(
            overlaps = overlaps.len(),
            merged = merged.len(),
            "busy time inside window"
        );
        subtract(&available, &merged, config.guard_band)
    };

    let suggestions: Vec<TimeInterval> = suggestions
        .into_iter()
        .filter(|s| s.duration() >= config.min_duration)
        .collect();

    debug!(
        busy = existing_busy.len(),
        suggestions = suggestions.len(),
        window_start = %window.start,
        window_end = %window.end,
        "computed suggestions"
    );
    suggestions
}

/// Suggest free intervals for a group, flattening each participant's busy set.
pub fn calc_suggestion_for(
    participants: &[Participant],
    window: TimeInterval,
    config: &SuggestionConfig,
) -> Vec<TimeInterval> {
    let busy: Vec<TimeInterval> = participants
        .iter()
        .flat_map(|p| p.busy.iter().copied())
        .collect();
    calc_suggestion_with(&busy, window, config)
}

/// The earliest suggestion inside `window`, if any.
pub fn first_suggestion(
    existing_busy: &[TimeInterval],
    window: TimeInterval,
    config: &SuggestionConfig,
) -> Option<TimeInterval> {
    calc_suggestion_with(existing_busy, window, config)
        .into_iter()
        .next()
}
