//! Tests for the interval type, its order, and sorting.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, TimeZone, Utc};
use huddle_engine::error::EngineError;
use huddle_engine::interval::{compare, sort_intervals, TimeInterval};

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, h, m, 0).unwrap()
}

fn iv(sh: u32, sm: u32, eh: u32, em: u32) -> TimeInterval {
    TimeInterval {
        start: at(sh, sm),
        end: at(eh, em),
    }
}

#[test]
fn compare_orders_by_start_then_end() {
    assert_eq!(compare(&iv(9, 0, 10, 0), &iv(10, 0, 10, 30)), Ordering::Less);
    assert_eq!(compare(&iv(9, 0, 10, 0), &iv(9, 0, 9, 30)), Ordering::Greater);
    assert_eq!(compare(&iv(9, 0, 10, 0), &iv(9, 0, 10, 0)), Ordering::Equal);
}

#[test]
fn later_start_wins_over_earlier_end() {
    // A long interval starting first still sorts before a short one starting later.
    assert_eq!(compare(&iv(8, 0, 18, 0), &iv(9, 0, 9, 15)), Ordering::Less);
}

#[test]
fn sort_returns_new_sequence_and_leaves_input_alone() {
    let input = vec![iv(12, 0, 13, 0), iv(9, 0, 11, 0), iv(9, 0, 10, 0)];
    let sorted = sort_intervals(&input);

    assert_eq!(sorted, vec![iv(9, 0, 10, 0), iv(9, 0, 11, 0), iv(12, 0, 13, 0)]);
    assert_eq!(input, vec![iv(12, 0, 13, 0), iv(9, 0, 11, 0), iv(9, 0, 10, 0)]);
}

#[test]
fn sort_of_empty_is_empty() {
    assert!(sort_intervals(&[]).is_empty());
}

#[test]
fn new_rejects_inverted_interval() {
    let err = TimeInterval::new(at(10, 0), at(9, 0)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInterval { .. }));
}

#[test]
fn new_accepts_zero_length_interval() {
    let point = TimeInterval::new(at(10, 0), at(10, 0)).unwrap();
    assert_eq!(point.duration(), Duration::zero());
}

#[test]
fn touching_intervals_intersect_at_one_instant() {
    assert!(iv(9, 0, 10, 0).intersects(&iv(10, 0, 11, 0)));
    assert!(!iv(9, 0, 10, 0).intersects(&iv(10, 1, 11, 0)));
}

#[test]
fn contains_includes_boundaries() {
    let window = iv(9, 0, 17, 0);
    assert!(window.contains(&iv(9, 0, 17, 0)));
    assert!(window.contains(&iv(12, 0, 12, 0)));
    assert!(!window.contains(&iv(8, 59, 10, 0)));
}

#[test]
fn intervals_serialize_as_rfc3339() {
    let json = serde_json::to_string(&iv(9, 0, 10, 0)).unwrap();
    assert_eq!(
        json,
        r#"{"start":"2026-03-16T09:00:00Z","end":"2026-03-16T10:00:00Z"}"#
    );
}
