//! # huddle-engine
//!
//! Meeting-time availability for study groups.
//!
//! Given every participant's booked intervals and a candidate window, the
//! engine returns the parts of the window in which everyone is free, keeping a
//! guard band around each busy interval. It also consolidates busy blocks
//! imported from external calendars. All functions are pure; nothing here
//! performs I/O or holds state between calls.
//!
//! ## Modules
//!
//! - [`interval`] - `TimeInterval`, its order, and sorting
//! - [`overlap`] - Overlap regions between two sorted sequences, strict merge
//! - [`subtract`] - Available time minus busy time, with guard bands
//! - [`suggest`] - The suggestion pipeline built from the modules above
//! - [`busy`] - Touch-inclusive consolidation of external busy blocks
//! - [`config`] - Guard band and minimum-duration settings
//! - [`wire`] - JSON DTOs and validated entry points for the web application
//! - [`error`] - Error types

pub mod busy;
pub mod config;
pub mod error;
pub mod interval;
pub mod overlap;
pub mod subtract;
pub mod suggest;
pub mod wire;

pub use busy::{merge_busy_blocks, BusyBlock};
pub use config::SuggestionConfig;
pub use error::EngineError;
pub use interval::{compare, sort_intervals, TimeInterval};
pub use overlap::{find_overlaps, merge_overlaps};
pub use subtract::subtract;
pub use suggest::{
    calc_suggestion, calc_suggestion_for, calc_suggestion_with, first_suggestion, Participant,
};
