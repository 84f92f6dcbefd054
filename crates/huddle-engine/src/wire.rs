//! JSON boundary for the scheduling application.
//!
//! The web application calls the engine with plain JSON. This module owns the
//! DTOs for those calls, parses and validates timestamps, and returns the
//! engine's output in the same shape. All validation happens here; the
//! interval algebra behind it trusts its inputs.
//!
//! Suggestion request:
//!
//! ```json
//! {
//!   "existingTimes": [{"start": "2026-03-16T03:00:00Z", "end": "2026-03-16T04:00:00Z"}],
//!   "setEventInterval": {"start": "2026-03-16T00:00:00Z", "end": "2026-03-16T23:59:00Z"}
//! }
//! ```
//!
//! Suggestion response:
//!
//! ```json
//! {"suggestedTimes": [{"start": "...", "end": "..."}], "success": true}
//! ```

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::busy::{merge_busy_blocks, BusyBlock};
use crate::config::SuggestionConfig;
use crate::error::{EngineError, Result};
use crate::interval::TimeInterval;
use crate::suggest::calc_suggestion_with;

/// A `{start, end}` pair of timestamp strings as it crosses the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalDto {
    pub start: String,
    pub end: String,
}

impl From<&TimeInterval> for IntervalDto {
    fn from(interval: &TimeInterval) -> Self {
        Self {
            start: interval.start.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            end: interval.end.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

impl IntervalDto {
    /// Parse both timestamps and check `start <= end`.
    pub fn to_interval(&self) -> Result<TimeInterval> {
        TimeInterval::new(parse_datetime(&self.start)?, parse_datetime(&self.end)?)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    #[serde(default)]
    pub existing_times: Vec<IntervalDto>,
    pub set_event_interval: IntervalDto,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub suggested_times: Vec<IntervalDto>,
    pub success: bool,
}

impl SuggestionRequest {
    /// Validate and convert into engine values: the busy intervals and the
    /// window.
    ///
    /// # Errors
    /// `InvalidTimestamp` or `InvalidInterval` for any malformed interval;
    /// `EmptyWindow` when the window does not end after it starts.
    pub fn parse(&self) -> Result<(Vec<TimeInterval>, TimeInterval)> {
        let busy = self
            .existing_times
            .iter()
            .map(IntervalDto::to_interval)
            .collect::<Result<Vec<_>>>()?;

        let window = self.set_event_interval.to_interval()?;
        if window.end <= window.start {
            return Err(EngineError::EmptyWindow {
                start: window.start,
                end: window.end,
            });
        }
        Ok((busy, window))
    }
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 with any offset (e.g., "2026-03-16T09:00:00+02:00") and
/// naive datetimes (e.g., "2026-03-16T09:00:00"), which are read as UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| EngineError::InvalidTimestamp {
            input: s.to_string(),
            reason: e.to_string(),
        })
}

/// Run one suggestion request end to end.
pub fn suggest(
    request: &SuggestionRequest,
    config: &SuggestionConfig,
) -> Result<SuggestionResponse> {
    config.validate()?;
    let (busy, window) = request.parse()?;
    let suggestions = calc_suggestion_with(&busy, window, config);
    Ok(SuggestionResponse {
        suggested_times: suggestions.iter().map(IntervalDto::from).collect(),
        success: true,
    })
}

/// JSON in, JSON out variant of [`suggest`].
pub fn suggest_json(request_json: &str, config: &SuggestionConfig) -> Result<String> {
    let request: SuggestionRequest = serde_json::from_str(request_json)?;
    let response = suggest(&request, config)?;
    Ok(serde_json::to_string(&response)?)
}

/// Validate and consolidate imported busy blocks.
pub fn merge_busy(blocks: &[IntervalDto]) -> Result<Vec<IntervalDto>> {
    let blocks = blocks
        .iter()
        .map(|dto| {
            dto.to_interval().map(|iv| BusyBlock {
                start: iv.start,
                end: iv.end,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(merge_busy_blocks(&blocks)
        .iter()
        .map(IntervalDto::from)
        .collect())
}

/// JSON in, JSON out variant of [`merge_busy`]. Input is an array of
/// `{start, end}` objects.
pub fn merge_busy_json(blocks_json: &str) -> Result<String> {
    let blocks: Vec<IntervalDto> = serde_json::from_str(blocks_json)?;
    let merged = merge_busy(&blocks)?;
    Ok(serde_json::to_string(&merged)?)
}
