//! Tunables for suggestion computation.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Configuration for [`crate::suggest::calc_suggestion_with`].
///
/// Durations are stored as `chrono::Duration` and serialized as whole seconds,
/// so a TOML file reads:
///
/// ```toml
/// guard_band_secs = 60
/// min_duration_secs = 1800
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Buffer kept free of suggestions on either side of every busy interval.
    #[serde(rename = "guard_band_secs", with = "duration_secs")]
    pub guard_band: Duration,

    /// Suggestions shorter than this are discarded. Zero keeps everything,
    /// including single-instant intervals.
    #[serde(rename = "min_duration_secs", with = "duration_secs")]
    pub min_duration: Duration,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            guard_band: Duration::minutes(1),
            min_duration: Duration::zero(),
        }
    }
}

impl SuggestionConfig {
    pub fn with_guard_band(mut self, guard_band: Duration) -> Self {
        self.guard_band = guard_band;
        self
    }

    pub fn with_min_duration(mut self, min_duration: Duration) -> Self {
        self.min_duration = min_duration;
        self
    }

    /// Reject negative durations.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.guard_band < Duration::zero() {
            return Err(EngineError::InvalidConfig(format!(
                "guard_band_secs must not be negative (got {})",
                self.guard_band.num_seconds()
            )));
        }
        if self.min_duration < Duration::zero() {
            return Err(EngineError::InvalidConfig(format!(
                "min_duration_secs must not be negative (got {})",
                self.min_duration.num_seconds()
            )));
        }
        Ok(())
    }
}

/// Serialize a `chrono::Duration` as a signed count of whole seconds.
mod duration_secs {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.num_seconds())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        Duration::try_seconds(secs)
            .ok_or_else(|| serde::de::Error::custom(format!("duration out of range: {secs}s")))
    }
}

