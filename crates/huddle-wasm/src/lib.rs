//! WASM bindings for huddle-engine.
//!
//! Exposes meeting suggestions and busy-block consolidation to the scheduling
//! web application via `wasm-bindgen`. Requests and responses cross the
//! boundary as JSON strings in the shapes documented in `huddle_engine::wire`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p huddle-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg \
//!   target/wasm32-unknown-unknown/release/huddle_wasm.wasm
//! ```

use chrono::Duration;
use huddle_engine::SuggestionConfig;
use wasm_bindgen::prelude::*;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Build a config from optional JavaScript numbers, falling back to defaults.
///
/// Both are unsigned, so a negative number is rejected by the bindings before
/// it reaches the engine.
fn config_from(guard_band_secs: Option<u32>, min_duration_mins: Option<u32>) -> SuggestionConfig {
    let mut config = SuggestionConfig::default();
    if let Some(secs) = guard_band_secs {
        config = config.with_guard_band(Duration::seconds(i64::from(secs)));
    }
    if let Some(mins) = min_duration_mins {
        config = config.with_min_duration(Duration::minutes(i64::from(mins)));
    }
    config
}

/// Suggest times when every participant is free.
///
/// `request_json` is `{"existingTimes": [{start, end}, ...], "setEventInterval": {start, end}}`
/// with ISO 8601 timestamps. Returns `{"suggestedTimes": [...], "success": true}`.
///
/// # Arguments
/// - `guard_band_secs` -- Optional buffer around busy intervals (default 60)
/// - `min_duration_mins` -- Optional minimum suggestion length (default 0)
#[wasm_bindgen(js_name = "calcSuggestion")]
pub fn calc_suggestion(
    request_json: &str,
    guard_band_secs: Option<u32>,
    min_duration_mins: Option<u32>,
) -> Result<String, JsValue> {
    let config = config_from(guard_band_secs, min_duration_mins);
    huddle_engine::wire::suggest_json(request_json, &config).map_err(to_js)
}

/// Merge busy blocks from an external calendar into a sorted, disjoint list.
///
/// `blocks_json` is a JSON array of `{start, end}` objects in any order.
/// Overlapping and touching blocks are combined.
#[wasm_bindgen(js_name = "mergeBusyBlocks")]
pub fn merge_busy_blocks(blocks_json: &str) -> Result<String, JsValue> {
    huddle_engine::wire::merge_busy_json(blocks_json).map_err(to_js)
}
