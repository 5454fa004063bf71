//! WASM bindings for slot-engine.
//!
//! Exposes bookable-date resolution and slot generation to the booking web
//! client via `wasm-bindgen`. All complex types cross the boundary as JSON
//! strings. The caller always passes "now" as a local datetime string, so
//! nothing here reads the host clock.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveDateTime;
use slot_engine::window::{format_date, parse_datetime};
use slot_engine::{AvailabilityTable, SlotOptions};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_table(json: &str) -> Result<AvailabilityTable, JsValue> {
    AvailabilityTable::from_json(json).map_err(js_err)
}

fn parse_now(now: &str) -> Result<NaiveDateTime, JsValue> {
    parse_datetime(now).map_err(js_err)
}

/// Parse optional `{fallback, overlap, past_dates}` options. Missing keys
/// take their defaults.
fn parse_options(json: Option<String>) -> Result<SlotOptions, JsValue> {
    match json.as_deref() {
        None | Some("") => Ok(SlotOptions::default()),
        Some(s) => serde_json::from_str(s)
            .map_err(|e| JsValue::from_str(&format!("Invalid options JSON: {}", e))),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Bookable dates of a month for one provider.
///
/// Returns a JSON array of `YYYY-MM-DD` strings, ascending.
///
/// # Arguments
/// - `table_json` -- JSON array of availability records
///   (`specialist_id`, `day_of_week`, `start_time`, `end_time`, `is_active`)
/// - `provider_id` -- provider key
/// - `year`, `month` -- target month (1-based)
/// - `now` -- local datetime, e.g. `"2026-10-19T09:30"`
#[wasm_bindgen(js_name = "getAvailableDates")]
pub fn get_available_dates(
    table_json: &str,
    provider_id: &str,
    year: i32,
    month: u32,
    now: &str,
) -> Result<String, JsValue> {
    let table = parse_table(table_json)?;
    let today = parse_now(now)?.date();

    let dates = slot_engine::resolve_available_dates(&table, provider_id, year, month, today)
        .map_err(js_err)?;
    let rendered: Vec<String> = dates.into_iter().map(format_date).collect();

    serde_json::to_string(&rendered)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Bookable 30-minute slots of one date.
///
/// Returns a JSON array of `{id, specialist_id, date, start_time, end_time,
/// is_available}` objects.
///
/// `options_json` optionally overrides the scheduling policies, e.g.
/// `{"fallback": "none", "overlap": "merge", "past_dates": "reject"}`.
#[wasm_bindgen(js_name = "getAvailableTimeSlots")]
pub fn get_available_time_slots(
    table_json: &str,
    provider_id: &str,
    date: &str,
    now: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let table = parse_table(table_json)?;
    let now = parse_now(now)?;
    let options = parse_options(options_json)?;

    let slots = slot_engine::generate_slots_for_date_str(&table, provider_id, date, now, &options)
        .map_err(js_err)?;

    serde_json::to_string(&slots)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
