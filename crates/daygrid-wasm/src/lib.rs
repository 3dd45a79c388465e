//! WASM bindings for daygrid.
//!
//! Exposes event packing and hour-axis helpers to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p daygrid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/daygrid_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use daygrid::{pack_events, Event, Geometry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for events passed from JavaScript. Fields beyond the two
/// instants are the caller's display payload and ride through untouched.
#[derive(Deserialize)]
struct EventInput {
    start: String,
    end: String,
    #[serde(flatten)]
    display: Map<String, Value>,
}

#[derive(Serialize)]
struct PackedEventDto {
    top: f64,
    height: f64,
    left: f64,
    width: f64,
    index: usize,
    start: String,
    end: String,
    #[serde(flatten)]
    display: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Helper: parse an ISO 8601 string into a UTC DateTime
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-03-01T09:00:00Z")
/// and naive local time (e.g., "2026-03-01T09:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Convert a JSON array of `{start, end, …}` objects into events with the
/// extra fields attached as the opaque payload.
fn parse_events_json(json: &str) -> Result<Vec<Event<Map<String, Value>>>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_datetime(&input.start)?;
            let end = parse_datetime(&input.end)?;
            Ok(Event::with_payload(start, end, input.display))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Pack a day's events into non-colliding column geometry.
///
/// `events_json` must be a JSON array of `{start, end, …}` objects with
/// ISO 8601 datetime strings; extra fields are carried through to the output
/// objects unchanged. Returns a JSON string containing an array of
/// `{top, height, left, width, index, start, end, …}` objects, in input
/// order.
///
/// # Arguments
/// - `events_json` -- JSON array of events
/// - `total_width` -- pixels available for the day column, gutter included
/// - `day_start_hour` -- hour of day (0-23) at the top of the rendered range
#[wasm_bindgen(js_name = "packEvents")]
pub fn pack_events_json(
    events_json: &str,
    total_width: f64,
    day_start_hour: u32,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;

    let packed = pack_events(&events, total_width, day_start_hour)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<PackedEventDto> = packed
        .into_iter()
        .map(|p| PackedEventDto {
            top: p.top,
            height: p.height,
            left: p.left,
            width: p.width,
            start: events[p.index].start.to_rfc3339(),
            end: events[p.index].end.to_rfc3339(),
            index: p.index,
            display: p.payload,
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Axis label text for an hour line, e.g. `"9 AM"` or `"14"`.
///
/// The first hour of the range renders empty.
#[wasm_bindgen(js_name = "hourLabel")]
pub fn hour_label(hour: u32, day_start_hour: u32, format24h: bool) -> String {
    daygrid::hour_label(hour, day_start_hour, format24h)
}

/// Vertical pixel offset of the current-time indicator line at the default
/// scale (100 px per hour). `now` is an ISO 8601 datetime string.
#[wasm_bindgen(js_name = "nowIndicatorOffset")]
pub fn now_indicator_offset(now: &str, day_start_hour: u32) -> Result<f64, JsValue> {
    let now = parse_datetime(now)?;
    Ok(daygrid::now_indicator_offset(
        now,
        day_start_hour,
        &Geometry::default(),
    ))
}
