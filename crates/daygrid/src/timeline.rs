//! Axis, indicator, and scroll geometry for the day column.
//!
//! Everything here is data for a renderer to position: pixel offsets and
//! label strings. Nothing draws.

use chrono::{DateTime, Timelike, Utc};

use crate::geometry::Geometry;
use crate::packer::PackedEvent;

/// Label and gridline geometry for one hour of the rendered range.
#[derive(Debug, Clone, PartialEq)]
pub struct HourLine {
    /// The hour of day this line marks (`day_start..=day_end`).
    pub hour: u32,
    /// Axis label text; empty for the first hour of the range.
    pub label: String,
    /// Vertical offset of the label and the full-hour rule.
    pub label_offset: f64,
    /// Offset of the full-hour rule. `None` for the first hour of the
    /// range, whose boundary is the column's top edge.
    pub rule_offset: Option<f64>,
    /// Offset of the half-hour rule below this hour line.
    pub half_rule_offset: f64,
}

/// Total pixel height of the rendered hour range.
pub fn column_height(day_start_hour: u32, day_end_hour: u32, geometry: &Geometry) -> f64 {
    f64::from(day_end_hour.saturating_sub(day_start_hour)) * geometry.hour_height
}

/// Axis label text for an hour line.
///
/// The first hour of the range is unlabeled. In 12-hour mode noon is
/// `"12 PM"` and hour 24 (the midnight closing a full-day range) is
/// `"12 AM"`; in 24-hour mode hours render as bare numbers with hour 24
/// wrapping to `"0"`.
pub fn hour_label(hour: u32, day_start_hour: u32, format24h: bool) -> String {
    if hour == day_start_hour {
        String::new()
    } else if hour < 12 {
        if format24h {
            hour.to_string()
        } else {
            format!("{} AM", hour)
        }
    } else if hour == 12 {
        if format24h { "12" } else { "12 PM" }.to_string()
    } else if hour == 24 {
        if format24h { "0" } else { "12 AM" }.to_string()
    } else if format24h {
        hour.to_string()
    } else {
        format!("{} PM", hour - 12)
    }
}

/// Label and gridline geometry for every hour in `[day_start, day_end]`.
///
/// Each hour gets a label slot, a full-hour rule (except the first hour,
/// which sits on the column's top edge), and a half-hour rule below it.
/// An empty range yields no lines.
pub fn hour_lines(
    day_start_hour: u32,
    day_end_hour: u32,
    format24h: bool,
    geometry: &Geometry,
) -> Vec<HourLine> {
    (day_start_hour..=day_end_hour)
        .enumerate()
        .map(|(i, hour)| {
            let base = geometry.hour_height * i as f64;
            HourLine {
                hour,
                label: hour_label(hour, day_start_hour, format24h),
                label_offset: base,
                rule_offset: (hour != day_start_hour).then_some(base),
                half_rule_offset: base + geometry.hour_height * 0.5,
            }
        })
        .collect()
}

/// Vertical offset of the current-time indicator line.
///
/// Minute precision: the line moves once a minute, seconds are ignored.
pub fn now_indicator_offset(now: DateTime<Utc>, day_start_hour: u32, geometry: &Geometry) -> f64 {
    geometry.hour_height * (f64::from(now.hour()) - f64::from(day_start_hour))
        + geometry.hour_height * f64::from(now.minute()) / 60.0
}

/// Starting scroll position for the day column.
///
/// Defaults to just above the current-time indicator. With
/// `scroll_to_first` set and at least one packed event, scrolls to one
/// hour-height above the topmost event instead. Never negative.
pub fn initial_scroll_offset<P>(
    packed: &[PackedEvent<P>],
    now_offset: f64,
    scroll_to_first: bool,
    geometry: &Geometry,
) -> f64 {
    let mut position = now_offset - 10.0;
    if scroll_to_first {
        if let Some(min_top) = packed.iter().map(|p| p.top).reduce(f64::min) {
            position = min_top - geometry.hour_height;
        }
    }
    position.max(0.0)
}
