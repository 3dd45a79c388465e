//! Input event records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-bounded item to be laid out in the day column.
///
/// The payload is an opaque caller-owned value (title, color, style handles)
/// that the layout never reads. It is cloned onto the corresponding
/// [`PackedEvent`](crate::packer::PackedEvent) so the renderer gets its own
/// data back alongside the computed geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event<P = ()> {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub payload: P,
}

impl Event {
    /// Create an event with no payload.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            payload: (),
        }
    }
}

impl<P> Event<P> {
    /// Create an event carrying an opaque display payload.
    pub fn with_payload(start: DateTime<Utc>, end: DateTime<Utc>, payload: P) -> Self {
        Self {
            start,
            end,
            payload,
        }
    }

    /// Event duration in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Whether this event overlaps another in time.
    ///
    /// Two events overlap iff `a.start < b.end && b.start < a.end`. Adjacent
    /// events, where one ends exactly when the other starts, do NOT overlap.
    pub fn overlaps<Q>(&self, other: &Event<Q>) -> bool {
        self.start < other.end && other.start < self.end
    }
}
