//! Pack timed events into a non-colliding day-column layout.
//!
//! Vertical geometry is a pure per-event function of its instants. Horizontal
//! geometry is derived from temporal overlap in two phases: a start-ordered
//! sweep assigns each event to the first free column of its collision group,
//! then each event's width expands rightward across columns that no
//! overlapping event claims.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::event::Event;
use crate::geometry::Geometry;

/// A laid-out event: pixel geometry plus the identity of its source event.
///
/// `top`/`height` depend only on the event's own instants; `left`/`width`
/// encode the column assignment. For any two events that overlap in time the
/// horizontal spans `[left, left + width)` are disjoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedEvent<P = ()> {
    /// Vertical offset of the event's top edge within the day column.
    pub top: f64,
    /// Vertical extent, proportional to the event duration.
    pub height: f64,
    /// Horizontal offset of the event's left edge.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Position of the source event in the input slice.
    pub index: usize,
    /// The caller's opaque payload, carried through unchanged.
    pub payload: P,
}

/// Pack events into the day column using the default [`Geometry`]
/// (100 px per hour, 50 px left gutter).
///
/// See [`pack_events_with`] for the full contract.
pub fn pack_events<P: Clone>(
    events: &[Event<P>],
    total_width: f64,
    day_start_hour: u32,
) -> Result<Vec<PackedEvent<P>>> {
    pack_events_with(events, total_width, day_start_hour, &Geometry::default())
}

/// Pack events into the day column with an explicit pixel scale.
///
/// Events may arrive in any order. Each output record's `index` refers back
/// to the input slice, and the output is returned in input order
/// (`output[i].index == i`). The computation is pure and deterministic:
/// identical inputs produce identical output.
///
/// Events that overlap in time are assigned disjoint horizontal spans within
/// `usable = total_width - geometry.left_margin`: each run of transitively
/// overlapping events shares `usable` equally among the columns it opens,
/// and an event widens over the columns to its right that hold nothing
/// overlapping it. Events with no temporal overlap each get the full usable
/// width.
///
/// # Arguments
/// - `events` -- the events to lay out, unordered
/// - `total_width` -- pixels available for the day column, gutter included
/// - `day_start_hour` -- hour of day (0-23) rendered at the top of the column
/// - `geometry` -- per-hour pixel scale and gutter width
///
/// # Errors
/// Returns `LayoutError::InvalidWidth` if `total_width` is zero, negative,
/// or not finite, and `LayoutError::InvalidEvent` if any event has
/// `end <= start`. A single bad event fails the whole call; no partial
/// layout is returned.
pub fn pack_events_with<P: Clone>(
    events: &[Event<P>],
    total_width: f64,
    day_start_hour: u32,
    geometry: &Geometry,
) -> Result<Vec<PackedEvent<P>>> {
    if !total_width.is_finite() || total_width <= 0.0 {
        return Err(LayoutError::InvalidWidth(total_width));
    }
    for (index, ev) in events.iter().enumerate() {
        if ev.end <= ev.start {
            return Err(LayoutError::InvalidEvent {
                index,
                start: ev.start,
                end: ev.end,
            });
        }
    }

    // Sort by start, then end, then input position, so simultaneous starts
    // pack the same way on every call.
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&i| (events[i].start, events[i].end, i));

    // Sweep the start-ordered events into collision groups. A new group
    // begins when an event starts at or after everything seen so far has
    // ended; within a group, each event takes the first column whose most
    // recent occupant has already ended.
    let mut groups: Vec<Group> = Vec::new();
    for &idx in &order {
        if let Some(group) = groups.last_mut() {
            if events[idx].start < group.last_end {
                group.place(idx, events);
                continue;
            }
        }
        groups.push(Group::seed(idx, events[idx].end));
    }

    let usable_width = total_width - geometry.left_margin;

    let mut packed: Vec<PackedEvent<P>> = Vec::with_capacity(events.len());
    for group in &groups {
        let baseline = usable_width / group.columns.len() as f64;
        for (column, occupants) in group.columns.iter().enumerate() {
            for &idx in occupants {
                let ev = &events[idx];
                let span = group.column_span(column, ev, events);
                packed.push(PackedEvent {
                    top: geometry.hour_height
                        * (hours_into_day(ev.start) - f64::from(day_start_hour)),
                    height: geometry.hour_height * ev.duration_hours(),
                    left: geometry.left_margin + column as f64 * baseline,
                    width: baseline * span as f64,
                    index: idx,
                    payload: ev.payload.clone(),
                });
            }
        }
    }
    packed.sort_by_key(|p| p.index);

    Ok(packed)
}

/// One collision group under construction: the columns it has opened, each
/// listing the input indices of the events placed in it in start order, and
/// the latest end instant seen across the whole group.
struct Group {
    columns: Vec<Vec<usize>>,
    last_end: DateTime<Utc>,
}

impl Group {
    fn seed(idx: usize, end: DateTime<Utc>) -> Self {
        Self {
            columns: vec![vec![idx]],
            last_end: end,
        }
    }

    /// Place an event into the first column whose most recent occupant has
    /// ended by the event's start, or open a new column on the right.
    fn place<P>(&mut self, idx: usize, events: &[Event<P>]) {
        let ev = &events[idx];
        let slot = self.columns.iter().position(|col| match col.last() {
            Some(&occupant) => events[occupant].end <= ev.start,
            None => true,
        });
        match slot {
            Some(column) => self.columns[column].push(idx),
            None => self.columns.push(vec![idx]),
        }
        self.last_end = self.last_end.max(ev.end);
    }

    /// How many columns an event in `column` may span: its own, plus every
    /// column to the right up to the first one holding an event that
    /// overlaps it in time. With no overlapping claimant the span runs to
    /// the group's rightmost column.
    fn column_span<P>(&self, column: usize, ev: &Event<P>, events: &[Event<P>]) -> usize {
        let mut span = 1;
        for col in &self.columns[column + 1..] {
            if col.iter().any(|&other| ev.overlaps(&events[other])) {
                break;
            }
            span += 1;
        }
        span
    }
}

/// Fractional hour-of-day of an instant within its own calendar day (UTC).
///
/// Only the start instant is anchored this way; height comes from the raw
/// duration, so an event crossing midnight keeps its full positive extent.
fn hours_into_day(t: DateTime<Utc>) -> f64 {
    f64::from(t.time().num_seconds_from_midnight()) / 3600.0
}
