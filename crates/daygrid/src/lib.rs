//! # daygrid
//!
//! Day-view event layout engine: packs an unordered set of timed events into
//! a non-colliding 2D day-column layout.
//!
//! Vertical placement is a pure function of each event's instants at a fixed
//! pixel scale per hour. Horizontal placement assigns temporally-overlapping
//! events to disjoint columns and shares the usable width across each run of
//! overlapping events. The output is plain geometry: a renderer positions
//! tappable regions from it and nothing flows back.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use daygrid::{pack_events, Event};
//!
//! let events = vec![
//!     Event::new(
//!         Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
//!         Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap(),
//!     ),
//!     Event::new(
//!         Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
//!         Utc.with_ymd_and_hms(2026, 3, 1, 10, 30, 0).unwrap(),
//!     ),
//! ];
//! let packed = pack_events(&events, 300.0, 0).unwrap();
//!
//! // The overlapping pair splits the 250 px of usable width into two columns.
//! assert_eq!(packed[0].left, 50.0);
//! assert_eq!(packed[0].width, 125.0);
//! assert_eq!(packed[1].left, 175.0);
//! ```
//!
//! ## Modules
//!
//! - [`packer`] — column assignment, overlap grouping, width expansion
//! - [`timeline`] — hour labels, gridline offsets, now indicator, scroll
//! - [`geometry`] — pixel-scale parameters shared by both
//! - [`event`] — input records
//! - [`error`] — error types

pub mod error;
pub mod event;
pub mod geometry;
pub mod packer;
pub mod timeline;

pub use error::{LayoutError, Result};
pub use event::Event;
pub use geometry::Geometry;
pub use packer::{pack_events, pack_events_with, PackedEvent};
pub use timeline::{
    column_height, hour_label, hour_lines, initial_scroll_offset, now_indicator_offset, HourLine,
};
