//! Error types for layout operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while computing a day layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// An input event whose end does not come after its start.
    /// Carries the event's position in the input slice so the caller can
    /// tell which record is broken; the whole call fails rather than
    /// dropping the event, which would desynchronize the index mapping.
    #[error("invalid event at index {index}: end {end} is not after start {start}")]
    InvalidEvent {
        index: usize,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// The total column width was zero, negative, or not finite.
    #[error("invalid column width: {0}")]
    InvalidWidth(f64),
}

/// Convenience alias used throughout daygrid.
pub type Result<T> = std::result::Result<T, LayoutError>;
