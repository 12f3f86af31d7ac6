//! Core types for the parcel timeline library
//!
//! This module defines the timestamp alias and the error kinds the timeline
//! signals. Errors are distinct variants so callers can branch on the kind
//! without matching message strings.

/// Timestamp type used throughout the library: seconds since the Unix epoch.
///
/// Negative values are legal (events before 1970 are not validated away).
pub type Timestamp = i64;

/// Result type for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Errors signaled by the timeline itself
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    /// An append was rejected because its timestamp precedes the timestamp
    /// of the current last event. The timeline is left unchanged.
    #[error("out-of-order timestamp: {new} precedes last event at {last}")]
    OutOfOrderTimestamp {
        /// Timestamp of the current last event
        last: Timestamp,
        /// Timestamp of the rejected event
        new: Timestamp,
    },

    /// A cursor or describe query was called on a timeline with no events
    #[error("timeline has no events")]
    EmptyTimeline,
}
