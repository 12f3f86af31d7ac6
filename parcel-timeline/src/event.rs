//! A single tracking event
//!
//! An [`Event`] is one occurrence in the delivery of a parcel: a description
//! such as "Out for delivery", a location such as "Fullerton, CA US", and a
//! Unix timestamp. Events are immutable value types; the timeline owns them
//! and hands out shared references only.

use crate::types::Timestamp;
use chrono::{DateTime, Utc};

/// One immutable tracking event (description, location, timestamp)
///
/// Field contents are not validated: empty strings and arbitrary timestamps,
/// including negative ones, are all legal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    description: String,
    location: String,
    timestamp: Timestamp,
}

impl Event {
    /// Create a new event. Never fails.
    pub fn new(
        description: impl Into<String>,
        location: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            description: description.into(),
            location: location.into(),
            timestamp,
        }
    }

    /// Event description, e.g. "Out for delivery"
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Event location, e.g. "Hebron, KENTUCKY US"
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Event time in seconds since the Unix epoch
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Convert the timestamp to `DateTime<Utc>`
    ///
    /// Returns `None` for timestamps outside chrono's representable range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Canonical one-line rendering of this event
    ///
    /// This is:
    ///  1. timestamp (decimal)
    ///  2. one space
    ///  3. description
    ///  4. one space
    ///  5. location
    ///  6. one newline
    ///
    /// Embedded whitespace in the fields is not escaped.
    pub fn render(&self) -> String {
        format!("{} {} {}\n", self.timestamp, self.description, self.location)
    }
}
