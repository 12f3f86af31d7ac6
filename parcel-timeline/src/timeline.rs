//! The ordered event history of one parcel
//!
//! A [`Timeline`] holds every tracking event for a single parcel in
//! chronological order (oldest to newest), plus a *cursor* pointing at one
//! event. While the timeline is empty the cursor is absent. The first append
//! places the cursor on that event; afterwards the cursor only moves through
//! explicit forward/backward navigation, never because of an append.
//!
//! The cursor is a plain index into a contiguous sequence, so appends can
//! never invalidate it: events before the cursor are untouched and the index
//! keeps designating the same event.

use crate::event::Event;
use crate::types::{Result, TimelineError, Timestamp};

/// The entire sequence of tracking events for one parcel
///
/// Carries the tracking number (an opaque label, not validated), the events
/// in chronological order, and the cursor. Appends maintain the ordering
/// invariant: each new event's timestamp must be greater than or equal to
/// the last event's. Equal timestamps are allowed because mail-handling
/// equipment sometimes generates two events in the same second.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    tracking_number: String,
    events: Vec<Event>,
    /// `Some(index)` iff `events` is non-empty; index always in `[0, len)`
    cursor: Option<usize>,
}

impl Timeline {
    /// Create an empty timeline with an empty tracking number
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty timeline with the given tracking number
    pub fn with_tracking_number(tracking_number: impl Into<String>) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            events: Vec::new(),
            cursor: None,
        }
    }

    /// The tracking number, e.g. "1Z4310X3YW25357495"
    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the timeline has no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events, oldest to newest
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Append an event with the given description, location, and timestamp
    ///
    /// Events must arrive in chronological order: if the timeline is not
    /// empty, `timestamp` must be greater than or equal to the last event's
    /// timestamp. A rejected append leaves the timeline completely
    /// unchanged and returns [`TimelineError::OutOfOrderTimestamp`].
    ///
    /// The first successful append moves the cursor to that new event.
    /// Later appends never move the cursor.
    pub fn append(
        &mut self,
        description: impl Into<String>,
        location: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<()> {
        // Comparing against the last event alone is enough: the sequence is
        // sorted by construction, so the last timestamp is the maximum.
        if let Some(last) = self.events.last() {
            if timestamp < last.timestamp() {
                return Err(TimelineError::OutOfOrderTimestamp {
                    last: last.timestamp(),
                    new: timestamp,
                });
            }
        }

        let event = Event::new(description, location, timestamp);
        log::debug!(
            "appending event at {} for {:?}",
            event.timestamp(),
            self.tracking_number
        );
        self.events.push(event);

        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
        Ok(())
    }

    /// Attempt to move the cursor one step backward (toward older events)
    ///
    /// Returns false without effect if the timeline is empty or the cursor
    /// is already on the first event.
    pub fn move_cursor_backward(&mut self) -> bool {
        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Attempt to move the cursor one step forward (toward newer events)
    ///
    /// Returns false without effect if the timeline is empty or the cursor
    /// is already on the last event.
    pub fn move_cursor_forward(&mut self) -> bool {
        match self.cursor {
            Some(index) if index + 1 < self.events.len() => {
                self.cursor = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    /// The event the cursor is pointing at
    ///
    /// Returns [`TimelineError::EmptyTimeline`] if the timeline is empty.
    pub fn current(&self) -> Result<&Event> {
        let index = self.cursor.ok_or(TimelineError::EmptyTimeline)?;
        Ok(&self.events[index])
    }

    /// Render of the event the cursor is pointing at
    ///
    /// Returns [`TimelineError::EmptyTimeline`] if the timeline is empty.
    pub fn describe_current(&self) -> Result<String> {
        Ok(self.current()?.render())
    }

    /// Renders of all events strictly before the cursor, oldest first
    ///
    /// The cursor event itself is not included, so this is `""` while the
    /// cursor is on the first event. Returns
    /// [`TimelineError::EmptyTimeline`] if the timeline is empty.
    pub fn describe_previous(&self) -> Result<String> {
        let index = self.cursor.ok_or(TimelineError::EmptyTimeline)?;
        Ok(Self::concat_renders(&self.events[..index]))
    }

    /// Renders of the cursor event and all later events, oldest first
    ///
    /// Returns [`TimelineError::EmptyTimeline`] if the timeline is empty.
    pub fn describe_following(&self) -> Result<String> {
        let index = self.cursor.ok_or(TimelineError::EmptyTimeline)?;
        Ok(Self::concat_renders(&self.events[index..]))
    }

    /// Renders of every event, oldest first
    ///
    /// The timeline may be empty; if so this returns `""` rather than an
    /// error.
    pub fn describe_all(&self) -> String {
        Self::concat_renders(&self.events)
    }

    fn concat_renders(events: &[Event]) -> String {
        events.iter().map(Event::render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_event_timeline() -> Timeline {
        let mut timeline = Timeline::with_tracking_number("1Z4310X3YW25357495");
        timeline
            .append(
                "Package has left seller facility and is in transit to carrier",
                "N/A",
                1515978000,
            )
            .unwrap();
        timeline
            .append(
                "Shipment arrived at Amazon facility",
                "Hebron, KENTUCKY US",
                1516111440,
            )
            .unwrap();
        timeline
            .append(
                "Shipment departed from Amazon facility",
                "Hebron, KENTUCKY US",
                1516188120,
            )
            .unwrap();
        timeline
    }

    const RENDER_1: &str =
        "1515978000 Package has left seller facility and is in transit to carrier N/A\n";
    const RENDER_2: &str = "1516111440 Shipment arrived at Amazon facility Hebron, KENTUCKY US\n";
    const RENDER_3: &str = "1516188120 Shipment departed from Amazon facility Hebron, KENTUCKY US\n";

    #[test]
    fn test_constructors() {
        let deflt = Timeline::new();
        assert_eq!(deflt.tracking_number(), "");
        assert_eq!(deflt.len(), 0);
        assert!(deflt.is_empty());

        let init = Timeline::with_tracking_number("Z123");
        assert_eq!(init.tracking_number(), "Z123");
        assert_eq!(init.len(), 0);
        assert!(init.is_empty());
    }

    #[test]
    fn test_append_in_order() {
        let mut timeline = Timeline::with_tracking_number("Z123");

        timeline.append("d1", "l1", 100).unwrap();
        assert_eq!(timeline.len(), 1);
        assert!(!timeline.is_empty());
        // cursor is now at the just-added event
        assert_eq!(timeline.current().unwrap().description(), "d1");

        timeline.append("d2", "l2", 200).unwrap();
        assert_eq!(timeline.len(), 2);
        // cursor hasn't moved and is still on the first event
        assert_eq!(timeline.current().unwrap().description(), "d1");

        timeline.append("d3", "l3", 300).unwrap();
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.current().unwrap().description(), "d1");
    }

    #[test]
    fn test_append_out_of_order_is_rejected_without_mutation() {
        let mut timeline = Timeline::with_tracking_number("Z123");
        timeline.append("d1", "l1", 100).unwrap();
        timeline.append("d2", "l2", 200).unwrap();
        timeline.append("d3", "l3", 300).unwrap();
        assert!(timeline.move_cursor_forward());

        let before = timeline.clone();
        let err = timeline.append("d4", "l4", 299).unwrap_err();
        assert_eq!(
            err,
            TimelineError::OutOfOrderTimestamp { last: 300, new: 299 }
        );

        // size, events, and cursor are all untouched
        assert_eq!(timeline, before);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.current().unwrap().description(), "d2");
    }

    #[test]
    fn test_append_equal_timestamp_is_accepted() {
        // same-second scan events are legitimate
        let mut timeline = Timeline::new();
        timeline.append("d1", "l1", 100).unwrap();
        timeline.append("d2", "l2", 100).unwrap();
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_append_negative_timestamps() {
        let mut timeline = Timeline::new();
        timeline.append("d1", "l1", -100).unwrap();
        timeline.append("d2", "l2", -50).unwrap();
        assert_eq!(timeline.len(), 2);
        assert!(timeline.append("d3", "l3", -51).is_err());
    }

    #[test]
    fn test_cursor_motion_on_empty() {
        let mut empty = Timeline::new();
        assert!(!empty.move_cursor_backward());
        assert!(!empty.move_cursor_backward());
        assert!(!empty.move_cursor_forward());
        assert!(!empty.move_cursor_forward());
        assert_eq!(empty.current().unwrap_err(), TimelineError::EmptyTimeline);
    }

    #[test]
    fn test_cursor_motion_single_event() {
        let mut timeline = Timeline::new();
        timeline.append("d1", "l1", 1515978000).unwrap();
        assert_eq!(timeline.current().unwrap().timestamp(), 1515978000);

        // move backward, still at the only event
        assert!(!timeline.move_cursor_backward());
        assert_eq!(timeline.current().unwrap().timestamp(), 1515978000);
        // move forward, still at the only event
        assert!(!timeline.move_cursor_forward());
        assert_eq!(timeline.current().unwrap().timestamp(), 1515978000);
    }

    #[test]
    fn test_cursor_motion_walks_both_ways() {
        let mut timeline = three_event_timeline();
        assert_eq!(timeline.current().unwrap().timestamp(), 1515978000);

        // move backward, still at the first
        assert!(!timeline.move_cursor_backward());
        assert_eq!(timeline.current().unwrap().timestamp(), 1515978000);
        // forward to the second event
        assert!(timeline.move_cursor_forward());
        assert_eq!(timeline.current().unwrap().timestamp(), 1516111440);
        // forward to the third event
        assert!(timeline.move_cursor_forward());
        assert_eq!(timeline.current().unwrap().timestamp(), 1516188120);
        // move forward, still at the third
        assert!(!timeline.move_cursor_forward());
        assert_eq!(timeline.current().unwrap().timestamp(), 1516188120);
        // backward to the second event
        assert!(timeline.move_cursor_backward());
        assert_eq!(timeline.current().unwrap().timestamp(), 1516111440);
        // backward to the first event
        assert!(timeline.move_cursor_backward());
        assert_eq!(timeline.current().unwrap().timestamp(), 1515978000);
        // move backward, still at the first
        assert!(!timeline.move_cursor_backward());
        assert_eq!(timeline.current().unwrap().timestamp(), 1515978000);
    }

    #[test]
    fn test_describe_on_empty() {
        let empty = Timeline::new();
        assert_eq!(
            empty.describe_previous().unwrap_err(),
            TimelineError::EmptyTimeline
        );
        assert_eq!(
            empty.describe_following().unwrap_err(),
            TimelineError::EmptyTimeline
        );
        assert_eq!(
            empty.describe_current().unwrap_err(),
            TimelineError::EmptyTimeline
        );
        // describe_all tolerates emptiness
        assert_eq!(empty.describe_all(), "");
    }

    #[test]
    fn test_describe_single_event() {
        let mut timeline = Timeline::new();
        timeline
            .append(
                "Package has left seller facility and is in transit to carrier",
                "N/A",
                1515978000,
            )
            .unwrap();
        assert_eq!(timeline.describe_previous().unwrap(), "");
        assert_eq!(timeline.describe_following().unwrap(), RENDER_1);
        assert_eq!(timeline.describe_all(), RENDER_1);
    }

    #[test]
    fn test_describe_partitions_follow_the_cursor() {
        let mut timeline = three_event_timeline();
        let all = format!("{RENDER_1}{RENDER_2}{RENDER_3}");

        // cursor on first event
        assert_eq!(timeline.describe_previous().unwrap(), "");
        assert_eq!(timeline.describe_following().unwrap(), all);
        assert_eq!(timeline.describe_all(), all);

        // cursor on second event
        assert!(timeline.move_cursor_forward());
        assert_eq!(timeline.describe_previous().unwrap(), RENDER_1);
        assert_eq!(
            timeline.describe_following().unwrap(),
            format!("{RENDER_2}{RENDER_3}")
        );
        assert_eq!(timeline.describe_all(), all);

        // cursor on third event
        assert!(timeline.move_cursor_forward());
        assert_eq!(
            timeline.describe_previous().unwrap(),
            format!("{RENDER_1}{RENDER_2}")
        );
        assert_eq!(timeline.describe_following().unwrap(), RENDER_3);
        assert_eq!(timeline.describe_all(), all);
    }

    #[test]
    fn test_previous_plus_following_equals_all() {
        let mut timeline = three_event_timeline();
        loop {
            let combined = format!(
                "{}{}",
                timeline.describe_previous().unwrap(),
                timeline.describe_following().unwrap()
            );
            assert_eq!(combined, timeline.describe_all());
            // describe_following always starts with the cursor render
            assert!(timeline
                .describe_following()
                .unwrap()
                .starts_with(&timeline.describe_current().unwrap()));
            if !timeline.move_cursor_forward() {
                break;
            }
        }
    }
}
