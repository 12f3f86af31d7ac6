//! Parcel Timeline Library
//!
//! A small, synchronous library for tracking the chronological history of a
//! shipped parcel and navigating it with a cursor.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on the event history:
//! - Holds tracking events in guaranteed chronological order
//! - Enforces non-decreasing timestamps at the single insertion point
//! - Navigates the history with a bidirectional cursor
//! - Answers "what happened before/from here" as concatenated renders
//! - Loads a timeline from a JSON tracking file
//!
//! The library does NOT:
//! - Parse command-line arguments or choose exit codes
//! - Print to the console (it only logs through the `log` facade)
//! - Persist timelines back to disk
//! - Support deleting or reordering events
//!
//! All presentation concerns are in the application layer (parcel-track-cli).
//!
//! # Example Usage
//!
//! ```
//! use parcel_timeline::Timeline;
//!
//! let mut timeline = Timeline::with_tracking_number("1Z4310X3YW25357495");
//! timeline.append("Out for delivery", "Fullerton, CA US", 1516468200).unwrap();
//! timeline.append("Delivered", "Fullerton, CA US", 1516470000).unwrap();
//!
//! // cursor starts on the first event
//! assert_eq!(timeline.describe_previous().unwrap(), "");
//! assert!(timeline.move_cursor_forward());
//! assert_eq!(
//!     timeline.describe_previous().unwrap(),
//!     "1516468200 Out for delivery Fullerton, CA US\n"
//! );
//! ```

// Public modules
pub mod event;
pub mod serialize;
pub mod timeline;
pub mod types;

// Re-export main types for convenience
pub use event::Event;
pub use serialize::{timeline_from_json, LoadError};
pub use timeline::Timeline;
pub use types::{Result, Timestamp, TimelineError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
