//! Reading a timeline from a JSON tracking file
//!
//! The file shape is a single object with a `tracking_number` string and an
//! `updates` array of `[description, location, timestamp]` entries, oldest
//! first:
//!
//! ```json
//! {
//!   "tracking_number": "1Z4310X3YW25357495",
//!   "updates": [
//!     ["Package has left seller facility and is in transit to carrier", "N/A", 1515978000],
//!     ["Shipment arrived at Amazon facility", "Hebron, KENTUCKY US", 1516111440]
//!   ]
//! }
//! ```
//!
//! Every entry is fed through [`Timeline::append`], so the ordering
//! invariant is enforced here exactly as it is for direct callers. The
//! loader never sorts; an out-of-order entry fails the load.

use crate::timeline::Timeline;
use crate::types::{TimelineError, Timestamp};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Errors from loading a timeline out of a tracking file
///
/// All I/O and parse failure shapes collapse into [`LoadError::SourceInvalid`]
/// with a human-readable cause, so callers are decoupled from the underlying
/// serialization library. Ordering violations keep their own kind because
/// they are a property of the data, not of the file format.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file is unreadable or structurally malformed
    #[error("invalid tracking source: {0}")]
    SourceInvalid(String),

    /// The file parsed but its entries violate a timeline invariant
    #[error(transparent)]
    Timeline(#[from] TimelineError),
}

/// Raw file shape, before invariant checking
#[derive(Debug, Deserialize)]
struct TrackingFile {
    tracking_number: String,
    updates: Vec<(String, String, Timestamp)>,
}

/// Load a [`Timeline`] from a JSON tracking file
///
/// Either fully succeeds or returns an error; no partially populated
/// timeline is ever produced. An empty `updates` array is valid and yields
/// an empty timeline.
pub fn timeline_from_json(path: &Path) -> Result<Timeline, LoadError> {
    log::info!("loading tracking file: {:?}", path);

    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::SourceInvalid(format!("could not open {:?}: {}", path, e)))?;

    let file: TrackingFile = serde_json::from_str(&content)
        .map_err(|e| LoadError::SourceInvalid(format!("malformed tracking file: {}", e)))?;

    let mut timeline = Timeline::with_tracking_number(file.tracking_number);
    for (description, location, timestamp) in file.updates {
        timeline.append(description, location, timestamp)?;
    }

    log::info!(
        "loaded {} event(s) for {:?}",
        timeline.len(),
        timeline.tracking_number()
    );
    Ok(timeline)
}
