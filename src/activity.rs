//! Stored activity record.
//!
//! A plain data container mapped to and from the `activities` table by the
//! store layer. The ingestion side that writes these rows is a separate
//! process; this crate only ever reads them.

use serde::{Deserialize, Serialize};

/// One stored run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Row id, assigned monotonically at insertion
    pub id: i64,
    /// Distance in meters
    pub distance: f64,
    /// Formatted duration, `"H:MM:SS"` or `"D days, H:MM:SS"`
    pub moving_time: String,
    /// ISO-like timestamp; the first 10 chars are the date,
    /// the first 16 the date plus time to the minute
    pub start_date: String,
    /// Route as a Google encoded polyline (precision 5)
    pub summary_polyline: String,
    /// Average speed in m/s (may be missing or zero)
    pub average_speed: Option<f64>,
}

impl Activity {
    /// Whether the record carries enough data to be rendered.
    ///
    /// Date, duration and a non-zero distance are required; a missing
    /// average speed only degrades the pace label.
    pub fn is_complete(&self) -> bool {
        !self.start_date.is_empty() && !self.moving_time.is_empty() && self.distance != 0.0
    }
}
