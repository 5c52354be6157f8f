//! Route cards for stored running activities.
//!
//! Reads activity records (distance, duration, start date, average speed,
//! encoded route polyline) from a local SQLite database and renders each
//! run as a 600x600 SVG card: the GPS path traced as a line, overlaid with
//! the run's date, distance, duration and pace. One output file per record.
//!
//! The store is strictly read-only; rows are written by a separate
//! ingestion process.

pub mod activity;
pub mod error;
pub mod format;
pub mod render;
pub mod store;
pub mod svg;

pub use activity::Activity;
pub use error::{Error, Result};
pub use render::{RouteCard, render_card, write_card};
pub use store::ActivityStore;
