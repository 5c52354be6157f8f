//! Route card rendering.
//!
//! Decodes the stored summary polyline, projects it through web mercator
//! fitted to the route bounds, and composes a fixed 600x600 SVG with the
//! run's date, duration, distance and pace overlaid.

use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use geo::LineString;
use log::debug;

use crate::activity::Activity;
use crate::error::{Error, Result};
use crate::format::{format_pace, format_run_time};
use crate::svg::SvgBuilder;

/// Canvas edge in SVG user units.
pub const CANVAS_SIZE: u32 = 600;

/// Gap between the route bounds and the canvas edge.
const PADDING: f64 = 40.0;

/// Route stroke, Strava orange.
const ROUTE_COLOR: &str = "#fc4c02";
const ROUTE_WIDTH: f64 = 4.0;

const TEXT_COLOR: &str = "black";
const DATE_FONT_SIZE: u32 = 20;
const STAT_FONT_SIZE: u32 = 30;

/// Baseline of the stat labels near the bottom edge.
const STAT_BAND_Y: f64 = 560.0;

/// A fully composed card, not yet written to disk.
#[derive(Debug)]
pub struct RouteCard {
    /// Filename stem, `{YYYYMMDD}_{km}km_{duration}`
    pub stem: String,
    /// Pretty-printed SVG document
    pub svg: String,
}

/// Decode a stored summary polyline (Google encoding, precision 5).
pub fn decode_route(encoded: &str) -> Result<LineString<f64>> {
    polyline::decode_polyline(encoded, 5).map_err(|e| Error::Decode(e.to_string()))
}

/// Longitude to web-mercator x, world coordinates in [0, 1).
fn mercator_x(lon: f64) -> f64 {
    (lon + 180.0) / 360.0
}

/// Latitude to web-mercator y, world coordinates in [0, 1).
fn mercator_y(lat: f64) -> f64 {
    let lat_rad = lat.to_radians();
    (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0
}

/// Project a route onto the canvas: mercator, then a uniform scale fitted
/// to the route bounds, centered with [`PADDING`] on the long axis.
fn project(route: &LineString<f64>) -> Vec<(f64, f64)> {
    // geo stores (x, y) = (lng, lat)
    let world: Vec<(f64, f64)> = route
        .coords()
        .map(|c| (mercator_x(c.x), mercator_y(c.y)))
        .collect();

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(x, y) in &world {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let inner = CANVAS_SIZE as f64 - 2.0 * PADDING;
    let span = (max_x - min_x).max(max_y - min_y);
    // A single-point route collapses to the canvas center.
    let scale = if span > 0.0 { inner / span } else { 0.0 };
    let off_x = PADDING + (inner - (max_x - min_x) * scale) / 2.0;
    let off_y = PADDING + (inner - (max_y - min_y) * scale) / 2.0;

    world
        .into_iter()
        .map(|(x, y)| (off_x + (x - min_x) * scale, off_y + (y - min_y) * scale))
        .collect()
}

/// Compose the card for one activity.
///
/// Returns `Ok(None)` for incomplete records (missing date, duration or
/// distance). The polyline is decoded before the completeness check, so an
/// invalid encoding is fatal even on a record that would be skipped.
pub fn render_card(activity: &Activity) -> Result<Option<RouteCard>> {
    let route = decode_route(&activity.summary_polyline)?;
    if !activity.is_complete() {
        debug!("skipping incomplete activity {}", activity.id);
        return Ok(None);
    }

    let mut svg = SvgBuilder::new(CANVAS_SIZE, CANVAS_SIZE);
    svg.background("white");
    svg.polyline(&project(&route), ROUTE_COLOR, ROUTE_WIDTH);

    let date_label = activity
        .start_date
        .get(..16)
        .unwrap_or(&activity.start_date);
    let distance_label = format!("{:.1}", activity.distance / 1000.0);
    let duration = format_run_time(&activity.moving_time)?;
    let pace = format_pace(activity.average_speed);

    let center = CANVAS_SIZE as f64 / 2.0;
    svg.text(
        center,
        50.0,
        date_label,
        DATE_FONT_SIZE,
        "bold",
        TEXT_COLOR,
        "middle",
    );
    let stats = [
        (format!("⏱ {duration}"), 100.0),
        (format!("{distance_label} 公里"), 300.0),
        (format!("⌚ {pace}"), 500.0),
    ];
    for (label, x) in &stats {
        svg.text(
            *x,
            STAT_BAND_Y,
            label,
            STAT_FONT_SIZE,
            "bold",
            TEXT_COLOR,
            "middle",
        );
    }

    let date_compact = activity
        .start_date
        .get(..10)
        .unwrap_or(&activity.start_date)
        .replace('-', "");
    let stem = format!("{date_compact}_{distance_label}km_{duration}");

    Ok(Some(RouteCard {
        stem,
        svg: svg.build(),
    }))
}

/// Write a card as `{stem}.svg` under `dir`, overwriting any existing file.
pub fn write_card(card: &RouteCard, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.svg", card.stem));
    fs::write(&path, &card.svg)?;
    Ok(path)
}
