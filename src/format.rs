//! Duration and pace labels derived from stored fields.
//!
//! The stored `moving_time` is a formatted string (`"H:MM:SS"`, or
//! `"D days, H:MM:SS"` for multi-day entries), so everything here is
//! string parsing plus integer arithmetic.

use crate::error::{Error, Result};

fn malformed(value: &str, reason: &str) -> Error {
    Error::MovingTime {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Total seconds in a stored `moving_time` string.
///
/// Empty input is zero. With a `"D days, H:MM:SS"` prefix the last token
/// is taken and any fractional-second suffix after the first `.` is
/// dropped; the day count itself is discarded, matching what the
/// ingestion side has always stored. A bare `"H:MM:SS"` is used as-is,
/// so a fractional suffix on it fails to parse.
pub fn moving_time_secs(moving_time: &str) -> Result<u64> {
    if moving_time.is_empty() {
        return Ok(0);
    }

    let tokens: Vec<&str> = moving_time.split_whitespace().collect();
    let clock = if tokens.len() > 1 {
        let last = tokens[tokens.len() - 1];
        last.split('.').next().unwrap_or(last)
    } else {
        moving_time
    };

    let mut fields = clock.split(':');
    let (h, m, s) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(h), Some(m), Some(s), None) => (h, m, s),
        _ => return Err(malformed(moving_time, "expected H:MM:SS")),
    };

    let hours: u64 = h
        .trim()
        .parse()
        .map_err(|_| malformed(moving_time, "non-numeric hours"))?;
    let minutes: u64 = m
        .trim()
        .parse()
        .map_err(|_| malformed(moving_time, "non-numeric minutes"))?;
    let seconds: u64 = s
        .trim()
        .parse()
        .map_err(|_| malformed(moving_time, "non-numeric seconds"))?;

    Ok((hours * 60 + minutes) * 60 + seconds)
}

/// Coarse duration label: `"45s"` under a minute, `"30mins"` above.
///
/// The seconds component is dropped once minutes are non-zero; the label
/// is deliberately coarse since it ends up in a filename.
pub fn format_run_time(moving_time: &str) -> Result<String> {
    let total = moving_time_secs(moving_time)?;
    let minutes = total / 60;
    let seconds = total % 60;
    if minutes == 0 {
        Ok(format!("{seconds}s"))
    } else {
        Ok(format!("{minutes}mins"))
    }
}

/// Pace label in minutes per kilometer, `"5'00"` style.
///
/// A missing, zero or NaN speed yields the literal `"0"`. Minutes and
/// seconds are both truncated, never rounded, so the displayed pace is
/// always at or below the true pace.
pub fn format_pace(speed_m_per_s: Option<f64>) -> String {
    let speed = speed_m_per_s.unwrap_or(0.0);
    if speed == 0.0 || speed.is_nan() {
        return "0".to_string();
    }
    let pace = (1000.0 / 60.0) / speed;
    let minutes = pace as u64;
    let seconds = ((pace - minutes as f64) * 60.0) as u64;
    format!("{minutes}'{seconds:02}")
}
