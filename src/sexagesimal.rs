//! Sexagesimal coordinate parsing.
//!
//! Pure, stateless string → decimal-degrees conversion for the two formats
//! found in astrometric catalogs:
//!
//! - **HMS (Hours-Minutes-Seconds)**: Right Ascension. 1 hour = 15 degrees.
//! - **DMS (Degrees-Minutes-Seconds)**: Declination and general angles.
//!
//! Both accept separated and packed notations:
//!
//! ```text
//! Colon-separated:  12:34:56.78
//! Space-separated:  12 34 56.78
//! Packed:           123456.78       (HHMMSS.ss / DDMMSS.s)
//! ```
//!
//! The packed form is what the Washington Double Star catalog stores in its
//! precise-coordinate column (`HHMMSS.ss±DDMMSS.s`). Signs are only valid
//! at the beginning of the string.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{MatchError, PairResult};

static SEPARATED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*([+-])?(\d{1,3})[:\s]+(\d{1,2})[:\s]+(\d{1,2}(?:\.\d+)?)\s*$"#).unwrap()
});

static PACKED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*([+-])?(\d{2})(\d{2})(\d{2}(?:\.\d+)?)\s*$"#).unwrap());

/// Parse an hours-minutes-seconds string as decimal degrees.
///
/// Accepts `12:34:56.78`, `12 34 56.78`, and packed `123456.78`.
/// The value is interpreted as hours (1h = 15 degrees), so `06:00:00`
/// parses to 90.0.
///
/// # Errors
/// Returns [`MatchError::Parse`] if the string matches no known format.
pub fn parse_hms_deg(s: &str) -> PairResult<f64> {
    let (sign, first, minutes, seconds) = capture_fields(s)?;
    let hours = sign * (first + minutes / 60.0 + seconds / 3600.0);
    Ok(hours * 15.0)
}

/// Parse a degrees-minutes-seconds string as decimal degrees.
///
/// Accepts `-45:30:15`, `-45 30 15`, and packed `-453015.0`.
///
/// # Errors
/// Returns [`MatchError::Parse`] if the string matches no known format.
pub fn parse_dms_deg(s: &str) -> PairResult<f64> {
    let (sign, degrees, minutes, seconds) = capture_fields(s)?;
    Ok(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

fn capture_fields(s: &str) -> PairResult<(f64, f64, f64, f64)> {
    let caps = SEPARATED_REGEX
        .captures(s)
        .or_else(|| PACKED_REGEX.captures(s))
        .ok_or_else(|| MatchError::parse(format!("'{}' is not a sexagesimal coordinate", s)))?;

    let sign = caps
        .get(1)
        .map_or(1.0, |m| if m.as_str() == "-" { -1.0 } else { 1.0 });
    // Captures 2-4 are digit-only by construction
    let first: f64 = caps[2].parse().unwrap();
    let minutes: f64 = caps[3].parse().unwrap();
    let seconds: f64 = caps[4].parse().unwrap();

    Ok((sign, first, minutes, seconds))
}
