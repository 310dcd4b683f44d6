//! Coordinate cleaning: column drops, numeric coercion, and the two
//! data-quality filters (missing coordinates, out-of-range coordinates).
//!
//! Filter order matters for the reported counts: the missing-value filter
//! runs first, so range statistics only cover rows that actually carry a
//! coordinate pair. Every input row lands in exactly one bucket:
//! `missing + invalid + kept == fetched`.

use crate::models::{Landing, RawLanding};
use log::info;
use thiserror::Error;

/// Fatal cleaning failure. Missing coordinates are not errors (they are
/// counted and filtered); a present-but-unparseable coordinate is.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("cannot convert {field} value {value:?} to a number")]
    Coordinate {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Row counts for one cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    pub fetched: usize,
    /// Rows dropped for a missing (or NaN) latitude/longitude.
    pub missing: usize,
    /// Rows dropped for coordinates outside [-90, 90] / [-180, 180].
    pub invalid: usize,
    pub kept: usize,
}

/// Clean a fetched table.
///
/// Steps, in order: drop the raw `geolocation` and computed-region columns,
/// coerce `reclat`/`reclong` to floats (fatal on unparseable values), drop
/// rows missing either coordinate, drop rows with out-of-range coordinates
/// (inclusive bounds — exactly ±90/±180 is valid), then report the counts.
pub fn clean(rows: Vec<RawLanding>) -> Result<(Vec<Landing>, CleanSummary), CleanError> {
    let fetched = rows.len();

    // Coercion pass: any unparseable value aborts the run.
    let mut coerced: Vec<(RawLanding, Option<f64>, Option<f64>)> = Vec::with_capacity(fetched);
    for row in rows {
        let lat = parse_coord("reclat", row.reclat.as_deref())?;
        let lon = parse_coord("reclong", row.reclong.as_deref())?;
        coerced.push((row, lat, lon));
    }

    // Missing-value filter. NaN counts as missing, same as null.
    let with_coords: Vec<(RawLanding, f64, f64)> = coerced
        .into_iter()
        .filter_map(|(row, lat, lon)| match (lat, lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some((row, lat, lon))
            }
            _ => None,
        })
        .collect();
    let missing = fetched - with_coords.len();

    // Range filter over the survivors, inclusive bounds.
    let candidates = with_coords.len();
    let kept: Vec<Landing> = with_coords
        .into_iter()
        .filter(|&(_, lat, lon)| (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon))
        .map(|(row, lat, lon)| Landing::from_raw(row, lat, lon))
        .collect();
    let invalid = candidates - kept.len();

    info!("Dropped {} missing locations.", missing);
    info!("Dropped {} invalid locations.", invalid);
    info!("Total valid entries: {}", kept.len());

    let summary = CleanSummary {
        fetched,
        missing,
        invalid,
        kept: kept.len(),
    };
    Ok((kept, summary))
}

fn parse_coord(field: &'static str, value: Option<&str>) -> Result<Option<f64>, CleanError> {
    match value {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|source| CleanError::Coordinate {
                field,
                value: s.to_string(),
                source,
            }),
    }
}
