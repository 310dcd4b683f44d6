//! Country enrichment: one bulk reverse-geocoding pass over the cleaned
//! table, joined against the static country reference table.
//!
//! The join is positional, not keyed: hit *i* belongs to row *i* of the
//! input. Coordinates are extracted in row order, the geocoder contract
//! demands order-preserving output, and rows are reassembled with `zip`, so
//! nothing between extraction and assembly can reorder.

use crate::countries::CountryTable;
use crate::geocode::ReverseGeocode;
use crate::models::{CountryInfo, EnrichedLanding, Landing};
use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    /// The geocoder produced a country code the reference table does not
    /// know. Deliberately fatal: inventing an "Unknown country" row would
    /// hide bad data, so the caller decides.
    #[error("country code {cc:?} not present in the reference table")]
    UnknownCountry { cc: String },
    /// The geocoder broke its one-hit-per-input contract.
    #[error("geocoder returned {got} results for {expected} coordinates")]
    ResultCountMismatch { expected: usize, got: usize },
}

/// Append country columns to every row.
///
/// All input rows and columns survive unchanged; output row *i* is input
/// row *i* plus the country data for its coordinates.
pub fn enrich<G>(
    landings: Vec<Landing>,
    geocoder: &G,
    countries: &CountryTable,
) -> Result<Vec<EnrichedLanding>, EnrichError>
where
    G: ReverseGeocode + ?Sized,
{
    let coords: Vec<(f64, f64)> = landings.iter().map(|l| (l.reclat, l.reclong)).collect();
    let hits = geocoder.search_many(&coords);
    if hits.len() != coords.len() {
        return Err(EnrichError::ResultCountMismatch {
            expected: coords.len(),
            got: hits.len(),
        });
    }

    let mut out = Vec::with_capacity(landings.len());
    for (landing, hit) in landings.into_iter().zip(hits) {
        let row = countries
            .get(&hit.cc)
            .ok_or_else(|| EnrichError::UnknownCountry { cc: hit.cc.clone() })?;
        out.push(EnrichedLanding {
            landing,
            country: CountryInfo {
                country_name: row.name.clone(),
                country_code_2: hit.cc,
                country_code_3: row.alpha3.clone(),
                admin1: hit.admin1,
                admin2: hit.admin2,
            },
        });
    }

    info!("Added country data to the dataset.");
    Ok(out)
}
