//! Offline reverse geocoding behind a trait seam.
//!
//! Production lookups go through the `reverse_geocoder` crate, which ships
//! a GeoNames populated-places index and answers nearest-city queries fully
//! offline. The trait exists so enrichment can be exercised against small
//! scripted geocoders in tests.

use reverse_geocoder::ReverseGeocoder;

/// One reverse-geocoding hit: the nearest place's country code and the two
/// administrative-region names, coarse (`admin1`) and fine (`admin2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoHit {
    pub cc: String,
    pub admin1: String,
    pub admin2: String,
}

/// Bulk nearest-match reverse geocoding.
///
/// Implementations must return exactly one hit per input pair, in input
/// order; the enrichment join is positional.
pub trait ReverseGeocode {
    fn search_many(&self, coords: &[(f64, f64)]) -> Vec<GeoHit>;
}

/// Geocoder backed by the embedded GeoNames index. Construction parses the
/// bundled place list, so build it once and reuse it.
pub struct OfflineGeocoder {
    inner: ReverseGeocoder,
}

impl OfflineGeocoder {
    pub fn new() -> Self {
        Self {
            inner: ReverseGeocoder::new(),
        }
    }
}

impl Default for OfflineGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReverseGeocode for OfflineGeocoder {
    fn search_many(&self, coords: &[(f64, f64)]) -> Vec<GeoHit> {
        coords
            .iter()
            .map(|&(lat, lon)| {
                let result = self.inner.search((lat, lon));
                GeoHit {
                    cc: result.record.cc.clone(),
                    admin1: result.record.admin1.clone(),
                    admin2: result.record.admin2.clone(),
                }
            })
            .collect()
    }
}
