use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw landing record as returned by the Socrata API.
///
/// Every field arrives as an optional string; absent columns are simply
/// missing from the JSON object. The embedded `geolocation` value and the
/// two portal-computed region columns are carried here only so that the
/// cleaning step can drop them explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawLanding {
    pub name: Option<String>,
    pub id: Option<String>,
    pub nametype: Option<String>,
    pub recclass: Option<String>,
    pub mass: Option<String>,
    pub fall: Option<String>,
    /// Socrata floating timestamp, e.g. `"1880-01-01T00:00:00.000"`.
    pub year: Option<String>,
    pub reclat: Option<String>,
    pub reclong: Option<String>,
    pub geolocation: Option<Value>,
    #[serde(rename = ":@computed_region_cbhk_fwbd")]
    pub computed_region_cbhk_fwbd: Option<String>,
    #[serde(rename = ":@computed_region_nnqa_25f4")]
    pub computed_region_nnqa_25f4: Option<String>,
}

/// Cleaned landing record (one row = one meteorite find/fall).
///
/// Coordinates are plain `f64` on purpose: a `Landing` only exists after the
/// cleaning step has proven both values present, finite, and inside
/// [-90, 90] / [-180, 180].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Landing {
    pub name: Option<String>,
    pub id: Option<String>,
    pub nametype: Option<String>,
    pub recclass: Option<String>,
    /// Mass in grams, as reported by the catalog.
    pub mass: Option<String>,
    pub fall: Option<String>,
    pub year: Option<i32>,
    pub reclat: f64,
    pub reclong: f64,
}

impl Landing {
    /// Build a cleaned record from a raw one plus its validated coordinates.
    /// Drops `geolocation` and the computed-region columns.
    pub fn from_raw(raw: RawLanding, reclat: f64, reclong: f64) -> Self {
        let year = raw.year.as_deref().and_then(parse_year);
        Self {
            name: raw.name,
            id: raw.id,
            nametype: raw.nametype,
            recclass: raw.recclass,
            mass: raw.mass,
            fall: raw.fall,
            year,
            reclat,
            reclong,
        }
    }
}

/// Parse the year out of a Socrata floating timestamp. Malformed values
/// yield `None` rather than an error; the year is descriptive, not a key.
fn parse_year(s: &str) -> Option<i32> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.year())
        .ok()
}

/// Country columns appended by the enrichment step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryInfo {
    pub country_name: String,
    pub country_code_2: String,
    pub country_code_3: String,
    pub admin1: String,
    pub admin2: String,
}

/// Final table row: the cleaned record with its country columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedLanding {
    #[serde(flatten)]
    pub landing: Landing,
    #[serde(flatten)]
    pub country: CountryInfo,
}
