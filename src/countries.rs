//! Static country reference table: 2-letter code → full name + 3-letter code.
//!
//! The resource is the widely circulated `countries_codes_and_coordinates.csv`
//! in which the code columns are quoted with leading whitespace (` "AL"`).
//! Because the quote is not the first byte of the field, the CSV layer keeps
//! it as literal text; the loader strips quotes and whitespace from the code
//! columns before indexing, so lookups see bare codes like `AL`.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Canonical copy of the reference resource, compiled into the binary so a
/// fresh checkout needs no data files next to it.
const EMBEDDED_CSV: &str = include_str!("../assets/countries_codes_and_coordinates.csv");

/// One reference row as it appears in the file. The average-coordinate
/// columns exist in the resource but nothing downstream uses them.
#[derive(Debug, Deserialize)]
struct RawCountryRow {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Alpha-2 code")]
    alpha2: String,
    #[serde(rename = "Alpha-3 code")]
    alpha3: String,
    #[serde(rename = "Numeric code")]
    numeric: String,
}

/// One country after code normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub numeric: String,
}

/// Immutable lookup table indexed by Alpha-2 code.
#[derive(Debug, Clone)]
pub struct CountryTable {
    by_alpha2: HashMap<String, CountryRow>,
}

impl CountryTable {
    /// Load the copy of the resource shipped with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_reader(EMBEDDED_CSV.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("open country table {}", path.display()))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut by_alpha2 = HashMap::new();
        for row in rdr.deserialize() {
            let raw: RawCountryRow = row.context("parse country table row")?;
            let row = CountryRow {
                name: raw.country.trim().to_string(),
                alpha2: strip_code(&raw.alpha2),
                alpha3: strip_code(&raw.alpha3),
                numeric: strip_code(&raw.numeric),
            };
            by_alpha2.insert(row.alpha2.clone(), row);
        }
        if by_alpha2.is_empty() {
            bail!("country table is empty");
        }
        Ok(Self { by_alpha2 })
    }

    pub fn get(&self, alpha2: &str) -> Option<&CountryRow> {
        self.by_alpha2.get(alpha2)
    }

    pub fn len(&self) -> usize {
        self.by_alpha2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alpha2.is_empty()
    }
}

/// Remove the quote/whitespace noise the resource carries in its code
/// columns (` "AL"` → `AL`).
fn strip_code(s: &str) -> String {
    s.replace('"', "").trim().to_string()
}
