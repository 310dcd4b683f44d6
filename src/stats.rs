use crate::models::EnrichedLanding;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-country summary of the enriched table. Masses are grams, taken from
/// rows whose `mass` column parses as a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountrySummary {
    pub country_iso3: String,
    pub country_name: String,
    pub count: usize,
    pub falls: usize,
    pub finds: usize,
    /// Rows without a usable mass value.
    pub mass_missing: usize,
    pub min_mass: Option<f64>,
    pub max_mass: Option<f64>,
    pub mean_mass: Option<f64>,
    pub median_mass: Option<f64>,
}

/// Group the enriched table by 3-letter country code.
pub fn by_country(rows: &[EnrichedLanding]) -> Vec<CountrySummary> {
    let mut masses: BTreeMap<(String, String), Vec<f64>> = BTreeMap::new();
    let mut counts: BTreeMap<(String, String), (usize, usize, usize, usize)> = BTreeMap::new();
    for r in rows {
        let key = (
            r.country.country_code_3.clone(),
            r.country.country_name.clone(),
        );
        let entry = counts.entry(key.clone()).or_default();
        entry.0 += 1;
        match r.landing.fall.as_deref() {
            Some("Fell") => entry.1 += 1,
            Some("Found") => entry.2 += 1,
            _ => {}
        }
        match r.landing.mass.as_deref().and_then(|m| m.trim().parse::<f64>().ok()) {
            Some(m) if m.is_finite() => masses.entry(key).or_default().push(m),
            _ => entry.3 += 1,
        }
    }

    let mut out = Vec::new();
    for ((iso3, name), (count, falls, finds, mass_missing)) in counts {
        let mut vals = masses.remove(&(iso3.clone(), name.clone())).unwrap_or_default();
        vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let n = vals.len();
        let min_mass = vals.first().cloned();
        let max_mass = vals.last().cloned();
        let mean_mass = if n > 0 {
            Some(vals.iter().copied().sum::<f64>() / n as f64)
        } else {
            None
        };
        let median_mass = if n == 0 {
            None
        } else if n % 2 == 1 {
            Some(vals[n / 2])
        } else {
            Some((vals[n / 2 - 1] + vals[n / 2]) / 2.0)
        };
        out.push(CountrySummary {
            country_iso3: iso3,
            country_name: name,
            count,
            falls,
            finds,
            mass_missing,
            min_mass,
            max_mass,
            mean_mass,
            median_mass,
        });
    }
    out
}
