use crate::models::EnrichedLanding;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save the enriched table as CSV with header.
pub fn save_csv<P: AsRef<Path>>(rows: &[EnrichedLanding], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((
        "name",
        "id",
        "nametype",
        "recclass",
        "mass",
        "fall",
        "year",
        "reclat",
        "reclong",
        "country_name",
        "country_code_2",
        "country_code_3",
        "admin1",
        "admin2",
    ))?;
    for r in rows {
        wtr.serialize((
            &r.landing.name,
            &r.landing.id,
            &r.landing.nametype,
            &r.landing.recclass,
            &r.landing.mass,
            &r.landing.fall,
            r.landing.year,
            r.landing.reclat,
            r.landing.reclong,
            &r.country.country_name,
            &r.country.country_code_2,
            &r.country.country_code_3,
            &r.country.admin1,
            &r.country.admin2,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the enriched table as a pretty JSON array (one flat object per row).
pub fn save_json<P: AsRef<Path>>(rows: &[EnrichedLanding], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
