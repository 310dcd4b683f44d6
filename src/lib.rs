//! meteorite_landings
//!
//! A lightweight Rust library for retrieving, cleaning, and country-enriching
//! the NASA meteorite-landings dataset. Pairs with the `meteorites` CLI.
//!
//! ### Pipeline
//! - Fetch every record from the `gh4g-9sfh` Socrata catalog on
//!   `data.nasa.gov` (paged, order-preserving)
//! - Drop source-specific columns, coerce coordinates, filter rows with
//!   missing or out-of-range coordinates (counted and logged)
//! - Reverse-geocode every surviving coordinate pair offline and append
//!   country name, ISO codes, and administrative-region columns
//!
//! ### Example
//! ```no_run
//! use meteorite_landings::{clean, enrich, Client, CountryTable, OfflineGeocoder};
//!
//! let client = Client::new(std::env::var("APP_TOKEN").ok());
//! let raw = client.fetch_all()?;
//! let (landings, summary) = clean::clean(raw)?;
//! assert_eq!(summary.fetched, summary.missing + summary.invalid + summary.kept);
//!
//! let countries = CountryTable::embedded()?;
//! let geocoder = OfflineGeocoder::new();
//! let table = enrich::enrich(landings, &geocoder, &countries)?;
//! meteorite_landings::storage::save_csv(&table, "meteorites.csv")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod clean;
pub mod countries;
pub mod enrich;
pub mod geocode;
pub mod models;
pub mod stats;
pub mod storage;

pub use api::Client;
pub use countries::CountryTable;
pub use geocode::{GeoHit, OfflineGeocoder, ReverseGeocode};
pub use models::{EnrichedLanding, Landing, RawLanding};
