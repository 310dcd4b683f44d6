use meteorite_landings::countries::CountryTable;
use meteorite_landings::enrich::{EnrichError, enrich};
use meteorite_landings::geocode::{GeoHit, ReverseGeocode};
use meteorite_landings::models::Landing;

/// Geocoder that replays a fixed script, one hit per coordinate, in order.
struct ScriptedGeocoder {
    hits: Vec<GeoHit>,
}

impl ReverseGeocode for ScriptedGeocoder {
    fn search_many(&self, coords: &[(f64, f64)]) -> Vec<GeoHit> {
        assert_eq!(coords.len(), self.hits.len(), "script length mismatch");
        self.hits.clone()
    }
}

/// Geocoder that violates the one-hit-per-input contract.
struct TruncatingGeocoder;

impl ReverseGeocode for TruncatingGeocoder {
    fn search_many(&self, coords: &[(f64, f64)]) -> Vec<GeoHit> {
        coords
            .iter()
            .skip(1)
            .map(|_| hit("DE", "Hesse", ""))
            .collect()
    }
}

fn hit(cc: &str, admin1: &str, admin2: &str) -> GeoHit {
    GeoHit {
        cc: cc.into(),
        admin1: admin1.into(),
        admin2: admin2.into(),
    }
}

fn landing(name: &str, lat: f64, lon: f64) -> Landing {
    Landing {
        name: Some(name.into()),
        id: None,
        nametype: Some("Valid".into()),
        recclass: None,
        mass: None,
        fall: Some("Found".into()),
        year: None,
        reclat: lat,
        reclong: lon,
    }
}

/// A reference table restricted to three countries, in the resource's
/// quoted-with-leading-space format.
fn restricted_table() -> CountryTable {
    let csv = "\
Country, Alpha-2 code, Alpha-3 code, Numeric code, Latitude (average), Longitude (average)
Germany, \"DE\", \"DEU\", \"276\", 51, 9
United States, \"US\", \"USA\", \"840\", 38, -97
Austria, \"AT\", \"AUT\", \"40\", 47.3333, 13.3333
";
    CountryTable::from_reader(csv.as_bytes()).unwrap()
}

#[test]
fn hit_i_is_joined_onto_row_i() {
    let landings = vec![
        landing("a", 50.77, 6.08),
        landing("b", 40.78, -73.97),
        landing("c", 47.07, 15.43),
    ];
    let geocoder = ScriptedGeocoder {
        hits: vec![
            hit("DE", "North Rhine-Westphalia", "Cologne"),
            hit("US", "New York", "New York County"),
            hit("AT", "Styria", "Graz"),
        ],
    };

    let rows = enrich(landings, &geocoder, &restricted_table()).unwrap();

    assert_eq!(rows.len(), 3);
    // Row order and original columns survive; country columns line up.
    assert_eq!(rows[0].landing.name.as_deref(), Some("a"));
    assert_eq!(rows[0].country.country_code_2, "DE");
    assert_eq!(rows[0].country.country_code_3, "DEU");
    assert_eq!(rows[0].country.country_name, "Germany");
    assert_eq!(rows[0].country.admin1, "North Rhine-Westphalia");

    assert_eq!(rows[1].landing.reclong, -73.97);
    assert_eq!(rows[1].country.country_code_3, "USA");
    assert_eq!(rows[1].country.admin2, "New York County");

    assert_eq!(rows[2].landing.name.as_deref(), Some("c"));
    assert_eq!(rows[2].country.country_name, "Austria");
}

#[test]
fn unknown_country_code_is_fatal() {
    // Plausible geocode result (Ghana is the nearest country to (0, 0))
    // whose code is absent from the restricted table.
    let landings = vec![landing("ocean", 0.0, 0.0)];
    let geocoder = ScriptedGeocoder {
        hits: vec![hit("GH", "Western", "Sekondi-Takoradi")],
    };

    let err = enrich(landings, &geocoder, &restricted_table()).unwrap_err();
    match err {
        EnrichError::UnknownCountry { cc } => assert_eq!(cc, "GH"),
        other => panic!("expected UnknownCountry, got {other:?}"),
    }
}

#[test]
fn known_code_succeeds_for_the_same_coordinates() {
    let landings = vec![landing("ocean", 0.0, 0.0)];
    let geocoder = ScriptedGeocoder {
        hits: vec![hit("DE", "Hesse", "")],
    };
    let rows = enrich(landings, &geocoder, &restricted_table()).unwrap();
    assert_eq!(rows[0].country.country_name, "Germany");
}

#[test]
fn short_geocoder_output_is_rejected() {
    let landings = vec![landing("a", 1.0, 1.0), landing("b", 2.0, 2.0)];
    let err = enrich(landings, &TruncatingGeocoder, &restricted_table()).unwrap_err();
    match err {
        EnrichError::ResultCountMismatch { expected, got } => {
            assert_eq!(expected, 2);
            assert_eq!(got, 1);
        }
        other => panic!("expected ResultCountMismatch, got {other:?}"),
    }
}

#[test]
fn enrichment_preserves_row_count_and_columns() {
    let landings = vec![landing("a", 50.0, 6.0), landing("b", 47.0, 15.0)];
    let originals = landings.clone();
    let geocoder = ScriptedGeocoder {
        hits: vec![hit("DE", "", ""), hit("AT", "", "")],
    };

    let rows = enrich(landings, &geocoder, &restricted_table()).unwrap();

    assert_eq!(rows.len(), originals.len());
    for (row, original) in rows.iter().zip(&originals) {
        assert_eq!(&row.landing, original);
    }
}
