//! Catalog loading
//!
//! Parses a GeoJSON `FeatureCollection` into country records: validates the
//! names, derives each country's coordinates from its outline centroid, and
//! surfaces every malformed-input class as a typed error.

use crate::core::{Country, Difficulty, Geometry};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the country catalog
///
/// Any of these is fatal to starting a session; retry policy belongs to the
/// caller.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Data file could not be read
    #[error("failed to read catalog data: {0}")]
    Io(#[from] std::io::Error),

    /// Data is not a valid GeoJSON feature collection
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A country has a blank display name
    #[error("country #{index} has a blank name")]
    BlankName { index: usize },

    /// A country carries no usable outline
    #[error("country '{name}' has empty geometry")]
    EmptyGeometry { name: String },

    /// Two entries share a display name
    #[error("duplicate country name '{name}'")]
    DuplicateName { name: String },

    /// The data file contains no countries at all
    #[error("catalog contains no countries")]
    EmptyCatalog,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: Properties,
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Properties {
    name: String,
    name_ko: String,
    difficulty: Difficulty,
}

/// Parse a GeoJSON feature collection into country records, in file order
///
/// # Errors
///
/// Returns a [`CatalogError`] when the JSON is malformed, a required field is
/// missing, a name is blank, or a geometry has no usable exterior ring.
pub fn parse_geojson(input: &str) -> Result<Vec<Country>, CatalogError> {
    let collection: FeatureCollection = serde_json::from_str(input)?;

    let mut countries = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        let Properties {
            name,
            name_ko,
            difficulty,
        } = feature.properties;

        let name = name.trim().to_string();
        let name_ko = name_ko.trim().to_string();
        if name.is_empty() || name_ko.is_empty() {
            return Err(CatalogError::BlankName { index });
        }

        let coordinates = feature
            .geometry
            .centroid()
            .ok_or_else(|| CatalogError::EmptyGeometry { name: name.clone() })?;

        countries.push(Country::new(
            name,
            name_ko,
            coordinates,
            difficulty,
            feature.geometry,
        ));
    }

    Ok(countries)
}

/// Load country records from a GeoJSON file on disk
///
/// # Errors
///
/// Returns a [`CatalogError`] if the file cannot be read or fails to parse.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Country>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_geojson(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(name: &str, name_ko: &str, lat: f64, lon: f64) -> String {
        format!(
            r#"{{
                "type": "Feature",
                "properties": {{"name": "{name}", "name_ko": "{name_ko}", "difficulty": "easy"}},
                "geometry": {{
                    "type": "Polygon",
                    "coordinates": [[[{w}, {s}], [{e}, {s}], [{e}, {n}], [{w}, {n}], [{w}, {s}]]]
                }}
            }}"#,
            w = lon - 1.0,
            e = lon + 1.0,
            s = lat - 1.0,
            n = lat + 1.0,
        )
    }

    fn collection(features: &[String]) -> String {
        format!(
            r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
            features.join(",")
        )
    }

    #[test]
    fn parses_valid_collection() {
        let json = collection(&[
            feature("South Korea", "대한민국", 36.5, 127.8),
            feature("Japan", "일본", 36.2, 138.2),
        ]);
        let countries = parse_geojson(&json).unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name(), "South Korea");
        assert_eq!(countries[1].name_ko(), "일본");
        assert!((countries[0].coordinates().lat() - 36.5).abs() < 1e-9);
        assert!((countries[0].coordinates().lon() - 127.8).abs() < 1e-9);
    }

    #[test]
    fn preserves_file_order() {
        let json = collection(&[
            feature("Chile", "칠레", -35.7, -71.0),
            feature("Peru", "페루", -9.2, -75.0),
            feature("Brazil", "브라질", -10.8, -53.1),
        ]);
        let countries = parse_geojson(&json).unwrap();
        let names: Vec<&str> = countries.iter().map(Country::name).collect();
        assert_eq!(names, ["Chile", "Peru", "Brazil"]);
    }

    #[test]
    fn trims_names() {
        let json = collection(&[feature("  Iceland  ", " 아이슬란드 ", 64.9, -18.6)]);
        let countries = parse_geojson(&json).unwrap();
        assert_eq!(countries[0].name(), "Iceland");
        assert_eq!(countries[0].name_ko(), "아이슬란드");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_geojson("not geojson"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        // No name_ko
        let json = r#"{"type": "FeatureCollection", "features": [{
            "properties": {"name": "Nowhere", "difficulty": "easy"},
            "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}
        }]}"#;
        assert!(matches!(parse_geojson(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn rejects_blank_name() {
        let json = collection(&[feature("   ", "어딘가", 0.0, 0.0)]);
        assert!(matches!(
            parse_geojson(&json),
            Err(CatalogError::BlankName { index: 0 })
        ));
    }

    #[test]
    fn rejects_empty_geometry() {
        let json = r#"{"type": "FeatureCollection", "features": [{
            "properties": {"name": "Nowhere", "name_ko": "어딘가", "difficulty": "hard"},
            "geometry": {"type": "Polygon", "coordinates": []}
        }]}"#;
        match parse_geojson(json) {
            Err(CatalogError::EmptyGeometry { name }) => assert_eq!(name, "Nowhere"),
            other => panic!("expected EmptyGeometry, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let json = r#"{"type": "FeatureCollection", "features": [{
            "properties": {"name": "Nowhere", "name_ko": "어딘가", "difficulty": "impossible"},
            "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}
        }]}"#;
        assert!(matches!(parse_geojson(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        assert!(matches!(
            load_from_file("/no/such/countries.geojson"),
            Err(CatalogError::Io(_))
        ));
    }
}
