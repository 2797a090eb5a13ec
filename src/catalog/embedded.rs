//! Embedded country dataset
//!
//! The default catalog compiled into the binary.

/// Default country dataset, a GeoJSON `FeatureCollection`
pub const DEFAULT_DATASET: &str = include_str!("../../data/countries.geojson");
