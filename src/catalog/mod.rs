//! Country catalog
//!
//! The immutable set of playable countries, loaded once from GeoJSON, with a
//! case-insensitive name index over both locales. Load order is preserved;
//! daily puzzle selection depends on it.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_DATASET;
pub use loader::CatalogError;

use crate::core::Country;
use rustc_hash::FxHashMap;
use std::path::Path;

/// The set of playable countries, in load order
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
    name_index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from country records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCatalog` for an empty record list and
    /// `CatalogError::DuplicateName` when two entries share a name in either
    /// locale (case-insensitively).
    pub fn new(countries: Vec<Country>) -> Result<Self, CatalogError> {
        if countries.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut name_index = FxHashMap::default();
        for (index, country) in countries.iter().enumerate() {
            for name in [country.name(), country.name_ko()] {
                let key = name.to_lowercase();
                if name_index.insert(key, index).is_some() {
                    return Err(CatalogError::DuplicateName {
                        name: name.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            countries,
            name_index,
        })
    }

    /// Parse a catalog from a GeoJSON feature collection string
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] for malformed data; see [`loader::parse_geojson`].
    pub fn from_geojson(input: &str) -> Result<Self, CatalogError> {
        Self::new(loader::parse_geojson(input)?)
    }

    /// Load a catalog from a GeoJSON file on disk
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Build the catalog from the embedded default dataset
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the compiled-in data is malformed, which
    /// the embedded-data tests guard against.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_geojson(DEFAULT_DATASET)
    }

    /// Number of countries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Always false; an empty catalog fails to construct
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Country at a load-order index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Country> {
        self.countries.get(index)
    }

    /// All countries, in load order
    #[inline]
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Look up a country by name in either locale
    ///
    /// The query is trimmed and lowercased before the lookup, so any case or
    /// whitespace variant of a catalog name resolves.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Country> {
        let key = name.trim().to_lowercase();
        self.name_index.get(&key).map(|&index| &self.countries[index])
    }

    /// Every display name in both locales, for input suggestion lists
    ///
    /// Korean names first, then English, each in load order.
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.countries
            .iter()
            .map(Country::name_ko)
            .chain(self.countries.iter().map(Country::name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinates, Difficulty, Geometry};

    fn test_country(name: &str, name_ko: &str, lat: f64, lon: f64) -> Country {
        Country::new(
            name.to_string(),
            name_ko.to_string(),
            Coordinates::new(lat, lon),
            Difficulty::Easy,
            Geometry::Polygon {
                coordinates: vec![vec![
                    [lon - 1.0, lat - 1.0],
                    [lon + 1.0, lat - 1.0],
                    [lon + 1.0, lat + 1.0],
                    [lon - 1.0, lat + 1.0],
                    [lon - 1.0, lat - 1.0],
                ]],
            },
        )
    }

    #[test]
    fn embedded_dataset_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.len(), 35);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn embedded_entries_are_valid() {
        let catalog = Catalog::embedded().unwrap();
        for country in catalog.countries() {
            assert!(!country.name().is_empty());
            assert!(!country.name_ko().is_empty());

            let coords = country.coordinates();
            assert!(
                coords.lat().abs() <= 90.0 && coords.lon().abs() <= 180.0,
                "{} has out-of-range coordinates {coords}",
                country.name()
            );
            assert!(!country.outline().is_empty());
        }
    }

    #[test]
    fn embedded_names_resolve_in_both_locales() {
        let catalog = Catalog::embedded().unwrap();
        for country in catalog.countries() {
            assert_eq!(
                catalog.find(country.name()).map(Country::name),
                Some(country.name())
            );
            assert_eq!(
                catalog.find(country.name_ko()).map(Country::name),
                Some(country.name())
            );
        }
    }

    #[test]
    fn find_normalizes_case_and_whitespace() {
        let catalog = Catalog::embedded().unwrap();
        let country = catalog.find("  SOUTH korea  ").unwrap();
        assert_eq!(country.name_ko(), "대한민국");
        assert!(catalog.find("south corea").is_none());
    }

    #[test]
    fn display_names_cover_both_locales() {
        let catalog = Catalog::embedded().unwrap();
        let names: Vec<&str> = catalog.display_names().collect();
        assert_eq!(names.len(), catalog.len() * 2);
        assert!(names.contains(&"대한민국"));
        assert!(names.contains(&"South Korea"));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            Catalog::new(Vec::new()),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let countries = vec![
            test_country("Iceland", "아이슬란드", 64.9, -18.6),
            test_country("ICELAND", "얼음나라", 60.0, -10.0),
        ];
        assert!(matches!(
            Catalog::new(countries),
            Err(CatalogError::DuplicateName { .. })
        ));
    }

    #[test]
    fn get_is_load_order() {
        let countries = vec![
            test_country("Chile", "칠레", -35.7, -71.0),
            test_country("Peru", "페루", -9.2, -75.0),
        ];
        let catalog = Catalog::new(countries).unwrap();
        assert_eq!(catalog.get(0).unwrap().name(), "Chile");
        assert_eq!(catalog.get(1).unwrap().name(), "Peru");
        assert!(catalog.get(2).is_none());
    }
}
