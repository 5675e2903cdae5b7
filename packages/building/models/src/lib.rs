#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Building record and vacancy override types.
//!
//! [`BuildingRecord`] is the canonical entity the whole system operates
//! on: one building footprint from the source `GeoJSON` dataset, loaded
//! once at startup and immutable for the process lifetime.
//! [`OverrideRecord`] is the only mutable state — a session-local,
//! user-submitted estimate of available area, kept separate from the
//! dataset so authoritative values are never mutated.

use serde::{Deserialize, Serialize};

/// A polygon ring as ordered `[lon, lat]` (optionally `[lon, lat, elev]`)
/// positions. Closed: the first and last position coincide.
pub type Ring = Vec<Vec<f64>>;

/// A single building from the source dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingRecord {
    /// Opaque stable identifier, unique across the dataset. Primary key
    /// for lookups and override storage.
    pub id: String,
    /// Pre-composed address string, when the dataset provides one.
    pub address: Option<String>,
    /// Street number (e.g. "123").
    pub number: Option<String>,
    /// Street name (e.g. "Main St").
    pub street: Option<String>,
    /// Postal code.
    pub postcode: Option<String>,
    /// Display name. The primary `name` property is preferred over the
    /// `common_name` alternate.
    pub name: Option<String>,
    /// Use category. The primary `use_class` property is preferred over
    /// the `subtype` alternate.
    pub use_class: Option<String>,
    /// Outer footprint ring in real-world lon/lat coordinates. Empty when
    /// the source geometry was missing or unsupported; such records stay
    /// searchable but are skipped from area and volume derivation.
    pub footprint: Ring,
    /// Building height in meters. `None` unless finite and positive.
    pub height_m: Option<f64>,
    /// Story count, resolved at load time from the dataset's aliased
    /// story fields. `None` when no field held a finite positive value.
    pub stories: Option<u32>,
    /// Authoritative vacancy fraction from the dataset. Interpreted as a
    /// fraction and clamped to `[0, 1]` at resolution time; `None` when
    /// absent or non-finite.
    pub vacancy_fraction: Option<f64>,
    /// Raw feature properties, passed through on the building detail
    /// endpoint.
    pub properties: serde_json::Map<String, serde_json::Value>,
    /// Raw `GeoJSON` geometry, passed through unmodified.
    pub geometry: Option<serde_json::Value>,
}

impl BuildingRecord {
    /// Returns the human-readable address: the pre-composed `address`
    /// field when present, otherwise the non-empty parts of
    /// `{number, street, postcode}` joined by spaces.
    #[must_use]
    pub fn display_address(&self) -> String {
        if let Some(address) = &self.address {
            let trimmed = address.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }

        [&self.number, &self.street, &self.postcode]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A user-submitted available-area estimate for one building.
///
/// Presence of the record in the override store is meaningful on its own:
/// a record with `available_area_m2: None` means "the user touched this
/// building but gave no number", which resolves to an unknown vacancy
/// fraction rather than falling back to anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverrideRecord {
    /// Available area for rent, in square meters.
    pub available_area_m2: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BuildingRecord {
        BuildingRecord {
            id: "bldg-1".to_string(),
            address: None,
            number: Some("123".to_string()),
            street: Some("Main St".to_string()),
            postcode: Some("94105".to_string()),
            name: None,
            use_class: None,
            footprint: Vec::new(),
            height_m: None,
            stories: None,
            vacancy_fraction: None,
            properties: serde_json::Map::new(),
            geometry: None,
        }
    }

    #[test]
    fn composes_address_from_parts() {
        assert_eq!(record().display_address(), "123 Main St 94105");
    }

    #[test]
    fn prefers_precomposed_address() {
        let mut r = record();
        r.address = Some("123 Main St, San Francisco".to_string());
        assert_eq!(r.display_address(), "123 Main St, San Francisco");
    }

    #[test]
    fn skips_blank_precomposed_address() {
        let mut r = record();
        r.address = Some("   ".to_string());
        assert_eq!(r.display_address(), "123 Main St 94105");
    }

    #[test]
    fn skips_missing_parts() {
        let mut r = record();
        r.postcode = None;
        assert_eq!(r.display_address(), "123 Main St");
    }

    #[test]
    fn empty_when_nothing_known() {
        let mut r = record();
        r.number = None;
        r.street = None;
        r.postcode = None;
        assert_eq!(r.display_address(), "");
    }
}
