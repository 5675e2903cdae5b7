#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the vacancy map server.
//!
//! These types are serialized to JSON for the REST API, separate from
//! the internal record types so the wire contract can evolve
//! independently. Field names stay snake_case (`height_m`,
//! `vacancy_pct`); the map frontend already speaks this contract.

use serde::{Deserialize, Serialize};
use vacancy_map_geometry::VacancyVolume;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct ApiHealth {
    /// Whether the service is up.
    pub ok: bool,
    /// Number of loaded building records.
    pub features: usize,
}

/// One ranked match from the search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSearchMatch {
    /// Building id.
    pub id: String,
    /// Relevance score.
    pub score: u32,
    /// Human-readable address.
    pub address: String,
    /// Street number.
    pub number: Option<String>,
    /// Street name.
    pub street: Option<String>,
    /// Postal code.
    pub postcode: Option<String>,
    /// Building height in meters.
    pub height_m: Option<f64>,
    /// Resolved vacancy fraction (0–1).
    pub vacancy_pct: Option<f64>,
}

/// Building detail response, shared by the id and best-match endpoints.
///
/// `found: false` carries only the echoed id; every other field is
/// omitted.
#[derive(Debug, Clone, Serialize)]
pub struct ApiBuilding {
    /// Whether a building was found.
    pub found: bool,
    /// Building id (or the failed lookup key when not found).
    pub id: String,
    /// Human-readable address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Building height in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    /// Resolved vacancy fraction (0–1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacancy_pct: Option<f64>,
    /// Floor count (explicit or estimated from height).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    /// Footprint area in square meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<f64>,
    /// Raw dataset properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    /// Raw `GeoJSON` geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
    /// Derived vacant sub-volume, when height and vacancy are known and
    /// the footprint is usable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacancy_volume: Option<VacancyVolume>,
}

impl ApiBuilding {
    /// The not-found shape: `found: false` with the lookup key echoed
    /// back and nothing else populated.
    #[must_use]
    pub fn not_found(id: String) -> Self {
        Self {
            found: false,
            id,
            address: None,
            height_m: None,
            vacancy_pct: None,
            floors: None,
            area_m2: None,
            properties: None,
            geometry: None,
            vacancy_volume: None,
        }
    }
}

/// Query parameters for the search and best-match endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQueryParams {
    /// Free-text address or name query.
    pub query: String,
}

/// Query parameters for the building detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingQueryParams {
    /// Building id to look up.
    pub id: String,
}

/// Body for setting an override.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideBody {
    /// Building id the override applies to.
    pub id: String,
    /// Available area for rent, in square meters. May be omitted; the
    /// override is still recorded.
    pub available_area_m2: Option<f64>,
}

/// Query parameters for clearing an override.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideQueryParams {
    /// Building id to clear.
    pub id: String,
}

/// Acknowledgement for override set/clear operations.
#[derive(Debug, Serialize)]
pub struct ApiOverrideAck {
    /// Whether the operation applied.
    pub ok: bool,
    /// Echoed building id.
    pub id: String,
    /// For clear operations: whether an override was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
}
