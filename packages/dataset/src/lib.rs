#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Building dataset loading.
//!
//! Reads the source `GeoJSON` feature collection once at startup and
//! materializes [`BuildingRecord`]s. The dataset is read-only; records
//! are immutable for the process lifetime.
//!
//! Per-record problems degrade instead of failing the load: a feature
//! without a usable id is skipped with a warning, and a feature with
//! missing or unsupported geometry keeps an empty footprint (searchable,
//! but excluded from area and volume derivation).

pub mod properties;

use std::path::Path;

use geojson::{Feature, GeoJson};
use thiserror::Error;
use vacancy_map_building_models::{BuildingRecord, Ring};
use vacancy_map_geometry::denormalize_ring;

/// Errors that can abort a dataset load.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid `GeoJSON`.
    #[error("failed to parse dataset GeoJSON: {0}")]
    Parse(#[from] geojson::Error),
    /// The file parsed, but is not a feature collection.
    #[error("dataset is not a GeoJSON FeatureCollection")]
    NotAFeatureCollection,
}

/// Loads building records from the `GeoJSON` file at `path`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be read, is not valid
/// `GeoJSON`, or is not a feature collection.
pub fn load_dataset(path: &Path) -> Result<Vec<BuildingRecord>, DatasetError> {
    let raw = std::fs::read_to_string(path)?;
    let records = parse_dataset(&raw)?;
    log::info!("Loaded {} buildings from {}", records.len(), path.display());
    Ok(records)
}

/// Parses building records from raw `GeoJSON` text.
///
/// # Errors
///
/// Returns [`DatasetError`] if the text is not a valid `GeoJSON` feature
/// collection.
pub fn parse_dataset(raw: &str) -> Result<Vec<BuildingRecord>, DatasetError> {
    let GeoJson::FeatureCollection(collection) = raw.parse::<GeoJson>()? else {
        return Err(DatasetError::NotAFeatureCollection);
    };

    let mut records = Vec::with_capacity(collection.features.len());
    for (position, feature) in collection.features.iter().enumerate() {
        match feature_to_record(feature) {
            Some(record) => records.push(record),
            None => log::warn!("Skipping feature {position}: no usable id property"),
        }
    }

    Ok(records)
}

/// Materializes one feature into a [`BuildingRecord`]. Returns `None`
/// only when the feature has no usable id; every other problem
/// degrades field-by-field.
fn feature_to_record(feature: &Feature) -> Option<BuildingRecord> {
    let props = feature.properties.clone().unwrap_or_default();
    let id = properties::string_prop(&props, "id")?;

    let footprint = denormalize_ring(&outer_ring(feature, &id));

    Some(BuildingRecord {
        address: properties::string_prop(&props, "address"),
        number: properties::string_prop(&props, "number"),
        street: properties::string_prop(&props, "street"),
        postcode: properties::string_prop(&props, "postcode"),
        name: properties::string_prop(&props, "name")
            .or_else(|| properties::string_prop(&props, "common_name")),
        use_class: properties::string_prop(&props, "use_class")
            .or_else(|| properties::string_prop(&props, "subtype")),
        footprint,
        height_m: properties::positive_prop(&props, "height"),
        stories: properties::resolve_stories(&props),
        vacancy_fraction: properties::numeric_prop(&props, "Percentage_vacant"),
        geometry: feature
            .geometry
            .as_ref()
            .and_then(|g| serde_json::to_value(g).ok()),
        properties: props,
        id,
    })
}

/// Extracts the outer footprint ring: the outer ring of a `Polygon`, or
/// the first polygon's outer ring of a `MultiPolygon`. Anything else
/// yields an empty ring.
fn outer_ring(feature: &Feature, id: &str) -> Ring {
    match feature.geometry.as_ref().map(|g| &g.value) {
        Some(geojson::Value::Polygon(rings)) => rings.first().cloned().unwrap_or_default(),
        Some(geojson::Value::MultiPolygon(polygons)) => polygons
            .first()
            .and_then(|rings| rings.first())
            .cloned()
            .unwrap_or_default(),
        Some(_) => {
            log::warn!("Building {id}: unsupported geometry type, footprint unavailable");
            Vec::new()
        }
        None => Vec::new(),
    }
}
