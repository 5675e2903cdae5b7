//! Feature property extraction.
//!
//! The source dataset is loosely typed: numeric fields arrive as JSON
//! numbers or numeric strings depending on which export produced the
//! file, and several fields exist under aliased names. Extraction is
//! tolerant of both, and alias resolution is an explicit ordered list —
//! first usable value wins.

use serde_json::{Map, Value};

/// Story-count fields, in precedence order. The first finite positive
/// value wins.
pub const STORY_FIELDS: &[&str] = &[
    "stories",
    "storeys",
    "levels",
    "floors",
    "num_floors",
    "building_levels",
];

/// Extracts a trimmed, non-empty string property. JSON numbers are
/// accepted and stringified (street numbers arrive both ways).
#[must_use]
pub fn string_prop(props: &Map<String, Value>, key: &str) -> Option<String> {
    match props.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extracts a finite numeric property. JSON numbers and numeric strings
/// are accepted; anything else (including NaN/infinite values) is
/// treated as absent.
#[must_use]
pub fn numeric_prop(props: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match props.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Extracts a finite, strictly positive numeric property.
#[must_use]
pub fn positive_prop(props: &Map<String, Value>, key: &str) -> Option<f64> {
    numeric_prop(props, key).filter(|v| *v > 0.0)
}

/// Resolves the story count from the aliased story fields.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn resolve_stories(props: &Map<String, Value>) -> Option<u32> {
    STORY_FIELDS
        .iter()
        .find_map(|field| positive_prop(props, field).map(|v| v.round() as u32))
}
