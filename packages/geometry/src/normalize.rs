//! Coordinate-space detection and denormalization for footprint rings.
//!
//! Some dataset exports carry footprints pre-normalized into a unit
//! square instead of real lon/lat. Detection is a magnitude heuristic:
//! a ring whose coordinates all sit within [`UNIT_RANGE_THRESHOLD`] of
//! zero is treated as normalized and linearly remapped into the fixed
//! San Francisco bounding box below.
//!
//! Known limitation: this is a proxy, not a CRS transform. A real
//! building footprint genuinely near lon/lat (0, 0) would be misdetected
//! as normalized. None exist in this dataset's range, so the heuristic
//! is kept as-is for compatibility with the rest of the pipeline.

use vacancy_map_building_models::Ring;

/// Coordinates with absolute magnitude at or below this are considered
/// unit-square normalized.
pub const UNIT_RANGE_THRESHOLD: f64 = 1.5;

/// Western edge of the remap target (San Francisco city extent).
pub const LON_MIN: f64 = -122.5247;
/// Eastern edge of the remap target.
pub const LON_MAX: f64 = -122.3366;
/// Southern edge of the remap target.
pub const LAT_MIN: f64 = 37.6983;
/// Northern edge of the remap target.
pub const LAT_MAX: f64 = 37.8312;

/// Returns whether every position in the ring sits within the unit
/// range. Empty rings are not considered normalized.
#[must_use]
pub fn is_unit_normalized(ring: &[Vec<f64>]) -> bool {
    !ring.is_empty()
        && ring.iter().all(|pos| {
            pos.len() >= 2
                && pos[0].abs() <= UNIT_RANGE_THRESHOLD
                && pos[1].abs() <= UNIT_RANGE_THRESHOLD
        })
}

/// Remaps a ring from unit-square coordinates to real-world lon/lat.
///
/// Rings already in real coordinates pass through unchanged, which makes
/// the function idempotent: once remapped, every coordinate magnitude
/// exceeds the detection threshold. Elevation components (third and
/// beyond) are preserved untouched either way.
#[must_use]
pub fn denormalize_ring(ring: &[Vec<f64>]) -> Ring {
    if !is_unit_normalized(ring) {
        return ring.to_vec();
    }

    ring.iter()
        .map(|pos| {
            let mut out = pos.clone();
            out[0] = LON_MIN + pos[0] * (LON_MAX - LON_MIN);
            out[1] = LAT_MIN + pos[1] * (LAT_MAX - LAT_MIN);
            out
        })
        .collect()
}
