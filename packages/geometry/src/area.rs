//! Footprint area calculation.
//!
//! City-scale footprints don't need geodesic precision; the
//! Chamberlain–Duquette spherical-excess approximation from the `geo`
//! crate is accurate to well under a square meter at this scale.

use std::collections::BTreeSet;

use geo::{ChamberlainDuquetteArea, LineString, Polygon};

/// Computes the area in square meters enclosed by a footprint ring of
/// `[lon, lat]` positions.
///
/// Returns `None` ("unknown") when the ring has fewer than 3 distinct
/// vertices or the computed area is non-finite or non-positive. Callers
/// degrade to skipping area-derived values rather than failing the
/// record.
#[must_use]
pub fn footprint_area_m2(ring: &[Vec<f64>]) -> Option<f64> {
    if distinct_vertices(ring) < 3 {
        return None;
    }

    let coords: Vec<(f64, f64)> = ring
        .iter()
        .filter(|pos| pos.len() >= 2)
        .map(|pos| (pos[0], pos[1]))
        .collect();

    let polygon = Polygon::new(LineString::from(coords), Vec::new());
    let area = polygon.chamberlain_duquette_unsigned_area();

    (area.is_finite() && area > 0.0).then_some(area)
}

/// Counts distinct `[lon, lat]` vertices in a ring, comparing exact bit
/// patterns (the closing vertex duplicates the first and must not count
/// twice).
fn distinct_vertices(ring: &[Vec<f64>]) -> usize {
    ring.iter()
        .filter(|pos| pos.len() >= 2)
        .map(|pos| (pos[0].to_bits(), pos[1].to_bits()))
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Roughly a 100 m x 100 m square near downtown San Francisco.
    fn square_ring() -> Vec<Vec<f64>> {
        vec![
            vec![-122.4000, 37.7900],
            vec![-122.3989, 37.7900],
            vec![-122.3989, 37.7909],
            vec![-122.4000, 37.7909],
            vec![-122.4000, 37.7900],
        ]
    }

    #[test]
    fn computes_plausible_area() {
        let area = footprint_area_m2(&square_ring()).expect("area");
        // ~97 m x ~100 m; allow generous tolerance for the approximation
        assert!(area > 8_000.0, "area too small: {area}");
        assert!(area < 12_000.0, "area too large: {area}");
    }

    #[test]
    fn degenerate_ring_is_unknown() {
        let line = vec![
            vec![-122.4, 37.79],
            vec![-122.39, 37.79],
            vec![-122.4, 37.79],
        ];
        assert_eq!(footprint_area_m2(&line), None);
    }

    #[test]
    fn empty_ring_is_unknown() {
        assert_eq!(footprint_area_m2(&[]), None);
    }

    #[test]
    fn closing_vertex_does_not_count_as_distinct() {
        let two_points = vec![
            vec![-122.4, 37.79],
            vec![-122.39, 37.8],
            vec![-122.4, 37.79],
        ];
        assert_eq!(footprint_area_m2(&two_points), None);
    }

    #[test]
    fn zero_area_ring_is_unknown() {
        let collapsed = vec![
            vec![-122.4, 37.79],
            vec![-122.4, 37.79],
            vec![-122.4, 37.79],
            vec![-122.4, 37.79],
        ];
        assert_eq!(footprint_area_m2(&collapsed), None);
    }
}
