//! Vacancy sub-volume derivation.
//!
//! Extrudes the building footprint at a deterministic base elevation to
//! represent the vacant portion. The building's full extrusion starts at
//! elevation 0 from the same footprint; the sub-volume returned here is
//! rendered inside it.

use serde::{Deserialize, Serialize};
use vacancy_map_building_models::Ring;

use crate::{area, offset};

/// The renderable vacant sub-volume of one building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyVolume {
    /// Footprint ring with every vertex at the base elevation
    /// (`[lon, lat, base_offset_m]`), the extrusion base.
    pub base_ring: Ring,
    /// Elevation at which the sub-volume starts, in meters.
    pub base_offset_m: f64,
    /// Vertical extent of the sub-volume, in meters.
    pub height_m: f64,
}

impl VacancyVolume {
    /// Elevation of the sub-volume's top. Never exceeds the building
    /// height it was derived from.
    #[must_use]
    pub fn top_m(&self) -> f64 {
        self.base_offset_m + self.height_m
    }
}

/// Derives the vacant sub-volume for a building.
///
/// The vacancy height is the building height scaled by the resolved
/// vacancy fraction (clamped to `[0, 1]`), and the base elevation comes
/// from [`offset::base_offset`], so repeated calls for the same building
/// produce the identical volume.
///
/// Returns `None` when there is nothing to render: unknown or
/// non-positive height, a zero vacancy fraction, or a footprint too
/// degenerate to enclose any area (logged and skipped, per-record
/// failures never propagate).
#[must_use]
pub fn derive_vacancy_volume(
    id: &str,
    footprint: &[Vec<f64>],
    height_m: f64,
    vacancy_fraction: f64,
) -> Option<VacancyVolume> {
    if !height_m.is_finite() || height_m <= 0.0 {
        return None;
    }

    if area::footprint_area_m2(footprint).is_none() {
        log::warn!("Skipping vacancy volume for {id}: degenerate footprint");
        return None;
    }

    let fraction = vacancy_fraction.clamp(0.0, 1.0);
    let vacancy_height = height_m * fraction;
    if vacancy_height <= 0.0 {
        return None;
    }

    let base = offset::base_offset(id, height_m, vacancy_height);
    let base_ring = footprint
        .iter()
        .filter(|pos| pos.len() >= 2)
        .map(|pos| vec![pos[0], pos[1], base])
        .collect();

    Some(VacancyVolume {
        base_ring,
        base_offset_m: base,
        height_m: vacancy_height,
    })
}
