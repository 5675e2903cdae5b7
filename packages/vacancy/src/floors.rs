//! Floor count estimation.

use vacancy_map_building_models::BuildingRecord;

/// Assumed floor-to-floor height in meters when no story field is
/// present. Fixed design parameter, not user-configurable.
pub const METERS_PER_FLOOR: f64 = 3.4;

/// Derives a floor count for a building.
///
/// An explicit story count (already resolved from the dataset's aliased
/// story fields at load time) wins; otherwise a finite positive height
/// divided by [`METERS_PER_FLOOR`], rounded, with a floor of 1. `None`
/// when neither is known.
#[must_use]
pub fn floors(record: &BuildingRecord) -> Option<u32> {
    if let Some(stories) = record.stories {
        return Some(stories);
    }

    let height = record.height_m?;
    if !height.is_finite() || height <= 0.0 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let estimated = (height / METERS_PER_FLOOR).round().max(1.0) as u32;
    Some(estimated)
}
