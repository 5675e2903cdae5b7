//! Effective vacancy fraction resolution.

use vacancy_map_building_models::{BuildingRecord, OverrideRecord};

/// Resolves the effective vacant fraction for a building.
///
/// Precedence, in order:
///
/// 1. The authoritative dataset fraction, clamped to `[0, 1]`. When
///    present it wins regardless of any override; user estimates never
///    shadow dataset truth.
/// 2. A session override, converted from available area to a fraction of
///    `total_area_m2`. An override whose numeric value is absent resolves
///    to unknown, as does a missing or non-positive denominator; a
///    non-positive override area resolves to exactly 0.
/// 3. Unknown.
///
/// The result is always within `[0, 1]` or `None`.
#[must_use]
pub fn resolve_vacancy_fraction(
    record: &BuildingRecord,
    override_record: Option<&OverrideRecord>,
    total_area_m2: Option<f64>,
) -> Option<f64> {
    if let Some(fraction) = record.vacancy_fraction {
        if fraction.is_finite() {
            return Some(fraction.clamp(0.0, 1.0));
        }
    }

    let override_record = override_record?;
    let available = override_record.available_area_m2?;

    let total = total_area_m2.filter(|total| total.is_finite() && *total > 0.0)?;

    if available <= 0.0 {
        return Some(0.0);
    }

    Some((available / total).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(vacancy_fraction: Option<f64>) -> BuildingRecord {
        BuildingRecord {
            id: "bldg-1".to_string(),
            address: None,
            number: None,
            street: None,
            postcode: None,
            name: None,
            use_class: None,
            footprint: Vec::new(),
            height_m: None,
            stories: None,
            vacancy_fraction,
            properties: serde_json::Map::new(),
            geometry: None,
        }
    }

    fn override_of(area: Option<f64>) -> OverrideRecord {
        OverrideRecord {
            available_area_m2: area,
        }
    }

    #[test]
    fn authoritative_wins_over_override() {
        let fraction = resolve_vacancy_fraction(
            &record(Some(0.25)),
            Some(&override_of(Some(900.0))),
            Some(1000.0),
        );
        assert_eq!(fraction, Some(0.25));
    }

    #[test]
    fn authoritative_is_clamped() {
        assert_eq!(resolve_vacancy_fraction(&record(Some(1.8)), None, None), Some(1.0));
        assert_eq!(resolve_vacancy_fraction(&record(Some(-0.2)), None, None), Some(0.0));
    }

    #[test]
    fn non_finite_authoritative_is_absent() {
        let fraction = resolve_vacancy_fraction(
            &record(Some(f64::NAN)),
            Some(&override_of(Some(500.0))),
            Some(1000.0),
        );
        assert_eq!(fraction, Some(0.5));
    }

    #[test]
    fn override_divided_by_total_area() {
        let fraction = resolve_vacancy_fraction(
            &record(None),
            Some(&override_of(Some(500.0))),
            Some(1000.0),
        );
        assert_eq!(fraction, Some(0.5));
    }

    #[test]
    fn override_fraction_is_clamped() {
        let fraction = resolve_vacancy_fraction(
            &record(None),
            Some(&override_of(Some(2500.0))),
            Some(1000.0),
        );
        assert_eq!(fraction, Some(1.0));
    }

    #[test]
    fn non_positive_override_is_zero() {
        let fraction = resolve_vacancy_fraction(
            &record(None),
            Some(&override_of(Some(0.0))),
            Some(1000.0),
        );
        assert_eq!(fraction, Some(0.0));
    }

    #[test]
    fn override_without_value_is_unknown() {
        let fraction =
            resolve_vacancy_fraction(&record(None), Some(&override_of(None)), Some(1000.0));
        assert_eq!(fraction, None);
    }

    #[test]
    fn override_without_denominator_is_unknown() {
        let with_none =
            resolve_vacancy_fraction(&record(None), Some(&override_of(Some(500.0))), None);
        assert_eq!(with_none, None);

        let with_zero =
            resolve_vacancy_fraction(&record(None), Some(&override_of(Some(500.0))), Some(0.0));
        assert_eq!(with_zero, None);
    }

    #[test]
    fn nothing_known_is_unknown() {
        assert_eq!(resolve_vacancy_fraction(&record(None), None, Some(1000.0)), None);
    }
}
