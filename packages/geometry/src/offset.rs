//! Deterministic per-building vertical offset.
//!
//! The vacancy sub-volume sits at a pseudo-random elevation inside the
//! building so that neighboring buildings don't all render their vacant
//! slab at the same height. No per-building state is stored; the offset
//! is a pure function of the building id, so every session and every
//! client places the slab identically.
//!
//! The constants are part of the contract: a 32-bit polynomial hash with
//! multiplier 31 over the id's UTF-8 bytes, fed through one round of the
//! mulberry32 mix. Independent implementations that follow the same
//! constants agree bit-for-bit.

/// Hashes a building id to a non-zero 32-bit seed.
///
/// Polynomial hash, multiplier 31, wrapping at 32 bits; absolute value
/// plus one guarantees the seed is always positive.
#[must_use]
pub fn seed(id: &str) -> u32 {
    let mut hash: i32 = 0;
    for byte in id.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(byte));
    }
    hash.unsigned_abs() + 1
}

/// One round of the mulberry32 mix, mapping a seed to a float in
/// `[0, 1)`.
#[must_use]
pub fn unit_offset(seed: u32) -> f64 {
    let mut t = seed.wrapping_add(0x6D2B_79F5);
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    f64::from(t ^ (t >> 14)) / 4_294_967_296.0
}

/// Computes the elevation at which the vacancy sub-volume starts.
///
/// The offset is drawn from `[0, height - vacancy_height)`; when the
/// sub-volume fills (or would exceed) the building there is no slack and
/// the base is 0. For a fixed id and fixed heights the result is
/// reproducible across sessions.
#[must_use]
pub fn base_offset(id: &str, height_m: f64, vacancy_height_m: f64) -> f64 {
    let range = (height_m - vacancy_height_m).max(0.0);
    if range > 0.0 {
        unit_offset(seed(id)) * range
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_deterministic() {
        assert_eq!(seed("bldg-123"), seed("bldg-123"));
    }

    #[test]
    fn seed_is_always_positive() {
        for id in ["", "a", "bldg-123", "オフィス", "some-very-long-identifier"] {
            assert!(seed(id) > 0, "seed for {id:?} was zero");
        }
    }

    #[test]
    fn seed_distinguishes_ids() {
        assert_ne!(seed("bldg-1"), seed("bldg-2"));
    }

    #[test]
    fn unit_offset_is_in_unit_interval() {
        for raw in [1, 2, 1_000, u32::MAX, seed("bldg-123")] {
            let x = unit_offset(raw);
            assert!((0.0..1.0).contains(&x), "offset {x} out of range");
        }
    }

    #[test]
    fn base_offset_is_reproducible() {
        let a = base_offset("bldg-123", 40.0, 12.0);
        let b = base_offset("bldg-123", 40.0, 12.0);
        assert!((a - b).abs() < f64::EPSILON);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn base_plus_vacancy_never_exceeds_height() {
        for (height, vacancy) in [(40.0, 12.0), (34.0, 34.0), (10.0, 0.0), (3.0, 2.9)] {
            for id in ["a", "b", "bldg-123"] {
                let base = base_offset(id, height, vacancy);
                assert!(base >= 0.0);
                assert!(
                    base + vacancy <= height,
                    "{id}: base {base} + vacancy {vacancy} exceeds {height}"
                );
            }
        }
    }

    #[test]
    fn full_height_vacancy_sits_at_ground() {
        assert!(base_offset("bldg-123", 34.0, 34.0).abs() < f64::EPSILON);
    }

    #[test]
    fn oversized_vacancy_sits_at_ground() {
        assert!(base_offset("bldg-123", 34.0, 50.0).abs() < f64::EPSILON);
    }
}
