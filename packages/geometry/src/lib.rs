#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Footprint geometry for the vacancy map.
//!
//! Covers the full path from a raw footprint ring to the renderable
//! vacant sub-volume:
//!
//! - [`normalize`] — remaps rings expressed in unit-square coordinates
//!   back to real-world lon/lat.
//! - [`area`] — spherical-excess footprint area in square meters.
//! - [`offset`] — deterministic per-building vertical offset (pinned
//!   hash + mix constants; reproducible bit-for-bit across sessions).
//! - [`volume`] — extrudes the footprint at the computed base offset.

pub mod area;
pub mod normalize;
pub mod offset;
pub mod volume;

pub use area::footprint_area_m2;
pub use normalize::denormalize_ring;
pub use offset::{base_offset, seed, unit_offset};
pub use volume::{VacancyVolume, derive_vacancy_volume};
