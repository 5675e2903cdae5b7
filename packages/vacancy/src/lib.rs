#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Vacancy semantics: how much of a building counts as vacant.
//!
//! - [`floors`] — floor count from explicit story fields or height.
//! - [`resolver`] — the effective vacancy fraction, combining the
//!   authoritative dataset value with any session override. The
//!   precedence (authoritative strictly dominates) is load-bearing and
//!   must never be reversed.
//! - [`store`] — the only mutable shared state in the system: the
//!   id-keyed map of user-submitted available-area overrides. Passed
//!   into resolver calls explicitly so the resolver stays a pure
//!   function of its arguments.

pub mod floors;
pub mod resolver;
pub mod store;

pub use floors::floors;
pub use resolver::resolve_vacancy_fraction;
pub use store::OverrideStore;
