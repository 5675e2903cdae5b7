//! Match scoring between a normalized query and one building record.
//!
//! Score accumulates weighted credit per distinguishing field, most
//! specific first: a building-name containment outweighs an exact
//! street-number match, which outweighs mere street-name token overlap.
//! The weights are pinned as part of the engine contract. A score of 0
//! means "not a match" and is excluded from ranked output.

use vacancy_map_building_models::BuildingRecord;

use crate::normalize::normalize;

/// Credit when the building name contains the query or vice versa.
pub const NAME_WEIGHT: u32 = 3;
/// Credit when the street-number token matches exactly.
pub const NUMBER_WEIGHT: u32 = 2;
/// Credit when the street-name tokens overlap.
pub const STREET_WEIGHT: u32 = 1;
/// Shared street tokens shorter than this ("st", "of") are too common to
/// count as overlap.
pub const MIN_STREET_TOKEN_LEN: usize = 3;

/// Scores a record against an already-normalized query.
///
/// Missing record fields contribute no credit; a query with no tokens
/// matches no record.
#[must_use]
pub fn score(query_norm: &str, record: &BuildingRecord) -> u32 {
    let query_tokens: Vec<&str> = query_norm.split_whitespace().collect();
    if query_tokens.is_empty() {
        return 0;
    }

    let mut total = 0;

    if let Some(name) = &record.name {
        let name_norm = normalize(name);
        if !name_norm.is_empty()
            && (query_norm.contains(&name_norm) || name_norm.contains(query_norm))
        {
            total += NAME_WEIGHT;
        }
    }

    if let Some(number) = &record.number {
        let number_norm = normalize(number);
        if !number_norm.is_empty() && query_tokens.contains(&number_norm.as_str()) {
            total += NUMBER_WEIGHT;
        }
    }

    if let Some(street) = &record.street {
        let street_norm = normalize(street);
        let overlaps = street_norm
            .split_whitespace()
            .any(|token| token.len() >= MIN_STREET_TOKEN_LEN && query_tokens.contains(&token));
        if overlaps {
            total += STREET_WEIGHT;
        }
    }

    total
}
