//! The in-memory search index.
//!
//! Holds every building record in dataset order plus an id map for O(1)
//! lookups. Built once at startup; never mutated afterwards, so it can
//! be shared across request workers without locking.

use std::collections::BTreeMap;

use serde::Serialize;
use vacancy_map_building_models::BuildingRecord;

use crate::normalize::normalize;
use crate::score::score;

/// A scored match with a borrow of the underlying record, for callers
/// that need more fields than the ranked payload carries.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    /// The matched building.
    pub record: &'a BuildingRecord,
    /// Relevance score (> 0; zero-scored records are filtered out).
    pub score: u32,
}

impl SearchHit<'_> {
    /// Projects the hit into the owned ranked-result shape.
    #[must_use]
    pub fn to_result(&self) -> SearchResult {
        SearchResult {
            id: self.record.id.clone(),
            address: self.record.display_address(),
            score: self.score,
        }
    }
}

/// A ranked search result. Produced fresh per query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Building id.
    pub id: String,
    /// Human-readable address.
    pub address: String,
    /// Relevance score.
    pub score: u32,
}

/// All building records, indexed for search and id lookup.
pub struct SearchIndex {
    records: Vec<BuildingRecord>,
    by_id: BTreeMap<String, usize>,
}

impl SearchIndex {
    /// Builds the index from records in dataset order.
    ///
    /// Duplicate ids are a data-integrity problem in the source dataset,
    /// not a fatal one: the last-loaded record wins the id slot and the
    /// collision is logged.
    #[must_use]
    pub fn new(records: Vec<BuildingRecord>) -> Self {
        let mut by_id = BTreeMap::new();
        for (idx, record) in records.iter().enumerate() {
            if let Some(previous) = by_id.insert(record.id.clone(), idx) {
                log::warn!(
                    "Duplicate building id {:?} (records {previous} and {idx}); last one wins",
                    record.id
                );
            }
        }
        Self { records, by_id }
    }

    /// Number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in dataset order.
    #[must_use]
    pub fn records(&self) -> &[BuildingRecord] {
        &self.records
    }

    /// Returns the top-`k` records matching `query`, best first.
    ///
    /// The query is normalized first; a query that normalizes to nothing
    /// returns an empty result rather than matching everything. Ties are
    /// broken by dataset order (stable sort), so identical input always
    /// ranks identically.
    #[must_use]
    pub fn search(&self, query: &str, k: usize) -> Vec<SearchHit<'_>> {
        let query_norm = normalize(query);
        if query_norm.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .records
            .iter()
            .map(|record| SearchHit {
                record,
                score: score(&query_norm, record),
            })
            .filter(|hit| hit.score > 0)
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(k);
        hits
    }

    /// Exact lookup by id. `None` means the id is unknown, never a
    /// default record.
    #[must_use]
    pub fn lookup_by_id(&self, id: &str) -> Option<&BuildingRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// The single best match for `query`, if any record scored above
    /// zero. No threshold beyond that is applied.
    #[must_use]
    pub fn best_match(&self, query: &str) -> Option<SearchHit<'_>> {
        self.search(query, 1).into_iter().next()
    }
}
