//! Session-local override store.
//!
//! The only mutable shared state in the system. Keyed by building id and
//! held for the process lifetime only; nothing is persisted. Writes are
//! idempotent set/clear operations with last-write-wins semantics;
//! readers never observe a partially-applied override because every
//! access goes through the lock as one unit.

use std::collections::BTreeMap;
use std::sync::RwLock;

use vacancy_map_building_models::OverrideRecord;

/// Id-keyed store of user-submitted available-area overrides.
///
/// Injected into resolver call sites by reference rather than living in
/// a global, so resolution stays testable as a pure function of its
/// inputs.
#[derive(Debug, Default)]
pub struct OverrideStore {
    entries: RwLock<BTreeMap<String, OverrideRecord>>,
}

impl OverrideStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) the override for `id`.
    ///
    /// An override with `available_area_m2: None` is still an override:
    /// its presence is meaningful and distinct from a zero value.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn set(&self, id: &str, available_area_m2: Option<f64>) {
        self.entries
            .write()
            .expect("override store lock poisoned")
            .insert(id.to_string(), OverrideRecord { available_area_m2 });
    }

    /// Removes the override for `id`, returning whether one was present.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn clear(&self, id: &str) -> bool {
        self.entries
            .write()
            .expect("override store lock poisoned")
            .remove(id)
            .is_some()
    }

    /// Returns a copy of the override for `id`, if present.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<OverrideRecord> {
        self.entries
            .read()
            .expect("override store lock poisoned")
            .get(id)
            .copied()
    }

    /// Number of buildings with an override.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("override store lock poisoned")
            .len()
    }

    /// Whether no overrides are set.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let store = OverrideStore::new();
        store.set("bldg-1", Some(500.0));
        assert_eq!(
            store.get("bldg-1"),
            Some(OverrideRecord {
                available_area_m2: Some(500.0)
            })
        );
    }

    #[test]
    fn absent_id_is_none() {
        assert_eq!(OverrideStore::new().get("bldg-1"), None);
    }

    #[test]
    fn set_without_value_is_still_present() {
        let store = OverrideStore::new();
        store.set("bldg-1", None);
        assert_eq!(
            store.get("bldg-1"),
            Some(OverrideRecord {
                available_area_m2: None
            })
        );
    }

    #[test]
    fn last_write_wins() {
        let store = OverrideStore::new();
        store.set("bldg-1", Some(500.0));
        store.set("bldg-1", Some(750.0));
        assert_eq!(
            store.get("bldg-1").and_then(|o| o.available_area_m2),
            Some(750.0)
        );
    }

    #[test]
    fn clear_reports_presence() {
        let store = OverrideStore::new();
        store.set("bldg-1", Some(500.0));
        assert!(store.clear("bldg-1"));
        assert!(!store.clear("bldg-1"));
        assert_eq!(store.get("bldg-1"), None);
    }

    #[test]
    fn clear_is_idempotent_on_absent_id() {
        assert!(!OverrideStore::new().clear("bldg-1"));
    }

    #[test]
    fn tracks_len() {
        let store = OverrideStore::new();
        assert!(store.is_empty());
        store.set("bldg-1", Some(1.0));
        store.set("bldg-2", None);
        assert_eq!(store.len(), 2);
        store.clear("bldg-1");
        assert_eq!(store.len(), 1);
    }
}
