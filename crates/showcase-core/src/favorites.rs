//! Favorites
//!
//! Item identifiers the user starred. Loaded once at startup, and every
//! mutation overwrites the persisted list in full (single-client).

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Storage key of the serialized id list
pub const FAVORITES_KEY: &str = "__teams_hq_favs";

/// Set of favorite ids, kept in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the persisted set; absent key is an empty set
    pub fn try_load<S: KeyValueStore>(store: &S) -> Result<Self, StorageError> {
        let Some(raw) = store.read(FAVORITES_KEY)? else {
            return Ok(Self::default());
        };
        let mut set: FavoriteSet =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                key: FAVORITES_KEY.to_string(),
                reason: e.to_string(),
            })?;
        let mut seen = std::collections::HashSet::new();
        set.ids.retain(|id| seen.insert(id.clone()));
        Ok(set)
    }

    /// Like [`try_load`](Self::try_load) but degrades to an empty set
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match Self::try_load(store) {
            Ok(set) => {
                log::debug!("loaded {} favorites", set.len());
                set
            }
            Err(e) => {
                log::warn!("favorites reset: {}", e);
                Self::default()
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Add if absent, remove if present. Returns whether `id` is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.ids.retain(|x| x != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Overwrite the persisted value with the whole set
    pub fn flush<S: KeyValueStore>(&self, store: &S) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.ids).map_err(|e| StorageError::Write {
            key: FAVORITES_KEY.to_string(),
            reason: e.to_string(),
        })?;
        store.write(FAVORITES_KEY, &raw)
    }

    /// Toggle then flush; the in-memory change stands even if the write fails
    pub fn toggle_and_flush<S: KeyValueStore>(
        &mut self,
        id: &str,
        store: &S,
    ) -> Result<bool, StorageError> {
        let now = self.toggle(id);
        self.flush(store)?;
        Ok(now)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favs = FavoriteSet::new();
        assert!(favs.toggle("comp-card"));
        assert!(favs.contains("comp-card"));
        assert!(!favs.toggle("comp-card"));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_every_toggle_overwrites_storage() {
        let store = MemoryStore::new();
        let mut favs = FavoriteSet::load(&store);

        favs.toggle_and_flush("comp-card", &store).unwrap();
        favs.toggle_and_flush("comp-stepper", &store).unwrap();
        favs.toggle_and_flush("comp-card", &store).unwrap();

        assert_eq!(store.write_count(), 3);
        assert_eq!(
            store.read(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["comp-stepper"]"#)
        );
    }

    #[test]
    fn test_reload_restores_order() {
        let store = MemoryStore::new().with_entry(FAVORITES_KEY, r#"["b","a","b"]"#);
        let favs = FavoriteSet::load(&store);
        assert_eq!(favs.ids(), &["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        let store = MemoryStore::new().with_entry(FAVORITES_KEY, "{not json");
        assert!(matches!(
            FavoriteSet::try_load(&store),
            Err(StorageError::Corrupt { .. })
        ));
        assert!(FavoriteSet::load(&store).is_empty());
    }
}
