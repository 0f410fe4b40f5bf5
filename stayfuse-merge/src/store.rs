//! Reconciliation Store
//!
//! Keyed map from hotel identity to the single authoritative canonical
//! record. Owns the replacement policy: a challenger replaces the incumbent
//! only when its score is non-negative and at least as high; ties favor the
//! newer candidate. Records are never deleted.
//!
//! The score is an internal ranking artifact kept beside the record, not
//! inside it, so every read path returns a score-free shape.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use stayfuse_common::Hotel;
use tracing::debug;

/// Stored record plus the score it won with
#[derive(Debug, Clone)]
struct StoredRecord {
    hotel: Hotel,
    score: i64,
}

/// What `select` did with a scored candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// No incumbent; candidate stored
    Inserted,
    /// Candidate scored at least as high as the incumbent and replaced it
    Replaced,
    /// Candidate scored lower than the incumbent, or negative; incumbent kept
    Discarded,
}

/// Cloneable handle to the in-memory reconciliation store
#[derive(Debug, Clone, Default)]
pub struct HotelStore {
    records: Arc<RwLock<HashMap<String, StoredRecord>>>,
}

impl HotelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a scored candidate becomes the authoritative record for
    /// its identity.
    ///
    /// An absent identity accepts any candidate, including a negative-scoring
    /// one. Once present, replacement requires `score >= 0` and
    /// `score >= existing`; equal scores overwrite (last writer wins among
    /// equally-scored contenders).
    pub fn select(&self, candidate: Hotel, score: i64) -> SelectOutcome {
        let id = candidate.id.clone();
        let mut records = self.records.write().expect("hotel store lock poisoned");

        let decision = match records.get(&id) {
            None => Some(SelectOutcome::Inserted),
            Some(existing) if score >= 0 && score >= existing.score => {
                Some(SelectOutcome::Replaced)
            }
            Some(_) => None,
        };

        let outcome = match decision {
            Some(outcome) => {
                records.insert(id.clone(), StoredRecord { hotel: candidate, score });
                outcome
            }
            None => SelectOutcome::Discarded,
        };

        debug!(id = %id, score, outcome = ?outcome, "Selection decided");
        outcome
    }

    /// Fetch the authoritative record for one identity. Total; score-free.
    pub fn get(&self, id: &str) -> Option<Hotel> {
        self.records
            .read()
            .expect("hotel store lock poisoned")
            .get(id)
            .map(|record| record.hotel.clone())
    }

    /// Fetch every authoritative record, ordered by identity for determinism.
    /// Total; score-free.
    pub fn get_all(&self) -> Vec<Hotel> {
        let records = self.records.read().expect("hotel store lock poisoned");
        let mut hotels: Vec<Hotel> = records.values().map(|r| r.hotel.clone()).collect();
        hotels.sort_by(|a, b| a.id.cmp(&b.id));
        hotels
    }

    /// Winning score for an identity. Internal ranking artifact, exposed for
    /// diagnostics only; never part of the public record shape.
    pub fn stored_score(&self, id: &str) -> Option<i64> {
        self.records
            .read()
            .expect("hotel store lock poisoned")
            .get(id)
            .map(|record| record.score)
    }

    pub fn len(&self) -> usize {
        self.records.read().expect("hotel store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: &str, name: &str) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_identity_accepts_any_candidate() {
        let store = HotelStore::new();
        assert_eq!(store.select(hotel("a", "first"), -3), SelectOutcome::Inserted);
        assert_eq!(store.get("a").unwrap().name, "first");
        assert_eq!(store.stored_score("a"), Some(-3));
    }

    #[test]
    fn test_lower_score_is_discarded() {
        let store = HotelStore::new();
        store.select(hotel("a", "incumbent"), 5);
        assert_eq!(store.select(hotel("a", "challenger"), 4), SelectOutcome::Discarded);
        assert_eq!(store.get("a").unwrap().name, "incumbent");
        assert_eq!(store.stored_score("a"), Some(5));
    }

    #[test]
    fn test_equal_score_last_writer_wins() {
        let store = HotelStore::new();
        store.select(hotel("a", "incumbent"), 5);
        assert_eq!(store.select(hotel("a", "challenger"), 5), SelectOutcome::Replaced);
        assert_eq!(store.get("a").unwrap().name, "challenger");
    }

    #[test]
    fn test_higher_score_replaces() {
        let store = HotelStore::new();
        store.select(hotel("a", "incumbent"), 5);
        assert_eq!(store.select(hotel("a", "challenger"), 6), SelectOutcome::Replaced);
        assert_eq!(store.get("a").unwrap().name, "challenger");
        assert_eq!(store.stored_score("a"), Some(6));
    }

    #[test]
    fn test_negative_challenger_never_replaces() {
        let store = HotelStore::new();
        store.select(hotel("a", "incumbent"), -5);
        // Even though -1 > -5, a negative challenger is discarded
        assert_eq!(store.select(hotel("a", "challenger"), -1), SelectOutcome::Discarded);
        assert_eq!(store.get("a").unwrap().name, "incumbent");
    }

    #[test]
    fn test_reads_are_total_and_ordered() {
        let store = HotelStore::new();
        assert!(store.get("missing").is_none());
        assert!(store.get_all().is_empty());

        store.select(hotel("b", "B"), 1);
        store.select(hotel("a", "A"), 1);
        let all = store.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "a");
        assert_eq!(all[1].id, "b");
    }

    #[test]
    fn test_one_record_per_identity() {
        let store = HotelStore::new();
        store.select(hotel("a", "one"), 1);
        store.select(hotel("a", "two"), 2);
        store.select(hotel("a", "three"), 3);
        assert_eq!(store.len(), 1);
    }
}
