//! Part Store Module
//!
//! The document store engine: ordered map of part documents with
//! single-document CRUD operations and operation counters.

use std::collections::BTreeMap;

use chrono::Utc;
use thiserror::Error;

use crate::models::{NewPart, Part, PartChanges};
use crate::store::{PartDocument, StoreStats};

// == Store Error ==
/// Failures the store itself can produce.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Identity uniqueness constraint violated on insert
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}

// == Part Store ==
/// Document storage for parts, keyed by the native id.
///
/// `find_all` returns documents in key order; that is the storage-native
/// order and nothing more is promised about it.
#[derive(Debug, Default)]
pub struct PartStore {
    /// Documents by native key
    documents: BTreeMap<String, PartDocument>,
    /// Operation counters
    stats: StoreStats,
}

impl PartStore {
    // == Constructor ==
    /// Creates an empty PartStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Find ==
    /// Looks up a single part by id.
    pub fn find(&mut self, id: &str) -> Option<Part> {
        self.stats.record_find();
        self.documents.get(id).map(PartDocument::to_part)
    }

    // == Find All ==
    /// Returns every part in storage-native (key) order.
    pub fn find_all(&mut self) -> Vec<Part> {
        self.stats.record_find_all();
        self.documents.values().map(PartDocument::to_part).collect()
    }

    // == Insert ==
    /// Inserts a new part, rejecting a duplicate id.
    ///
    /// The uniqueness check here is the store-level constraint; callers that
    /// pre-check existence still rely on it to resolve the check-then-insert
    /// race between concurrent creates.
    pub fn insert(&mut self, part: NewPart) -> Result<Part, StoreError> {
        self.stats.record_insert();

        if self.documents.contains_key(&part.part_number) {
            return Err(StoreError::DuplicateKey(part.part_number));
        }

        let doc = PartDocument::from_new(part, Utc::now());
        let stored = doc.to_part();
        self.documents.insert(doc.id.clone(), doc);
        Ok(stored)
    }

    // == Update By Id ==
    /// Applies the fields present in `changes` to the document with the
    /// given id. Returns the updated part, or None when the id is absent.
    pub fn update_by_id(&mut self, id: &str, changes: &PartChanges) -> Option<Part> {
        self.stats.record_update();

        let doc = self.documents.get_mut(id)?;
        doc.apply(changes, Utc::now());
        Some(doc.to_part())
    }

    // == Delete By Id ==
    /// Removes the document with the given id. Returns whether anything was
    /// removed.
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        self.stats.record_delete();
        self.documents.remove(id).is_some()
    }

    // == Stats ==
    /// Returns the operation counters.
    pub fn stats(&self) -> StoreStats {
        self.stats.clone()
    }

    // == Length ==
    /// Returns the number of stored parts.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn new_part(part_number: &str) -> NewPart {
        NewPart {
            part_number: part_number.to_string(),
            description: "M3 hex bolt".to_string(),
            quantity_on_hand: 10,
            location_code: "A-01".to_string(),
            last_stock_check_date: None,
            is_deleted: false,
        }
    }

    #[test]
    fn test_store_new() {
        let store = PartStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_and_find() {
        let mut store = PartStore::new();

        let stored = store.insert(new_part("PN-100")).unwrap();
        assert_eq!(stored.part_number, "PN-100");

        let found = store.find("PN-100").unwrap();
        assert_eq!(found, stored);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_find_nonexistent() {
        let mut store = PartStore::new();
        assert!(store.find("PN-404").is_none());
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut store = PartStore::new();
        store.insert(new_part("PN-100")).unwrap();

        let result = store.insert(new_part("PN-100"));
        assert!(matches!(result, Err(StoreError::DuplicateKey(id)) if id == "PN-100"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_preserves_original() {
        let mut store = PartStore::new();
        store.insert(new_part("PN-100")).unwrap();

        let mut second = new_part("PN-100");
        second.description = "different".to_string();
        let _ = store.insert(second);

        assert_eq!(store.find("PN-100").unwrap().description, "M3 hex bolt");
    }

    #[test]
    fn test_find_all_key_order() {
        let mut store = PartStore::new();
        store.insert(new_part("PN-300")).unwrap();
        store.insert(new_part("PN-100")).unwrap();
        store.insert(new_part("PN-200")).unwrap();

        let ids: Vec<String> = store
            .find_all()
            .into_iter()
            .map(|p| p.part_number)
            .collect();
        assert_eq!(ids, vec!["PN-100", "PN-200", "PN-300"]);
    }

    #[test]
    fn test_update_partial() {
        let mut store = PartStore::new();
        store.insert(new_part("PN-100")).unwrap();

        let changes = PartChanges {
            description: Some("M4 hex bolt".to_string()),
            ..PartChanges::default()
        };
        let updated = store.update_by_id("PN-100", &changes).unwrap();

        assert_eq!(updated.description, "M4 hex bolt");
        assert_eq!(updated.quantity_on_hand, 10);
        assert_eq!(updated.location_code, "A-01");
        assert_eq!(updated.part_number, "PN-100");
    }

    #[test]
    fn test_update_nonexistent() {
        let mut store = PartStore::new();
        let result = store.update_by_id("PN-404", &PartChanges::default());
        assert!(result.is_none());
    }

    #[test]
    fn test_delete() {
        let mut store = PartStore::new();
        store.insert(new_part("PN-100")).unwrap();

        assert!(store.delete_by_id("PN-100"));
        assert!(store.is_empty());
        assert!(store.find("PN-100").is_none());
    }

    #[test]
    fn test_delete_nonexistent() {
        let mut store = PartStore::new();
        assert!(!store.delete_by_id("PN-404"));
    }

    #[test]
    fn test_delete_twice_reports_absent() {
        let mut store = PartStore::new();
        store.insert(new_part("PN-100")).unwrap();

        assert!(store.delete_by_id("PN-100"));
        assert!(!store.delete_by_id("PN-100"));
    }

    #[test]
    fn test_stats_counters() {
        let mut store = PartStore::new();
        store.insert(new_part("PN-100")).unwrap();
        let _ = store.find("PN-100");
        let _ = store.find("PN-404");
        let _ = store.find_all();
        let _ = store.update_by_id("PN-100", &PartChanges::default());
        let _ = store.delete_by_id("PN-100");

        let stats = store.stats();
        assert_eq!(stats.inserts, 1);
        assert_eq!(stats.finds, 2);
        assert_eq!(stats.find_alls, 1);
        assert_eq!(stats.updates, 1);
        assert_eq!(stats.deletes, 1);
    }
}
