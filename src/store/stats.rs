//! Store Statistics Module
//!
//! Counts the operations executed against the part store. Tests use these
//! counters to observe whether a read was served from cache or hit the store.

use serde::Serialize;

// == Store Stats ==
/// Operation counters for the part store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    /// Single-document lookups
    pub finds: u64,
    /// Full-collection queries
    pub find_alls: u64,
    /// Insert attempts (including duplicate-key rejections)
    pub inserts: u64,
    /// Update-by-id calls
    pub updates: u64,
    /// Delete-by-id calls
    pub deletes: u64,
}

impl StoreStats {
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_find(&mut self) {
        self.finds += 1;
    }

    pub fn record_find_all(&mut self) {
        self.find_alls += 1;
    }

    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    pub fn record_delete(&mut self) {
        self.deletes += 1;
    }
}
