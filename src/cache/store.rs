//! Response Cache Module
//!
//! Signature-keyed storage of serialized response bodies with a fixed TTL
//! and explicit invalidation.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == Response Cache ==
/// TTL cache mapping request signatures to serialized response bodies.
#[derive(Debug)]
pub struct ResponseCache {
    /// Entries by request signature
    entries: HashMap<String, CacheEntry>,
    /// Hit/miss counters
    stats: CacheStats,
    /// TTL in seconds applied to every entry
    ttl: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live `ttl` seconds.
    pub fn new(ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Returns the cached body for a signature if a fresh entry exists.
    ///
    /// Expired entries are removed on the way and counted as misses.
    pub fn get(&mut self, signature: &str) -> Option<String> {
        match self.entries.get(signature) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(signature);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let body = entry.body.clone();
                self.stats.record_hit();
                Some(body)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a response body under a signature, resetting its TTL.
    pub fn set(&mut self, signature: impl Into<String>, body: String) {
        self.entries
            .insert(signature.into(), CacheEntry::new(body, self.ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Invalidates a signature. Returns whether an entry was removed.
    pub fn delete(&mut self, signature: &str) -> bool {
        let removed = self.entries.remove(signature).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Purge Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }

    // == Stats ==
    /// Returns current cache counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
