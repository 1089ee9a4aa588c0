//! Cache Entry Module
//!
//! A single cached response body with its expiration timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// One cached response.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The serialized response body
    pub body: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry expiring `ttl_seconds` from now.
    pub fn new(body: String, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            body,
            created_at: now,
            expires_at: now + ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: expired once the current time is greater than or
    /// equal to the expiration time.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
