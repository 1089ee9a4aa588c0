//! Cache Module
//!
//! TTL cache for serialized read responses, keyed by request signature
//! (`"{METHOD}:{path}"`). Entries are advisory: losing one costs a store
//! query, never correctness.

mod entry;
mod stats;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Signature Helpers ==
/// Builds the cache signature for a request.
pub fn signature(method: &str, path: &str) -> String {
    format!("{method}:{path}")
}

/// Strips the trailing path segment, deriving the collection path from an
/// item path: `/api/parts/PN-1` becomes `/api/parts`.
pub fn parent_path(path: &str) -> &str {
    path.rfind('/').map(|idx| &path[..idx]).unwrap_or(path)
}
