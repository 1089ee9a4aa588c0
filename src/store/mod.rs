//! Store Module
//!
//! In-process document store for parts. Documents are keyed by their native
//! `id`; the domain-facing `partNumber` is a rename of that key applied at
//! this module's boundary on every read and write.

mod document;
mod parts;
mod stats;


// Re-export public types
pub use document::PartDocument;
pub use parts::{PartStore, StoreError};
pub use stats::StoreStats;
