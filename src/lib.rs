//! Parts Tracker - inventory parts REST backend
//!
//! CRUD over Part records with TTL response caching and explicit invalidation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
