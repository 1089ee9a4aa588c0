//! Background Tasks Module
//!
//! Periodic maintenance work running alongside the HTTP server.

pub mod cleanup;

pub use cleanup::spawn_cleanup_task;
