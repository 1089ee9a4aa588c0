//! Response DTOs for the parts API
//!
//! Defines the structure of outgoing HTTP response bodies that are not the
//! Part entity itself.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Seconds since the process started serving
    pub uptime: i64,
    /// Health status message
    pub message: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Process start timestamp in ISO 8601 format
    pub start_date: String,
}

impl HealthResponse {
    /// Creates a HealthResponse for a process started at `started_at`.
    pub fn since(started_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            uptime: (now - started_at).num_seconds(),
            message: "OK".to_string(),
            timestamp: now.to_rfc3339(),
            start_date: started_at.to_rfc3339(),
        }
    }
}
