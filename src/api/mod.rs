//! API Module
//!
//! HTTP handlers and routing for the parts REST API.
//!
//! # Endpoints
//! - `POST /api/parts` - Create a part
//! - `GET /api/parts` - List all parts
//! - `GET /api/parts/:id` - Get a part by part number
//! - `PATCH /api/parts/:id` - Partially update a part
//! - `DELETE /api/parts/:id` - Delete a part
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
