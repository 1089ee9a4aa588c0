//! Models Module
//!
//! Domain entity, request DTOs, and response DTOs for the parts API.

pub mod part;
pub mod requests;
pub mod responses;

pub use part::{NewPart, Part, PartChanges};
pub use requests::{CreatePartRequest, UpdatePartRequest};
pub use responses::HealthResponse;
