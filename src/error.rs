//! Error types for the parts tracker API
//!
//! Provides the unified error taxonomy and the problem-style response
//! envelope `{type, title, status, detail, instance, errors}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

// == Field Error ==
/// A single violated rule, carrying the offending field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the payload field the rule applies to
    pub field: String,
    /// Human-readable message for the violation
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// == API Error Enum ==
/// Unified error type for the parts API.
///
/// Every variant carries the request path so the envelope can report it as
/// `instance`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// One or more payload fields violated validation rules
    #[error("Validation failed")]
    Validation {
        instance: String,
        errors: Vec<FieldError>,
    },

    /// A part with the same part number already exists
    #[error("Part already exists")]
    Conflict {
        instance: String,
        part_number: String,
    },

    /// No part matches the requested id
    #[error("Part not found")]
    NotFound { instance: String, id: String },

    /// No route matches the request path
    #[error("Route not found")]
    RouteNotFound { instance: String },

    /// Unexpected store or serialization failure
    #[error("Internal error: {detail}")]
    Internal { instance: String, detail: String },
}

// == Response Envelope ==
/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
    pub errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the response envelope for this error.
    pub fn to_body(&self) -> ErrorBody {
        let status = self.status();
        let (title, detail, instance, errors) = match self {
            ApiError::Validation { instance, errors } => {
                let detail = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                (
                    "Validation failed".to_string(),
                    detail,
                    instance.clone(),
                    Some(errors.clone()),
                )
            }
            ApiError::Conflict {
                instance,
                part_number,
            } => {
                let detail = format!("Part with partNumber {part_number} already exists");
                (
                    "Part already exists".to_string(),
                    detail.clone(),
                    instance.clone(),
                    Some(vec![FieldError::new("partNumber", detail)]),
                )
            }
            ApiError::NotFound { instance, id } => (
                "Part not found".to_string(),
                format!("Part with id {id} not found"),
                instance.clone(),
                None,
            ),
            ApiError::RouteNotFound { instance } => (
                "Not Found".to_string(),
                format!("Route {instance} not found"),
                instance.clone(),
                None,
            ),
            ApiError::Internal { instance, detail } => (
                "Internal Server Error".to_string(),
                detail.clone(),
                instance.clone(),
                None,
            ),
        };

        ErrorBody {
            error_type: format!("https://httpstatuses.com/{}", status.as_u16()),
            title,
            status: status.as_u16(),
            detail,
            instance,
            errors,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.to_body();

        match &self {
            ApiError::Internal { instance, detail } => {
                error!(instance = %instance, detail = %detail, "request failed");
            }
            _ => {
                debug!(instance = %body.instance, title = %body.title, "request rejected");
            }
        }

        (self.status(), Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the parts API.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_aggregates_errors() {
        let err = ApiError::Validation {
            instance: "/api/parts".to_string(),
            errors: vec![
                FieldError::new("description", "Description is required"),
                FieldError::new("locationCode", "Location code is required"),
            ],
        };

        let body = err.to_body();
        assert_eq!(body.status, 400);
        assert_eq!(body.title, "Validation failed");
        assert_eq!(body.error_type, "https://httpstatuses.com/400");
        assert_eq!(body.instance, "/api/parts");
        assert_eq!(
            body.detail,
            "Description is required, Location code is required"
        );
        assert_eq!(body.errors.unwrap().len(), 2);
    }

    #[test]
    fn test_conflict_body_cites_part_number() {
        let err = ApiError::Conflict {
            instance: "/api/parts".to_string(),
            part_number: "PN-1".to_string(),
        };

        let body = err.to_body();
        assert_eq!(body.status, 400);
        assert_eq!(body.title, "Part already exists");
        let errors = body.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "partNumber");
    }

    #[test]
    fn test_not_found_body() {
        let err = ApiError::NotFound {
            instance: "/api/parts/PN-9".to_string(),
            id: "PN-9".to_string(),
        };

        let body = err.to_body();
        assert_eq!(body.status, 404);
        assert_eq!(body.detail, "Part with id PN-9 not found");
        assert!(body.errors.is_none());
    }

    #[test]
    fn test_route_not_found_body() {
        let err = ApiError::RouteNotFound {
            instance: "/api/unknown".to_string(),
        };

        let body = err.to_body();
        assert_eq!(body.status, 404);
        assert_eq!(body.title, "Not Found");
        assert_eq!(body.detail, "Route /api/unknown not found");
    }

    #[test]
    fn test_envelope_serializes_type_field() {
        let err = ApiError::Internal {
            instance: "/api/parts".to_string(),
            detail: "boom".to_string(),
        };

        let json = serde_json::to_value(err.to_body()).unwrap();
        assert_eq!(json["type"], "https://httpstatuses.com/500");
        assert_eq!(json["status"], 500);
        assert_eq!(json["errors"], serde_json::Value::Null);
    }
}
