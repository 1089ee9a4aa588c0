//! API Routes
//!
//! Configures the Axum router with the parts endpoints.

use axum::{
    extract::OriginalUri,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;

use super::handlers::{
    create_part, delete_part, get_part, health_handler, list_parts, update_part, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/parts` - Create a part
/// - `GET /api/parts` - List all parts
/// - `GET /api/parts/:id` - Get a part by part number
/// - `PATCH /api/parts/:id` - Partially update a part
/// - `DELETE /api/parts/:id` - Delete a part
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/parts", post(create_part).get(list_parts))
        .route(
            "/api/parts/:id",
            get(get_part).patch(update_part).delete(delete_part),
        )
        .route("/health", get(health_handler))
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unmatched routes get the uniform 404 envelope.
async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound {
        instance: uri.path().to_string(),
    }
}
