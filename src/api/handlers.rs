//! API Handlers
//!
//! HTTP request handlers for the part resource lifecycle. Each write commits
//! to the store before any cache maintenance runs, and cache maintenance is
//! best-effort: it can cost a later read a store query, never correctness.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{self, ResponseCache};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{CreatePartRequest, HealthResponse, Part, UpdatePartRequest};
use crate::store::{PartStore, StoreError};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Part document store
    pub store: Arc<RwLock<PartStore>>,
    /// Read-response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Process start time, reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates a new AppState from store and cache instances.
    pub fn new(store: PartStore, cache: ResponseCache) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            cache: Arc::new(RwLock::new(cache)),
            started_at: Utc::now(),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(PartStore::new(), ResponseCache::new(config.cache_ttl))
    }
}

/// Responds with an already-serialized JSON body, so cached and freshly
/// computed responses stay byte-identical.
fn json_body(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Handler for POST /api/parts
///
/// Creates a part after checking that its part number is free. The store's
/// own uniqueness constraint backstops the check for concurrent creates
/// racing on the same part number; that outcome is a conflict, not an
/// internal error.
pub async fn create_part(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreatePartRequest>,
) -> Result<(StatusCode, Json<Part>)> {
    let instance = uri.path().to_string();

    let new_part = payload.validate(Utc::now()).map_err(|errors| {
        ApiError::Validation {
            instance: instance.clone(),
            errors,
        }
    })?;

    let created = {
        let mut store = state.store.write().await;
        if store.find(&new_part.part_number).is_some() {
            return Err(ApiError::Conflict {
                instance: instance.clone(),
                part_number: new_part.part_number,
            });
        }
        store.insert(new_part).map_err(|err| match err {
            StoreError::DuplicateKey(part_number) => ApiError::Conflict {
                instance: instance.clone(),
                part_number,
            },
        })?
    };

    debug!(part_number = %created.part_number, "part created");

    // Write committed; the list entry is stale now
    state
        .cache
        .write()
        .await
        .delete(&cache::signature("GET", &instance));

    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for GET /api/parts
///
/// Serves the cached list when a fresh entry exists, otherwise queries the
/// store. Empty results are returned but not cached.
pub async fn list_parts(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response> {
    let instance = uri.path().to_string();
    let signature = cache::signature("GET", &instance);

    if let Some(body) = state.cache.write().await.get(&signature) {
        debug!(signature = %signature, "cache hit");
        return Ok(json_body(StatusCode::OK, body));
    }
    debug!(signature = %signature, "cache miss");

    let parts = state.store.write().await.find_all();
    let body = serde_json::to_string(&parts).map_err(|err| ApiError::Internal {
        instance,
        detail: err.to_string(),
    })?;

    if !parts.is_empty() {
        state.cache.write().await.set(signature, body.clone());
    }

    Ok(json_body(StatusCode::OK, body))
}

/// Handler for GET /api/parts/:id
///
/// Same cache-first pattern as the list read, scoped to the item signature.
/// An existing part always repopulates its entry, even when unchanged.
pub async fn get_part(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Response> {
    let instance = uri.path().to_string();
    let signature = cache::signature("GET", &instance);

    if let Some(body) = state.cache.write().await.get(&signature) {
        debug!(signature = %signature, "cache hit");
        return Ok(json_body(StatusCode::OK, body));
    }
    debug!(signature = %signature, "cache miss");

    let part = state
        .store
        .write()
        .await
        .find(&id)
        .ok_or_else(|| ApiError::NotFound {
            instance: instance.clone(),
            id: id.clone(),
        })?;

    let body = serde_json::to_string(&part).map_err(|err| ApiError::Internal {
        instance,
        detail: err.to_string(),
    })?;

    state.cache.write().await.set(signature, body.clone());

    Ok(json_body(StatusCode::OK, body))
}

/// Handler for PATCH /api/parts/:id
///
/// Applies the fields present in the payload, then invalidates the item and
/// list cache entries; the next read recomputes them.
pub async fn update_part(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePartRequest>,
) -> Result<Json<Part>> {
    let instance = uri.path().to_string();

    let changes = payload.validate(Utc::now()).map_err(|errors| {
        ApiError::Validation {
            instance: instance.clone(),
            errors,
        }
    })?;

    let updated = state
        .store
        .write()
        .await
        .update_by_id(&id, &changes)
        .ok_or_else(|| ApiError::NotFound {
            instance: instance.clone(),
            id: id.clone(),
        })?;

    debug!(part_number = %id, "part updated");

    let mut cache_guard = state.cache.write().await;
    cache_guard.delete(&cache::signature("GET", &instance));
    cache_guard.delete(&cache::signature("GET", cache::parent_path(&instance)));

    Ok(Json(updated))
}

/// Handler for DELETE /api/parts/:id
///
/// Hard delete. Deleting an id that is already gone reports not-found
/// rather than silently succeeding.
pub async fn delete_part(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let instance = uri.path().to_string();

    if !state.store.write().await.delete_by_id(&id) {
        return Err(ApiError::NotFound { instance, id });
    }

    debug!(part_number = %id, "part deleted");

    let mut cache_guard = state.cache.write().await;
    cache_guard.delete(&cache::signature("GET", &instance));
    cache_guard.delete(&cache::signature("GET", cache::parent_path(&instance)));

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /health
///
/// Returns uptime and start time of the server.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::since(state.started_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    fn test_state() -> AppState {
        AppState::new(PartStore::new(), ResponseCache::new(3600))
    }

    fn create_request(part_number: &str) -> CreatePartRequest {
        CreatePartRequest {
            part_number: Some(part_number.to_string()),
            description: Some("M3 hex bolt".to_string()),
            quantity_on_hand: Some(10),
            location_code: Some("A-01".to_string()),
            last_stock_check_date: None,
            is_deleted: None,
        }
    }

    fn collection_uri() -> OriginalUri {
        OriginalUri(Uri::from_static("/api/parts"))
    }

    fn item_uri(id: &str) -> OriginalUri {
        OriginalUri(format!("/api/parts/{id}").parse().unwrap())
    }

    #[tokio::test]
    async fn test_create_and_get_part() {
        let state = test_state();

        let result = create_part(
            State(state.clone()),
            collection_uri(),
            Json(create_request("PN-100")),
        )
        .await;
        let (status, Json(created)) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.part_number, "PN-100");

        let response = get_part(
            State(state),
            item_uri("PN-100"),
            Path("PN-100".to_string()),
        )
        .await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() {
        let state = test_state();

        create_part(
            State(state.clone()),
            collection_uri(),
            Json(create_request("PN-100")),
        )
        .await
        .unwrap();

        let result = create_part(
            State(state),
            collection_uri(),
            Json(create_request("PN-100")),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_create_invalid_payload() {
        let state = test_state();

        let result = create_part(
            State(state),
            collection_uri(),
            Json(CreatePartRequest::default()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_get_nonexistent_part() {
        let state = test_state();

        let result = get_part(
            State(state),
            item_uri("PN-404"),
            Path("PN-404".to_string()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_part_then_delete_again() {
        let state = test_state();

        create_part(
            State(state.clone()),
            collection_uri(),
            Json(create_request("PN-100")),
        )
        .await
        .unwrap();

        let status = delete_part(
            State(state.clone()),
            item_uri("PN-100"),
            Path("PN-100".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let result = delete_part(
            State(state),
            item_uri("PN-100"),
            Path("PN-100".to_string()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_applies_partial_changes() {
        let state = test_state();

        create_part(
            State(state.clone()),
            collection_uri(),
            Json(create_request("PN-100")),
        )
        .await
        .unwrap();

        let patch = UpdatePartRequest {
            description: Some("M4 hex bolt".to_string()),
            ..UpdatePartRequest::default()
        };
        let Json(updated) = update_part(
            State(state),
            item_uri("PN-100"),
            Path("PN-100".to_string()),
            Json(patch),
        )
        .await
        .unwrap();

        assert_eq!(updated.description, "M4 hex bolt");
        assert_eq!(updated.quantity_on_hand, 10);
        assert_eq!(updated.location_code, "A-01");
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = test_state();
        let Json(health) = health_handler(State(state)).await;
        assert_eq!(health.message, "OK");
    }
}
