//! HTTP surface for the drawing store.

use crate::auth::Identity;
use crate::error::ApiError;
use crate::store::{DrawingBody, DrawingRecord, DrawingStore};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the router over a shared store.
pub fn router(store: Arc<DrawingStore>) -> Router {
    Router::new()
        .route("/api/drawings", get(list_drawings).post(create_drawing))
        .route(
            "/api/drawings/{id}",
            put(update_drawing).delete(delete_drawing),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Health check
async fn health() -> &'static str {
    "ok"
}

/// All drawings owned by the caller.
async fn list_drawings(
    State(store): State<Arc<DrawingStore>>,
    identity: Identity,
) -> Json<Vec<DrawingRecord>> {
    Json(store.list(identity.as_str()))
}

/// Create a drawing; the owner is always the authenticated identity.
async fn create_drawing(
    State(store): State<Arc<DrawingStore>>,
    identity: Identity,
    Json(body): Json<DrawingBody>,
) -> Result<(StatusCode, Json<DrawingRecord>), ApiError> {
    let record = store.create(identity.as_str(), body)?;
    info!("drawing {} created for {}", record.id, record.owner);
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update a drawing the caller owns.
async fn update_drawing(
    State(store): State<Arc<DrawingStore>>,
    identity: Identity,
    Path(id): Path<String>,
    Json(body): Json<DrawingBody>,
) -> Result<Json<DrawingRecord>, ApiError> {
    let record = store.update(identity.as_str(), &id, body)?;
    Ok(Json(record))
}

/// Delete a drawing the caller owns.
async fn delete_drawing(
    State(store): State<Arc<DrawingStore>>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete(identity.as_str(), &id)?;
    info!("drawing {} deleted by {}", id, identity.as_str());
    Ok(StatusCode::NO_CONTENT)
}
