//! Inkboard Drawing Store Server
//!
//! Ownership-scoped CRUD over drawing documents, exposed as an HTTP
//! collection resource. Every operation requires an authenticated
//! identity; documents are only ever visible to their owner.

pub mod auth;
pub mod error;
pub mod routes;
pub mod store;

pub use auth::Identity;
pub use error::ApiError;
pub use routes::router;
pub use store::{DrawingBody, DrawingRecord, DrawingStore};

use std::sync::Arc;

/// Build the application router over a fresh in-memory store.
pub fn app() -> axum::Router {
    routes::router(Arc::new(DrawingStore::new()))
}
