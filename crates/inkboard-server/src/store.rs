//! The drawing document store: ownership-scoped CRUD.

use crate::error::ApiError;
use dashmap::DashMap;
use inkboard_core::{Stroke, validate_strokes};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use uuid::Uuid;

/// A stored drawing document.
///
/// `owner` is immutable after creation; `updated_at` is refreshed on every
/// successful mutation. Stroke order is rendering order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingRecord {
    pub id: String,
    pub owner: String,
    pub name: String,
    pub strokes: Vec<Stroke>,
    /// Unix epoch milliseconds.
    pub created_at: u64,
    /// Unix epoch milliseconds.
    pub updated_at: u64,
}

/// A candidate document body as submitted by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Omitted on an update means "keep the stored strokes".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Stroke>>,
    /// Accepted on the wire but always discarded: the store stamps the
    /// authenticated identity, never a client-supplied owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// In-memory drawing store keyed by document id.
///
/// Every operation is scoped to the calling owner. Update and delete
/// answer an ownership mismatch and a missing id with the same
/// [`ApiError::NotFound`], so callers can never probe for documents they
/// do not own. Concurrency is last-write-wins per document; there is no
/// version token.
#[derive(Debug, Default)]
pub struct DrawingStore {
    drawings: DashMap<String, DrawingRecord>,
}

impl DrawingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents owned by `owner`, oldest first.
    pub fn list(&self, owner: &str) -> Vec<DrawingRecord> {
        let mut records: Vec<DrawingRecord> = self
            .drawings
            .iter()
            .filter(|entry| entry.owner == owner)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        records
    }

    /// Validate, stamp ownership and timestamps, assign an id, persist.
    ///
    /// Owner stamping sits between validation and the write and is never
    /// skippable, regardless of which fields the caller supplied.
    pub fn create(&self, owner: &str, body: DrawingBody) -> Result<DrawingRecord, ApiError> {
        let strokes = body.strokes.unwrap_or_default();
        validate_strokes(&strokes)?;

        let now = now_millis();
        let record = DrawingRecord {
            id: Uuid::new_v4().to_string(),
            owner: owner.to_string(),
            name: body.name.unwrap_or_else(|| "Untitled".to_string()),
            strokes,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %record.id, owner = %record.owner, "drawing created");
        self.drawings.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    /// Replace the mutable fields of an owned document.
    pub fn update(
        &self,
        owner: &str,
        id: &str,
        body: DrawingBody,
    ) -> Result<DrawingRecord, ApiError> {
        if let Some(strokes) = &body.strokes {
            validate_strokes(strokes)?;
        }

        let mut entry = self.drawings.get_mut(id).ok_or(ApiError::NotFound)?;
        if entry.owner != owner {
            // Indistinguishable from a missing id
            return Err(ApiError::NotFound);
        }

        if let Some(name) = body.name {
            entry.name = name;
        }
        if let Some(strokes) = body.strokes {
            entry.strokes = strokes;
        }
        entry.updated_at = now_millis();
        Ok(entry.value().clone())
    }

    /// Permanently remove an owned document. No soft delete, no undo.
    pub fn delete(&self, owner: &str, id: &str) -> Result<(), ApiError> {
        self.drawings
            .remove_if(id, |_, record| record.owner == owner)
            .map(|_| ())
            .ok_or(ApiError::NotFound)
    }

    /// Fetch a record regardless of owner. Test and diagnostics hook, not
    /// part of the request surface.
    pub fn get(&self, id: &str) -> Option<DrawingRecord> {
        self.drawings.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }
}
