//! The drawing document: the unit of persistence.

use crate::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// A drawing as the client holds it.
///
/// Created in memory the moment the user starts drawing; `id` stays empty
/// until the store's create call assigns one. Stroke order is rendering
/// order: earlier strokes are painted first and may be occluded by later
/// ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingDocument {
    /// Store-assigned identifier, absent until first persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Document name.
    pub name: String,
    /// Strokes in rendering order.
    pub strokes: Vec<Stroke>,
}

impl Default for DrawingDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingDocument {
    /// Create a new empty, unsaved document.
    pub fn new() -> Self {
        Self {
            id: None,
            name: "Untitled".to_string(),
            strokes: Vec::new(),
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Append a closed stroke. Append order equals completion order.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove all strokes. The document stays an unsaved draft of itself.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Whether the document has been persisted at least once.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
