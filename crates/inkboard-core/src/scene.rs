//! Capability boundary for a drawing surface with an opaque scene graph.
//!
//! A third-party whiteboard library slots in behind this trait; its
//! internal element schema is never inspected, only treated as an opaque
//! serializable sequence.

use crate::draft::{DraftResult, DraftStore, KeyValueStore};
use serde_json::Value;
use thiserror::Error;

/// Scene capability errors.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("image export failed: {0}")]
    Export(String),
}

/// The capability surface a drawing view exposes.
pub trait SceneSurface {
    /// Current scene contents as an opaque element sequence.
    fn elements(&self) -> Vec<Value>;

    /// Replace the scene contents wholesale (not merged).
    fn update_scene(&mut self, elements: Vec<Value>);

    /// Serialize the surface's current pixel content to the default image
    /// encoding.
    fn export_image(&self) -> Result<Vec<u8>, SceneError>;
}

/// Save the surface's scene to the local draft snapshot.
pub fn save_scene<K: KeyValueStore>(
    surface: &dyn SceneSurface,
    drafts: &DraftStore<K>,
) -> DraftResult<()> {
    drafts.save(&surface.elements())
}

/// Restore the surface's scene from the local draft snapshot.
///
/// Returns `false` when no snapshot exists; the surface is left untouched.
pub fn load_scene<K: KeyValueStore>(
    surface: &mut dyn SceneSurface,
    drafts: &DraftStore<K>,
) -> DraftResult<bool> {
    match drafts.load::<Vec<Value>>()? {
        Some(elements) => {
            surface.update_scene(elements);
            Ok(true)
        }
        None => Ok(false),
    }
}
