//! Inkboard Core Library
//!
//! Platform-agnostic stroke capture, document model, and draft persistence
//! for the Inkboard whiteboard.

pub mod brush;
pub mod capture;
pub mod color;
pub mod document;
pub mod draft;
pub mod mapper;
pub mod scene;
pub mod stroke;

pub use brush::{Brush, BrushSnapshot, ToolKind};
pub use capture::{CaptureState, CaptureUpdate, PointerEvent, StrokeCapture};
pub use color::Rgb;
pub use document::DrawingDocument;
pub use draft::{DraftError, DraftStore, FileKv, KeyValueStore, MemoryKv, SCENE_DRAFT_KEY};
pub use mapper::SurfaceBounds;
pub use scene::{SceneError, SceneSurface};
pub use stroke::{Stroke, ValidationError, validate_strokes};

pub use kurbo::Point;
