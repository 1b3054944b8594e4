//! Inkboard Render Library
//!
//! Software render pipeline for the Inkboard whiteboard: the pixel
//! surface, the whiteboard wiring, the ambient animation loop, and PNG
//! export.

pub mod animation;
pub mod export;
pub mod surface;
pub mod whiteboard;

pub use animation::{AmbientScene, AnimationLoop, AnimationScope, PHASE_INCREMENT};
pub use export::{ExportError, encode_png};
pub use surface::Surface;
pub use whiteboard::Whiteboard;
