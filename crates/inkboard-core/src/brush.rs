//! Brush settings and the per-stroke snapshot.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};

/// Smallest selectable brush width (the size slider's lower bound).
pub const MIN_BRUSH_WIDTH: f64 = 1.0;
/// Largest selectable brush width (the size slider's upper bound).
pub const MAX_BRUSH_WIDTH: f64 = 50.0;
/// Default brush width.
pub const DEFAULT_BRUSH_WIDTH: f64 = 5.0;

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
}

/// Immutable brush state frozen when a stroke opens.
///
/// Capture threads this value through the stroke instead of re-reading the
/// live [`Brush`] per point, so a tool/size/color change mid-stroke never
/// alters segments already drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSnapshot {
    pub tool: ToolKind,
    pub color: Rgb,
    pub width: f64,
}

/// The mutable tool/size/color settings the UI edits between strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub tool: ToolKind,
    pub color: Rgb,
    width: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            tool: ToolKind::Pen,
            color: Rgb::black(),
            width: DEFAULT_BRUSH_WIDTH,
        }
    }
}

impl Brush {
    /// Create a brush with the default pen settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current brush width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the brush width, clamped to the selectable range.
    pub fn set_width(&mut self, width: f64) {
        self.width = if width.is_finite() {
            width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH)
        } else {
            DEFAULT_BRUSH_WIDTH
        };
    }

    /// Freeze the current settings for a new stroke.
    pub fn snapshot(&self) -> BrushSnapshot {
        BrushSnapshot {
            tool: self.tool,
            color: self.color,
            width: self.width,
        }
    }
}
