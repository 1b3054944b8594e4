//! A captured freehand stroke.

use crate::brush::{BrushSnapshot, ToolKind};
use crate::color::Rgb;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stroke validation errors, raised before a document body is persisted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("stroke {0} has no points")]
    EmptyStroke(usize),
    #[error("stroke {0} width must be a finite positive number, got {1}")]
    InvalidWidth(usize, f64),
    #[error("stroke {0} contains a non-finite point")]
    NonFinitePoint(usize),
}

/// One continuous pointer-down-to-pointer-up input.
///
/// `points` is append-only while the stroke is open; once closed, the
/// capture machine never touches it again. Eraser strokes keep their
/// `tool` tag and are composited in the surface background color rather
/// than erasing pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Sampled points in arrival order (at least one).
    pub points: Vec<Point>,
    pub tool: ToolKind,
    pub color: Rgb,
    pub width: f64,
}

impl Stroke {
    /// Create a stroke from sampled points and the brush frozen at open time.
    pub fn new(points: Vec<Point>, brush: BrushSnapshot) -> Self {
        Self {
            points,
            tool: brush.tool,
            color: brush.color,
            width: brush.width,
        }
    }

    /// The brush state this stroke was drawn with.
    pub fn brush(&self) -> BrushSnapshot {
        BrushSnapshot {
            tool: self.tool,
            color: self.color,
            width: self.width,
        }
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points (invalid; rejected by validation).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A one-point stroke, rendered as a single dot.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    fn validate_at(&self, index: usize) -> Result<(), ValidationError> {
        if self.points.is_empty() {
            return Err(ValidationError::EmptyStroke(index));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ValidationError::InvalidWidth(index, self.width));
        }
        if self
            .points
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(ValidationError::NonFinitePoint(index));
        }
        Ok(())
    }

    /// Check the stroke is well formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_at(0)
    }
}

/// Validate every stroke of a candidate document body.
pub fn validate_strokes(strokes: &[Stroke]) -> Result<(), ValidationError> {
    for (index, stroke) in strokes.iter().enumerate() {
        stroke.validate_at(index)?;
    }
    Ok(())
}
