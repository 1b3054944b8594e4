//! Raw pointer coordinates to surface-local coordinates.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The drawing surface's on-screen bounding rectangle plus device scale.
///
/// The mapping is a pure function of its inputs. The rectangle moves on
/// scroll/resize, so callers must re-query it for every event rather than
/// caching one value across events; the whiteboard takes it as a
/// per-event argument for exactly that reason.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    /// Left edge of the surface in raw event coordinates.
    pub left: f64,
    /// Top edge of the surface in raw event coordinates.
    pub top: f64,
    /// Raw-to-surface scale factor (1.0 when CSS and buffer sizes agree).
    pub scale: f64,
}

impl SurfaceBounds {
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            scale: 1.0,
        }
    }

    pub fn with_scale(left: f64, top: f64, scale: f64) -> Self {
        Self { left, top, scale }
    }

    /// Convert a raw event position to surface-local coordinates.
    pub fn to_surface(&self, raw: Point) -> Point {
        Point::new((raw.x - self.left) * self.scale, (raw.y - self.top) * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_origin() {
        let bounds = SurfaceBounds::new(0.0, 0.0);
        let p = bounds.to_surface(Point::new(10.0, 20.0));
        assert_eq!(p, Point::new(10.0, 20.0));
    }

    #[test]
    fn test_offset_subtracted() {
        let bounds = SurfaceBounds::new(100.0, 50.0);
        let p = bounds.to_surface(Point::new(130.0, 70.0));
        assert_eq!(p, Point::new(30.0, 20.0));
    }

    #[test]
    fn test_scale_applied_after_offset() {
        let bounds = SurfaceBounds::with_scale(100.0, 100.0, 2.0);
        let p = bounds.to_surface(Point::new(110.0, 105.0));
        assert_eq!(p, Point::new(20.0, 10.0));
    }

    #[test]
    fn test_bounds_change_changes_mapping() {
        // The same raw position maps differently once the surface moves;
        // a cached rectangle would get this wrong.
        let raw = Point::new(200.0, 200.0);
        let before = SurfaceBounds::new(0.0, 0.0).to_surface(raw);
        let after = SurfaceBounds::new(40.0, 0.0).to_surface(raw);
        assert!((before.x - after.x).abs() > 1.0);
    }
}
