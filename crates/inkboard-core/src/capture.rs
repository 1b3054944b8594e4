//! Pointer-driven stroke capture state machine.

use crate::brush::{Brush, BrushSnapshot};
use crate::stroke::Stroke;
use kurbo::Point;
use log::debug;
use serde::{Deserialize, Serialize};

/// Pointer event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Leave,
}

/// Capture machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Capturing,
}

/// Incremental result of feeding one pointer event to the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureUpdate {
    /// A stroke opened at `at` with the brush frozen at this instant.
    /// Callers paint a visible dot so a down-up click leaves a mark.
    Opened { at: Point, brush: BrushSnapshot },
    /// A point was appended; callers paint just the `from`-`to` segment.
    Extended {
        from: Point,
        to: Point,
        brush: BrushSnapshot,
    },
    /// The stroke closed (pointer up or leave) and is now final.
    Closed(Stroke),
}

/// The stroke currently being captured.
#[derive(Debug, Clone)]
struct OpenStroke {
    points: Vec<Point>,
    brush: BrushSnapshot,
}

impl OpenStroke {
    fn close(self) -> Stroke {
        Stroke::new(self.points, self.brush)
    }
}

/// Turns a pointer event sequence into closed strokes.
///
/// Transitions: `Idle --down--> Capturing`, `Capturing --move--> Capturing`
/// (appending one point per move), `Capturing --up|leave--> Idle`. Up and
/// leave close identically and append no point, so a closed stroke holds
/// exactly 1 (down) + number-of-moves points in arrival order. Everything
/// else is a no-op: non-down events while idle, and a down while already
/// capturing (a second stroke cannot open before the first closes).
#[derive(Debug, Clone, Default)]
pub struct StrokeCapture {
    open: Option<OpenStroke>,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current machine state.
    pub fn state(&self) -> CaptureState {
        if self.open.is_some() {
            CaptureState::Capturing
        } else {
            CaptureState::Idle
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.open.is_some()
    }

    /// Points of the currently open stroke, if any.
    pub fn open_points(&self) -> Option<&[Point]> {
        self.open.as_ref().map(|open| open.points.as_slice())
    }

    /// Feed one pointer event. The brush is read only when a stroke opens.
    pub fn handle(&mut self, event: PointerEvent, brush: &Brush) -> Option<CaptureUpdate> {
        match event {
            PointerEvent::Down(at) => {
                if self.open.is_some() {
                    return None;
                }
                let snapshot = brush.snapshot();
                self.open = Some(OpenStroke {
                    points: vec![at],
                    brush: snapshot,
                });
                debug!("stroke opened at ({:.1}, {:.1})", at.x, at.y);
                Some(CaptureUpdate::Opened {
                    at,
                    brush: snapshot,
                })
            }
            PointerEvent::Move(to) => {
                let open = self.open.as_mut()?;
                // points is never empty: down always pushes the first point
                let from = *open.points.last()?;
                open.points.push(to);
                Some(CaptureUpdate::Extended {
                    from,
                    to,
                    brush: open.brush,
                })
            }
            // Leave is a defensive close: the pointer exiting the surface
            // must never leave a stroke dangling in Capturing.
            PointerEvent::Up(_) | PointerEvent::Leave => {
                let stroke = self.open.take()?.close();
                debug!("stroke closed with {} points", stroke.len());
                Some(CaptureUpdate::Closed(stroke))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::ToolKind;
    use crate::color::Rgb;

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down(Point::new(x, y))
    }

    fn mv(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move(Point::new(x, y))
    }

    fn up() -> PointerEvent {
        PointerEvent::Up(Point::ZERO)
    }

    #[test]
    fn test_down_moves_up_point_count() {
        let mut capture = StrokeCapture::new();
        let brush = Brush::new();

        capture.handle(down(0.0, 0.0), &brush);
        for i in 1..=4 {
            capture.handle(mv(i as f64, 0.0), &brush);
        }
        let Some(CaptureUpdate::Closed(stroke)) = capture.handle(up(), &brush) else {
            panic!("expected a closed stroke");
        };

        // 1 (down) + 4 moves, in arrival order
        assert_eq!(stroke.len(), 5);
        for (i, p) in stroke.points.iter().enumerate() {
            assert!((p.x - i as f64).abs() < f64::EPSILON);
        }
        assert_eq!(capture.state(), CaptureState::Idle);
    }

    #[test]
    fn test_click_yields_one_point_stroke() {
        let mut capture = StrokeCapture::new();
        let brush = Brush::new();

        capture.handle(down(3.0, 4.0), &brush);
        let Some(CaptureUpdate::Closed(stroke)) = capture.handle(up(), &brush) else {
            panic!("expected a closed stroke");
        };

        assert!(stroke.is_dot());
        assert_eq!(stroke.points[0], Point::new(3.0, 4.0));
    }

    #[test]
    fn test_leave_closes_like_up() {
        let brush = Brush::new();
        let events = [down(0.0, 0.0), mv(1.0, 1.0), mv(2.0, 2.0)];

        let mut via_up = StrokeCapture::new();
        let mut via_leave = StrokeCapture::new();
        for event in events {
            via_up.handle(event, &brush);
            via_leave.handle(event, &brush);
        }

        let Some(CaptureUpdate::Closed(a)) = via_up.handle(up(), &brush) else {
            panic!("expected close on up");
        };
        let Some(CaptureUpdate::Closed(b)) = via_leave.handle(PointerEvent::Leave, &brush) else {
            panic!("expected close on leave");
        };

        assert_eq!(a, b);
        assert_eq!(via_leave.state(), CaptureState::Idle);
    }

    #[test]
    fn test_events_while_idle_are_noops() {
        let mut capture = StrokeCapture::new();
        let brush = Brush::new();

        assert!(capture.handle(mv(1.0, 1.0), &brush).is_none());
        assert!(capture.handle(up(), &brush).is_none());
        assert!(capture.handle(PointerEvent::Leave, &brush).is_none());
        assert_eq!(capture.state(), CaptureState::Idle);
    }

    #[test]
    fn test_down_while_capturing_ignored() {
        let mut capture = StrokeCapture::new();
        let brush = Brush::new();

        capture.handle(down(0.0, 0.0), &brush);
        assert!(capture.handle(down(9.0, 9.0), &brush).is_none());

        let Some(CaptureUpdate::Closed(stroke)) = capture.handle(up(), &brush) else {
            panic!("expected a closed stroke");
        };
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.points[0], Point::ZERO);
    }

    #[test]
    fn test_brush_change_mid_stroke_does_not_alter_open_stroke() {
        let mut capture = StrokeCapture::new();
        let mut brush = Brush::new();

        capture.handle(down(0.0, 0.0), &brush);
        capture.handle(mv(1.0, 0.0), &brush);

        // UI changes tool, color, and size while the stroke is open
        brush.tool = ToolKind::Eraser;
        brush.color = Rgb::white();
        brush.set_width(30.0);

        let update = capture.handle(mv(2.0, 0.0), &brush).unwrap();
        let CaptureUpdate::Extended { brush: segment_brush, .. } = update else {
            panic!("expected an extended segment");
        };
        assert_eq!(segment_brush.tool, ToolKind::Pen);

        let Some(CaptureUpdate::Closed(stroke)) = capture.handle(up(), &brush) else {
            panic!("expected a closed stroke");
        };
        assert_eq!(stroke.tool, ToolKind::Pen);
        assert_eq!(stroke.color, Rgb::black());
        assert!((stroke.width - 5.0).abs() < f64::EPSILON);
        assert_eq!(stroke.len(), 3);
    }

    #[test]
    fn test_up_position_not_appended() {
        let mut capture = StrokeCapture::new();
        let brush = Brush::new();

        capture.handle(down(0.0, 0.0), &brush);
        capture.handle(mv(5.0, 5.0), &brush);
        let Some(CaptureUpdate::Closed(stroke)) =
            capture.handle(PointerEvent::Up(Point::new(99.0, 99.0)), &brush)
        else {
            panic!("expected a closed stroke");
        };

        assert_eq!(stroke.len(), 2);
        assert_eq!(*stroke.points.last().unwrap(), Point::new(5.0, 5.0));
    }
}
