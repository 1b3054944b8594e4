//! The whiteboard: capture wired to the drawing surface and document.

use crate::export::encode_png;
use crate::surface::Surface;
use inkboard_core::draft::{DraftResult, DraftStore, KeyValueStore};
use inkboard_core::scene::{SceneError, SceneSurface};
use inkboard_core::{
    Brush, BrushSnapshot, CaptureUpdate, DrawingDocument, PointerEvent, Rgb, Stroke,
    StrokeCapture, SurfaceBounds, ToolKind,
};
use kurbo::Point;
use log::{debug, warn};

/// A drawing surface with pointer capture and a backing document.
///
/// Every pointer event is mapped through the caller-supplied
/// [`SurfaceBounds`] (re-queried per event; the rectangle moves on
/// scroll/resize, so it is deliberately not stored here), fed to the
/// capture machine, and painted incrementally: a dot when a stroke opens,
/// one segment per move. Closed strokes land in the document in
/// completion order. The surface is only ever cleared wholesale by an
/// explicit [`clear`](Self::clear) or a draft load.
#[derive(Debug, Clone)]
pub struct Whiteboard {
    surface: Surface,
    capture: StrokeCapture,
    document: DrawingDocument,
    pub brush: Brush,
}

impl Whiteboard {
    /// Create a whiteboard with a white drawing surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Rgb::white())
    }

    pub fn with_background(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            surface: Surface::new(width, height, background),
            capture: StrokeCapture::new(),
            document: DrawingDocument::new(),
            brush: Brush::new(),
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn document(&self) -> &DrawingDocument {
        &self.document
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_capturing()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.document.name = name.into();
    }

    pub fn pointer_down(&mut self, raw: Point, bounds: &SurfaceBounds) {
        let at = bounds.to_surface(raw);
        self.dispatch(PointerEvent::Down(at));
    }

    pub fn pointer_move(&mut self, raw: Point, bounds: &SurfaceBounds) {
        let at = bounds.to_surface(raw);
        self.dispatch(PointerEvent::Move(at));
    }

    pub fn pointer_up(&mut self, raw: Point, bounds: &SurfaceBounds) {
        let at = bounds.to_surface(raw);
        self.dispatch(PointerEvent::Up(at));
    }

    /// The pointer left the surface: close the stroke exactly like a
    /// pointer-up.
    pub fn pointer_leave(&mut self) {
        self.dispatch(PointerEvent::Leave);
    }

    fn dispatch(&mut self, event: PointerEvent) {
        let Some(update) = self.capture.handle(event, &self.brush) else {
            return;
        };
        match update {
            CaptureUpdate::Opened { at, brush } => {
                // A down-up click with no move must still leave a mark
                let color = self.paint_color(&brush);
                self.surface.fill_disc(at, brush.width / 2.0, color);
            }
            CaptureUpdate::Extended { from, to, brush } => {
                let color = self.paint_color(&brush);
                self.surface.stroke_segment(from, to, brush.width, color);
            }
            CaptureUpdate::Closed(stroke) => {
                self.document.push_stroke(stroke);
            }
        }
    }

    /// The eraser paints in the background color; it never erases pixels.
    fn paint_color(&self, brush: &BrushSnapshot) -> Rgb {
        match brush.tool {
            ToolKind::Pen => brush.color,
            ToolKind::Eraser => self.surface.background(),
        }
    }

    /// Explicit full clear: pixels and document strokes. Any stroke still
    /// being captured is dropped.
    pub fn clear(&mut self) {
        debug!("whiteboard cleared");
        self.capture = StrokeCapture::new();
        self.document.clear();
        self.surface.clear();
    }

    /// Replace the document's strokes wholesale and repaint from scratch.
    pub fn replace_strokes(&mut self, strokes: Vec<Stroke>) {
        self.capture = StrokeCapture::new();
        self.document.strokes = strokes;
        self.repaint_all();
    }

    fn repaint_all(&mut self) {
        self.surface.clear();
        // Rendering order is stroke order: later strokes occlude earlier
        let strokes = self.document.strokes.clone();
        for stroke in &strokes {
            self.paint_stroke(stroke);
        }
    }

    fn paint_stroke(&mut self, stroke: &Stroke) {
        let color = self.paint_color(&stroke.brush());
        match stroke.points.as_slice() {
            [] => {}
            [only] => self.surface.fill_disc(*only, stroke.width / 2.0, color),
            points => {
                self.surface.fill_disc(points[0], stroke.width / 2.0, color);
                for window in points.windows(2) {
                    self.surface
                        .stroke_segment(window[0], window[1], stroke.width, color);
                }
            }
        }
    }

    /// Snapshot the current pixel content as PNG bytes.
    pub fn export_png(&self) -> Result<Vec<u8>, crate::export::ExportError> {
        encode_png(&self.surface)
    }

    /// Save the current stroke list as the local scene draft.
    pub fn save_draft<K: KeyValueStore>(&self, drafts: &DraftStore<K>) -> DraftResult<()> {
        drafts.save_strokes(&self.document.strokes)
    }

    /// Restore the stroke list from the local scene draft.
    ///
    /// Returns `false` (and leaves everything untouched) when no snapshot
    /// exists.
    pub fn load_draft<K: KeyValueStore>(&mut self, drafts: &DraftStore<K>) -> DraftResult<bool> {
        match drafts.load_strokes()? {
            Some(strokes) => {
                self.replace_strokes(strokes);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl SceneSurface for Whiteboard {
    fn elements(&self) -> Vec<serde_json::Value> {
        self.document
            .strokes
            .iter()
            .filter_map(|stroke| serde_json::to_value(stroke).ok())
            .collect()
    }

    fn update_scene(&mut self, elements: Vec<serde_json::Value>) {
        let strokes: Vec<Stroke> = elements
            .into_iter()
            .filter_map(|element| match serde_json::from_value(element) {
                Ok(stroke) => Some(stroke),
                Err(e) => {
                    warn!("skipping unreadable scene element: {}", e);
                    None
                }
            })
            .collect();
        self.replace_strokes(strokes);
    }

    fn export_image(&self) -> Result<Vec<u8>, SceneError> {
        self.export_png().map_err(|e| SceneError::Export(e.to_string()))
    }
}
