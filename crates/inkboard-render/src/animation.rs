//! The ambient animation loop.
//!
//! Procedurally generated motion on its own surface, decoupled from user
//! strokes. Unlike the drawing surface's accumulate-only discipline, the
//! animation surface is cleared and fully repainted every tick because its
//! content is regenerated from the phase accumulator.

use crate::surface::Surface;
use inkboard_core::Rgb;
use kurbo::Point;
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Fixed phase advance per tick.
pub const PHASE_INCREMENT: f64 = 0.02;

const ORBIT_RADIUS: f64 = 50.0;
const ORBIT_DOT_RADIUS: f64 = 15.0;
const WAVE_AMPLITUDE: f64 = 30.0;
const WAVE_FREQUENCY: f64 = 0.02;
const WAVE_PHASE_SCALE: f64 = 50.0;
const WAVE_WIDTH: f64 = 2.0;

const DOT_COLOR: Rgb = Rgb::new(0x8b, 0x5c, 0xf6);
const WAVE_COLOR: Rgb = Rgb::new(0x10, 0xb9, 0x81);

/// Background of the animation surface.
pub const ANIMATION_BACKGROUND: Rgb = Rgb::new(0xf9, 0xfa, 0xfb);

/// The procedurally generated scene, derived entirely from one phase
/// accumulator so the orbiting dot and the scrolling wave stay in sync.
#[derive(Debug, Clone, Default)]
pub struct AmbientScene {
    phase: f64,
}

impl AmbientScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance the accumulator by the fixed increment.
    pub fn advance(&mut self) {
        self.phase += PHASE_INCREMENT;
    }

    /// Clear the surface and repaint both elements at the current phase.
    pub fn paint(&self, surface: &mut Surface) {
        surface.clear();

        let center = Point::new(
            surface.width() as f64 / 2.0,
            surface.height() as f64 / 2.0,
        );

        // Dot orbiting the center
        let dot = Point::new(
            center.x + self.phase.cos() * ORBIT_RADIUS,
            center.y + self.phase.sin() * ORBIT_RADIUS,
        );
        surface.fill_disc(dot, ORBIT_DOT_RADIUS, DOT_COLOR);

        // Horizontally-scrolling sinusoid, phase offset from the same
        // accumulator
        let wave: Vec<Point> = (0..surface.width())
            .map(|x| {
                let x = x as f64;
                let y = center.y
                    + ((x + self.phase * WAVE_PHASE_SCALE) * WAVE_FREQUENCY).sin()
                        * WAVE_AMPLITUDE;
                Point::new(x, y)
            })
            .collect();
        surface.stroke_polyline(&wave, WAVE_WIDTH, WAVE_COLOR);
    }
}

/// A continuously-scheduled redraw of the ambient scene.
///
/// Each `tick` clears and repaints the surface, then advances the phase.
/// Once the owning view's [`AnimationScope`] is torn down, ticks stop
/// painting and report `false`; no redraw ever happens after teardown.
#[derive(Debug)]
pub struct AnimationLoop {
    surface: Surface,
    scene: AmbientScene,
    ticks: u64,
    cancelled: Arc<AtomicBool>,
}

impl AnimationLoop {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Surface::new(width, height, ANIMATION_BACKGROUND),
            scene: AmbientScene::new(),
            ticks: 0,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The teardown handle for the owning view. Dropping it (or calling
    /// [`AnimationScope::cancel`]) synchronously stops all future ticks.
    pub fn scope(&self) -> AnimationScope {
        AnimationScope {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Run one animation tick. Returns `false`, painting nothing, once
    /// cancelled.
    pub fn tick(&mut self) -> bool {
        if self.is_cancelled() {
            return false;
        }
        self.scene.paint(&mut self.surface);
        self.scene.advance();
        self.ticks += 1;
        true
    }

    /// Number of ticks that actually painted.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn scene(&self) -> &AmbientScene {
        &self.scene
    }
}

/// Lifetime handle binding the animation loop to its owning view.
///
/// Teardown cancels synchronously and exactly once; cancellation is never
/// left to garbage collection.
#[derive(Debug)]
pub struct AnimationScope {
    cancelled: Arc<AtomicBool>,
}

impl AnimationScope {
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            debug!("animation loop cancelled");
        }
    }
}

impl Drop for AnimationScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_advances_by_fixed_increment() {
        let mut scene = AmbientScene::new();
        for _ in 0..10 {
            scene.advance();
        }
        assert!((scene.phase() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_paint_clears_then_draws() {
        let mut surface = Surface::new(200, 100, ANIMATION_BACKGROUND);
        let scene = AmbientScene::new();
        scene.paint(&mut surface);

        // Phase 0: dot center sits at (center.x + 50, center.y)
        assert_eq!(surface.pixel(150, 50), Some(DOT_COLOR));
        // Corners are background
        assert_eq!(surface.pixel(0, 0), Some(ANIMATION_BACKGROUND));
        assert_eq!(surface.pixel(199, 99), Some(ANIMATION_BACKGROUND));
    }

    #[test]
    fn test_repaint_discipline_leaves_no_trail() {
        let mut animation = AnimationLoop::new(200, 100);
        animation.tick();

        // Dot starts right of center
        assert_eq!(animation.surface().pixel(150, 50), Some(DOT_COLOR));

        // Half an orbit later the old position is repainted background
        for _ in 0..((std::f64::consts::PI / PHASE_INCREMENT) as u64) {
            animation.tick();
        }
        assert_ne!(animation.surface().pixel(150, 50), Some(DOT_COLOR));
        // Dot is now left of center
        assert_eq!(animation.surface().pixel(50, 50), Some(DOT_COLOR));
    }

    #[test]
    fn test_teardown_stops_ticks() {
        let mut animation = AnimationLoop::new(120, 120);
        let scope = animation.scope();

        for _ in 0..100 {
            assert!(animation.tick());
        }
        assert_eq!(animation.ticks(), 100);

        scope.cancel();

        let before = animation.surface().clone();
        for _ in 0..10 {
            assert!(!animation.tick());
        }
        // No redraw after teardown
        assert_eq!(animation.ticks(), 100);
        assert_eq!(*animation.surface(), before);
    }

    #[test]
    fn test_scope_drop_cancels() {
        let mut animation = AnimationLoop::new(64, 64);
        {
            let _scope = animation.scope();
            assert!(animation.tick());
        }
        assert!(animation.is_cancelled());
        assert!(!animation.tick());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let animation = AnimationLoop::new(64, 64);
        let scope = animation.scope();
        scope.cancel();
        scope.cancel();
        assert!(animation.is_cancelled());
    }
}
