//! Viewport tracking: clamped centering target plus frame-rate-stable
//! exponential smoothing.

use glam::Vec2;

use crate::consts::CAMERA_SMOOTHING;

/// World-space viewport origin (top-left corner of the visible rectangle)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
}

impl Camera {
    /// Viewport origin that centers `focus`, clamped so the viewport never
    /// leaves the world rectangle.
    pub fn target_for(focus: Vec2, viewport: Vec2, world: Vec2) -> Vec2 {
        let max = (world - viewport).max(Vec2::ZERO);
        (focus - viewport * 0.5).clamp(Vec2::ZERO, max)
    }

    /// Move exponentially toward `target`. The blend factor is renormalized
    /// by `delta` so convergence speed does not depend on frame rate.
    pub fn follow(&mut self, target: Vec2, delta: f32) {
        let blend = 1.0 - (1.0 - CAMERA_SMOOTHING).powf(delta.max(0.0));
        self.pos += (target - self.pos) * blend;
    }

    pub fn snap_to(&mut self, target: Vec2) {
        self.pos = target;
    }

    /// Canvas pixels map 1:1 onto world units, so screen-to-world is just a
    /// translation by the viewport origin.
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.pos + screen
    }
}
