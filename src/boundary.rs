/*
 * Boundary Module
 *
 * Toroidal topology for the viewport: a particle leaving one edge comes back
 * in on the opposite edge with its velocity untouched. Viewport coordinates
 * have their origin in the top-left corner with y growing downwards.
 */

use nannou::prelude::*;

/// The rectangle `[0, width) x [0, height)` the swarm lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn contains(&self, position: Vec2) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }

    /// Shift `position` by one extent on each axis where `position + velocity`
    /// would leave the viewport. The displacement itself is applied by the caller.
    #[inline]
    pub fn wrap(&self, position: Vec2, velocity: Vec2) -> Vec2 {
        vec2(
            wrap_axis(position.x, velocity.x, self.width),
            wrap_axis(position.y, velocity.y, self.height),
        )
    }
}

/// Wrap a single axis. Only one extent is ever added or removed per call.
#[inline]
pub fn wrap_axis(position: f32, velocity: f32, extent: f32) -> f32 {
    let candidate = position + velocity;
    if candidate > extent {
        position - extent
    } else if candidate < 0.0 {
        position + extent
    } else {
        position
    }
}
