/*
 * Obstacle Feed Module
 *
 * Obstacle points arrive from a vision pipeline in the resolution of the
 * capture device. This module maps them into viewport coordinates and defines
 * the seam through which any point source plugs into the app.
 */

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::boundary::Viewport;
use crate::config::{CaptureConfig, SilhouetteConfig};

/// Anything that can deliver the obstacle points for a frame.
pub trait ObstacleSource {
    /// Replace the contents of `out` with this frame's points, in viewport
    /// coordinates. Leaving `out` empty means no silhouette was detected.
    fn collect(&mut self, viewport: Viewport, out: &mut Vec<Vec2>);
}

/// Map points from capture resolution into the viewport. X and Y are scaled
/// independently, so capture and display don't need the same aspect ratio.
pub fn rescale_points<'a>(
    points: &'a [Vec2],
    capture: CaptureConfig,
    viewport: Viewport,
) -> impl Iterator<Item = Vec2> + 'a {
    let scale = vec2(viewport.width / capture.width, viewport.height / capture.height);
    points.iter().map(move |&point| point * scale)
}

/// An interactive stand-in for the camera pipeline: a ring of points around
/// the mouse cursor, shaped in capture pixels like a real blob outline.
pub struct CursorSilhouette {
    capture: CaptureConfig,
    // Unit ring scaled by the silhouette radius, centred on the origin
    outline: Vec<Vec2>,
    // Cursor position in viewport coordinates
    cursor: Vec2,
    enabled: bool,
    // Scratch buffer in capture coordinates, reused between frames
    captured: Vec<Vec2>,
}

impl CursorSilhouette {
    pub fn new(capture: CaptureConfig, shape: SilhouetteConfig) -> Self {
        let outline = (0..shape.points)
            .map(|i| {
                let angle = i as f32 / shape.points as f32 * TAU;
                vec2(angle.cos(), angle.sin()) * shape.radius
            })
            .collect();

        Self {
            capture,
            outline,
            cursor: Vec2::ZERO,
            enabled: false,
            captured: Vec::with_capacity(shape.points),
        }
    }

    pub fn set_cursor(&mut self, cursor: Vec2) {
        self.cursor = cursor;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl ObstacleSource for CursorSilhouette {
    fn collect(&mut self, viewport: Viewport, out: &mut Vec<Vec2>) {
        out.clear();
        if !self.enabled || viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }

        // Bring the cursor into capture space, where the outline is defined
        let to_capture = vec2(
            self.capture.width / viewport.width,
            self.capture.height / viewport.height,
        );
        let centre = self.cursor * to_capture;

        self.captured.clear();
        self.captured
            .extend(self.outline.iter().map(|&offset| centre + offset));

        out.extend(rescale_points(&self.captured, self.capture, viewport));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPTURE: CaptureConfig = CaptureConfig {
        width: 640.0,
        height: 480.0,
    };

    #[test]
    fn rescale_uses_independent_axes() {
        let viewport = Viewport::new(1280.0, 720.0);
        let points = [vec2(320.0, 240.0), vec2(0.0, 480.0)];

        let scaled: Vec<Vec2> = rescale_points(&points, CAPTURE, viewport).collect();
        assert_eq!(scaled, vec![vec2(640.0, 360.0), vec2(0.0, 720.0)]);
    }

    #[test]
    fn disabled_silhouette_yields_no_points() {
        let mut silhouette = CursorSilhouette::new(CAPTURE, SilhouetteConfig::default());
        silhouette.set_cursor(vec2(100.0, 100.0));

        let mut out = vec![vec2(1.0, 1.0)];
        silhouette.collect(Viewport::new(640.0, 480.0), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn ring_is_centred_on_cursor_in_viewport_space() {
        let shape = SilhouetteConfig {
            radius: 50.0,
            points: 8,
        };
        let mut silhouette = CursorSilhouette::new(CAPTURE, shape);
        silhouette.set_cursor(vec2(400.0, 300.0));
        silhouette.set_enabled(true);

        // Twice the capture resolution: the ring is stretched to a radius of 100
        let viewport = Viewport::new(1280.0, 960.0);
        let mut out = Vec::new();
        silhouette.collect(viewport, &mut out);

        assert_eq!(out.len(), 8);
        for point in &out {
            let distance = point.distance(vec2(400.0, 300.0));
            assert!((distance - 100.0).abs() < 1e-3, "distance {distance}");
        }
    }
}
