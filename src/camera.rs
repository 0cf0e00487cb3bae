/*
 * Camera Module
 *
 * Coordinate transformations between the simulation's viewport space
 * (origin top-left, y down, as delivered by the vision pipeline) and nannou's
 * screen space (origin at the window centre, y up).
 */

use nannou::prelude::*;

use crate::boundary::Viewport;

// The viewport always covers the whole window
pub fn viewport_of(window_rect: Rect) -> Viewport {
    Viewport::new(window_rect.w(), window_rect.h())
}

// Convert a point from viewport space to screen space
pub fn viewport_to_screen(point: Vec2, window_rect: Rect) -> Vec2 {
    vec2(window_rect.left() + point.x, window_rect.top() - point.y)
}

// Convert a point from screen space to viewport space
pub fn screen_to_viewport(point: Vec2, window_rect: Rect) -> Vec2 {
    vec2(point.x - window_rect.left(), window_rect.top() - point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_origin_is_top_left_corner() {
        let window = Rect::from_w_h(640.0, 480.0);

        assert_eq!(viewport_to_screen(Vec2::ZERO, window), vec2(-320.0, 240.0));
        assert_eq!(viewport_to_screen(vec2(640.0, 480.0), window), vec2(320.0, -240.0));
        assert_eq!(screen_to_viewport(Vec2::ZERO, window), vec2(320.0, 240.0));
        assert_eq!(viewport_of(window), Viewport::new(640.0, 480.0));
    }
}
