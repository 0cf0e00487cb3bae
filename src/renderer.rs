/*
 * Renderer Module
 *
 * Draws the swarm. The frame is never cleared after the first one: a black
 * rectangle with a low alpha is laid over the previous frame instead, so
 * moving particles leave fading trails behind them.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::camera::viewport_to_screen;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    if frame.nth() == 0 {
        draw.background().color(BLACK);
    }

    // Fade the previous frame; the trail control is an alpha out of 255
    draw.rect()
        .xy(window_rect.xy())
        .wh(window_rect.wh())
        .color(rgba(0.0, 0.0, 0.0, model.controls.trail / 255.0));

    let palette = &model.controls.palette;
    for item in model.system.render_items() {
        let [r, g, b] = palette[item.color_category];
        draw.ellipse()
            .xy(viewport_to_screen(item.position, window_rect))
            .radius(item.size)
            .color(rgb(r, g, b));
    }

    if model.controls.show_obstacles {
        for &point in &model.obstacles {
            draw.ellipse()
                .xy(viewport_to_screen(point, window_rect))
                .radius(1.5)
                .color(WHITE);
        }
    }

    if model.controls.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(error) = draw.to_frame(app, &frame) {
        tracing::error!("Couldn't draw to frame: {error:?}");
    }

    if let Err(error) = model.egui.draw_to_frame(&frame) {
        tracing::error!("Couldn't draw UI to frame: {error:?}");
    }
}
