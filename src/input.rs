/*
 * Input Module
 *
 * Mouse and keyboard handling. The mouse drives the stand-in silhouette:
 * its position is the silhouette centre and holding the left button makes
 * the silhouette visible to the swarm.
 *
 * Keys:
 * - Space toggles between attracting and repelling
 * - P pauses the simulation
 * - R respawns every particle
 */

use nannou::prelude::*;

use crate::app::{respawn_swarm, Model};
use crate::camera::{screen_to_viewport, viewport_of};

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let viewport_pos = screen_to_viewport(pos, app.window_rect());
    model.silhouette.set_cursor(viewport_pos);
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    // Clicks on the control panel belong to egui
    if button == MouseButton::Left && !model.egui.ctx().is_pointer_over_area() {
        model.silhouette.set_enabled(true);
        tracing::debug!("Silhouette enabled");
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && model.silhouette.is_enabled() {
        model.silhouette.set_enabled(false);
        tracing::debug!("Silhouette disabled");
    }
}

// Key pressed event handler
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => {
            model.controls.toggle_repulsive();
            tracing::info!(repulsive = model.controls.repulsive, "Toggled force mode");
        }
        Key::P => {
            model.controls.toggle_paused();
            tracing::info!(paused = model.controls.paused, "Toggled pause");
        }
        Key::R => {
            respawn_swarm(model, viewport_of(app.window_rect()));
        }
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
