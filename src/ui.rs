/*
 * UI Module
 *
 * The egui control panel. Sliders and toggles write straight into the
 * `ControlPanel`; the app turns that into an immutable parameter snapshot
 * before each tick.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ControlChanges, ControlPanel};

/// What the user asked for this frame, besides moving the controls.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UiActions {
    pub respawn: bool,
    pub changes: ControlChanges,
}

// Build the control window and report what changed
pub fn update_ui(egui: &mut Egui, controls: &mut ControlPanel, debug_info: &DebugInfo) -> UiActions {
    let mut respawn = false;

    controls.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Swarm Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.add(egui::Slider::new(&mut controls.speed, ControlPanel::get_speed_range()).text("speed"));
            ui.add(egui::Slider::new(&mut controls.noise, ControlPanel::get_noise_range()).text("noise"));
            ui.add(egui::Slider::new(&mut controls.trail, ControlPanel::get_trail_range()).text("trail"));
            ui.checkbox(&mut controls.repulsive, "repulsive force");

            ui.collapsing("Colors", |ui| {
                for (i, color) in controls.palette.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(format!("color{}", i + 1));
                        ui.color_edit_button_srgb(color);
                    });
                }
            });

            ui.separator();

            if ui.button("Respawn particles").clicked() {
                respawn = true;
            }
            ui.checkbox(&mut controls.show_obstacles, "Show obstacle points");
            ui.checkbox(&mut controls.show_debug, "Show Debug Info");
            ui.checkbox(&mut controls.paused, "Pause Simulation");

            if controls.show_debug {
                ui.separator();
                for line in debug_info.lines() {
                    ui.label(line);
                }
            }
        });

    UiActions {
        respawn,
        changes: controls.detect_changes(),
    }
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let lines = debug_info.lines();

    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
