/*
 * Simulation Parameters Module
 *
 * Two halves live here. `SimulationParameters` is the small immutable value
 * the particle system reads each tick. `ControlPanel` is the mutable state the
 * UI sliders write into; it hands out a fresh `SimulationParameters` snapshot
 * every frame and tracks what changed since the previous frame.
 */

use crate::config::{ControlsConfig, Palette};

/// What the swarm needs to know about the controls for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Scales the displacement applied each tick, `>= 0`
    pub speed_multiplier: f32,
    /// Scales the noise force, `>= 0`
    pub noise_amplitude: f32,
    /// `true` pushes particles away from obstacles, `false` pulls them in
    pub repulsive: bool,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            noise_amplitude: 1.0,
            repulsive: false,
        }
    }
}

// Values adjusted through the UI
pub struct ControlPanel {
    pub speed: f32,
    pub noise: f32,
    pub trail: f32,
    pub repulsive: bool,
    pub show_debug: bool,
    pub show_obstacles: bool,
    pub paused: bool,
    pub palette: Palette,

    previous_values: Option<ControlSnapshot>,
}

// A snapshot of control values used for change detection
#[derive(Clone, PartialEq)]
struct ControlSnapshot {
    speed: f32,
    noise: f32,
    trail: f32,
    repulsive: bool,
    paused: bool,
    palette: Palette,
}

/// The controls that moved since the last snapshot.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ControlChanges {
    pub speed: Option<f32>,
    pub noise: Option<f32>,
    pub trail: Option<f32>,
    pub repulsive: Option<bool>,
    pub paused: Option<bool>,
    pub palette: bool,
}

impl ControlChanges {
    pub fn any(&self) -> bool {
        *self != Self::default()
    }
}

impl ControlPanel {
    pub fn new(controls: &ControlsConfig, palette: Palette) -> Self {
        Self {
            speed: controls.speed.clamp(0.0, 3.0),
            noise: controls.noise.clamp(0.0, 3.0),
            trail: controls.trail.clamp(0.0, 20.0),
            repulsive: controls.repulsive,
            show_debug: false,
            show_obstacles: false,
            paused: false,
            palette,
            previous_values: None,
        }
    }

    /// The immutable per-tick view of the controls.
    pub fn snapshot(&self) -> SimulationParameters {
        SimulationParameters {
            speed_multiplier: self.speed.max(0.0),
            noise_amplitude: self.noise.max(0.0),
            repulsive: self.repulsive,
        }
    }

    pub fn toggle_repulsive(&mut self) {
        self.repulsive = !self.repulsive;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    // Remember the current values so the next call to `detect_changes` can diff against them
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.current_values());
    }

    pub fn detect_changes(&self) -> ControlChanges {
        let Some(prev) = &self.previous_values else {
            return ControlChanges::default();
        };

        let now = self.current_values();
        ControlChanges {
            speed: (now.speed != prev.speed).then_some(now.speed),
            noise: (now.noise != prev.noise).then_some(now.noise),
            trail: (now.trail != prev.trail).then_some(now.trail),
            repulsive: (now.repulsive != prev.repulsive).then_some(now.repulsive),
            paused: (now.paused != prev.paused).then_some(now.paused),
            palette: now.palette != prev.palette,
        }
    }

    fn current_values(&self) -> ControlSnapshot {
        ControlSnapshot {
            speed: self.speed,
            noise: self.noise,
            trail: self.trail,
            repulsive: self.repulsive,
            paused: self.paused,
            palette: self.palette,
        }
    }

    // Slider ranges
    pub fn get_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_noise_range() -> std::ops::RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_trail_range() -> std::ops::RangeInclusive<f32> {
        0.0..=20.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn panel() -> ControlPanel {
        let config = Config::default();
        ControlPanel::new(&config.controls, config.palette)
    }

    #[test]
    fn snapshot_reflects_controls() {
        let mut panel = panel();
        panel.speed = 2.5;
        panel.noise = 0.0;
        panel.toggle_repulsive();

        assert_eq!(
            panel.snapshot(),
            SimulationParameters {
                speed_multiplier: 2.5,
                noise_amplitude: 0.0,
                repulsive: true,
            }
        );
    }

    #[test]
    fn no_changes_reported_before_first_snapshot() {
        let mut panel = panel();
        panel.speed = 0.2;
        assert!(!panel.detect_changes().any());
    }

    #[test]
    fn changes_are_reported_against_last_snapshot() {
        let mut panel = panel();
        panel.take_snapshot();
        panel.noise = 2.0;
        panel.toggle_paused();
        panel.palette[1] = [1, 2, 3];

        let changes = panel.detect_changes();
        assert_eq!(changes.noise, Some(2.0));
        assert_eq!(changes.paused, Some(true));
        assert!(changes.palette);
        assert_eq!(changes.speed, None);
        assert_eq!(changes.repulsive, None);

        panel.take_snapshot();
        assert!(!panel.detect_changes().any());
    }

    #[test]
    fn out_of_range_config_is_clamped_to_slider_ranges() {
        let config = Config::default();
        let controls = ControlsConfig {
            speed: 9.0,
            noise: -1.0,
            trail: 40.0,
            repulsive: false,
        };
        let panel = ControlPanel::new(&controls, config.palette);

        assert_eq!(panel.speed, 3.0);
        assert_eq!(panel.noise, 0.0);
        assert_eq!(panel.trail, 20.0);
    }
}
