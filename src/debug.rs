/*
 * Debug Information Module
 *
 * Performance metrics and simulation counters shown in the UI and in the
 * optional on-screen overlay.
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_per_frame: u32,
    pub obstacle_count: usize,
    pub particle_count: usize,
    pub simulated_time_ms: f64,
}

impl DebugInfo {
    /// The overlay lines, in display order.
    pub fn lines(&self) -> [String; 6] {
        [
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Ticks this frame: {}", self.ticks_per_frame),
            format!("Particles: {}", self.particle_count),
            format!("Obstacle points: {}", self.obstacle_count),
            format!("Clock: {:.1} s", self.simulated_time_ms / 1000.0),
        ]
    }
}
