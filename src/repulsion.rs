/*
 * Repulsion Field Module
 *
 * Turns the frame's obstacle points into one force per particle. Every point
 * within the effective radius pulls the particle towards itself in proportion
 * to their separation; points further away contribute nothing at all.
 *
 * The force always points towards the obstacles. Whether the particle is
 * attracted or repelled is decided by the particle update from the current
 * simulation parameters.
 */

use nannou::prelude::*;

pub const DEFAULT_EFFECTIVE_RADIUS: f32 = 150.0;
pub const DEFAULT_GAIN: f32 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepulsionField {
    pub effective_radius: f32,
    pub gain: f32,
}

impl Default for RepulsionField {
    fn default() -> Self {
        Self {
            effective_radius: DEFAULT_EFFECTIVE_RADIUS,
            gain: DEFAULT_GAIN,
        }
    }
}

impl RepulsionField {
    pub fn new(effective_radius: f32, gain: f32) -> Self {
        Self {
            effective_radius,
            gain,
        }
    }

    /// Net force on a particle at `position` from every obstacle point in range.
    ///
    /// This is the hot loop of a frame (particles x points), so it compares
    /// squared distances and never allocates.
    #[inline]
    pub fn compute(&self, position: Vec2, obstacles: &[Vec2]) -> Vec2 {
        let radius_squared = self.effective_radius * self.effective_radius;
        let mut force = Vec2::ZERO;

        for &point in obstacles {
            let offset = point - position;
            if offset.length_squared() < radius_squared {
                force += offset * self.gain;
            }
        }

        force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_obstacle_list_gives_zero_force() {
        let field = RepulsionField::default();
        assert_eq!(field.compute(vec2(10.0, 10.0), &[]), Vec2::ZERO);
    }

    #[test]
    fn point_beyond_radius_contributes_nothing() {
        let field = RepulsionField::default();
        let particle = vec2(200.0, 200.0);

        assert_eq!(field.compute(particle, &[vec2(351.0, 200.0)]), Vec2::ZERO);
        // The cutoff is strict: a point exactly on the radius is ignored too
        assert_eq!(field.compute(particle, &[vec2(200.0, 350.0)]), Vec2::ZERO);
    }

    #[test]
    fn point_inside_radius_pulls_towards_itself() {
        let field = RepulsionField::default();
        let particle = vec2(200.0, 200.0);

        let force = field.compute(particle, &[vec2(349.0, 200.0)]);
        assert!((force.x - 149.0 * 0.0001).abs() < 1e-7, "force.x = {}", force.x);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn contributions_sum_over_points_in_range() {
        let field = RepulsionField::default();
        let particle = vec2(100.0, 100.0);
        let obstacles = [
            vec2(110.0, 100.0),
            vec2(100.0, 80.0),
            // Out of range on the diagonal: |(120, 120)| > 150
            vec2(220.0, 220.0),
        ];

        let force = field.compute(particle, &obstacles);
        assert!((force.x - 0.001).abs() < 1e-7);
        assert!((force.y + 0.002).abs() < 1e-7);
    }

    #[test]
    fn gain_and_radius_are_configurable() {
        let field = RepulsionField::new(20.0, 0.5);
        let particle = Vec2::ZERO;

        assert_eq!(field.compute(particle, &[vec2(10.0, 0.0)]), vec2(5.0, 0.0));
        assert_eq!(field.compute(particle, &[vec2(30.0, 0.0)]), Vec2::ZERO);
    }
}
