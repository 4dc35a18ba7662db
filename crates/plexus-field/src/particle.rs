//! A single drifting particle.

use glam::Vec2;
use plexus_core::{MAX_ALPHA, Rgb};

/// State for a single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position in field coordinates.
    pub pos: Vec2,
    /// Displacement applied every tick.
    pub vel: Vec2,
    /// Diameter in field units.
    pub size: u32,
    /// Base colour before the glow flicker is applied.
    pub color: Rgb,
    /// Angle driving the brightness flicker, kept in `[0, max_glow_phase)`.
    pub glow_phase: f32,
}

/// Per-tick constants a particle needs to advance.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    /// Distance past each edge at which the particle bounces.
    pub offset: f32,
    /// Glow phase increment per tick.
    pub glow_step: f32,
    /// Value at which the glow phase wraps back towards zero.
    pub max_glow_phase: f32,
}

impl Particle {
    /// Create a particle at rest with the given look.
    pub fn new(pos: Vec2, vel: Vec2, size: u32, color: Rgb, glow_phase: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            color,
            glow_phase,
        }
    }

    /// Advance one tick: move, advance the glow, then bounce off the bounds.
    pub fn update(&mut self, bounds: &Bounds) {
        self.pos += self.vel;

        self.glow_phase += bounds.glow_step;
        if self.glow_phase >= bounds.max_glow_phase {
            self.glow_phase -= bounds.max_glow_phase;
        }

        let min = -bounds.offset;
        let max_x = bounds.width + bounds.offset;
        let max_y = bounds.height + bounds.offset;

        if self.pos.x <= min {
            self.pos.x = min;
            self.vel.x = -self.vel.x;
        } else if self.pos.x >= max_x {
            self.pos.x = max_x;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y <= min {
            self.pos.y = min;
            self.vel.y = -self.vel.y;
        } else if self.pos.y >= max_y {
            self.pos.y = max_y;
            self.vel.y = -self.vel.y;
        }
    }

    /// Euclidean distance to another particle.
    pub fn distance(&self, other: &Particle) -> f32 {
        self.distance_to(other.pos)
    }

    /// Euclidean distance to an arbitrary point.
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }

    /// Current flicker opacity derived from the glow phase.
    pub fn flicker_alpha(&self) -> u8 {
        let intensity = (self.glow_phase.sin() + 1.0) / 2.0;
        (intensity * MAX_ALPHA as f32) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plexus_core::MAX_GLOW_PHASE;

    fn bounds() -> Bounds {
        Bounds {
            width: 800.0,
            height: 600.0,
            offset: 50.0,
            glow_step: 0.15,
            max_glow_phase: MAX_GLOW_PHASE,
        }
    }

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 5, Rgb::WHITE, 0.0)
    }

    #[test]
    fn test_update_integrates_velocity() {
        let mut p = particle(100.0, 100.0, 2.0, -1.5);
        p.update(&bounds());
        assert_eq!(p.pos, Vec2::new(102.0, 98.5));
        assert_eq!(p.vel, Vec2::new(2.0, -1.5));
    }

    #[test]
    fn test_bounce_at_lower_bound() {
        let mut p = particle(-50.0, 300.0, -1.0, 0.0);
        p.update(&bounds());
        assert_eq!(p.pos.x, -50.0);
        assert_eq!(p.vel.x, 1.0);
    }

    #[test]
    fn test_bounce_at_upper_bound() {
        let mut p = particle(849.0, 649.0, 3.0, 3.0);
        p.update(&bounds());
        assert_eq!(p.pos, Vec2::new(850.0, 650.0));
        assert_eq!(p.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_bounce_each_axis_once_in_corner() {
        let mut p = particle(-49.0, -49.0, -5.0, -5.0);
        p.update(&bounds());
        assert_eq!(p.pos, Vec2::new(-50.0, -50.0));
        assert_eq!(p.vel, Vec2::new(5.0, 5.0));

        p.update(&bounds());
        assert_eq!(p.pos, Vec2::new(-45.0, -45.0));
        assert_eq!(p.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_glow_phase_wraps() {
        let mut p = particle(0.0, 0.0, 0.0, 0.0);
        p.glow_phase = MAX_GLOW_PHASE - 0.05;
        p.update(&bounds());
        assert!(p.glow_phase >= 0.0 && p.glow_phase < MAX_GLOW_PHASE);
        assert!((p.glow_phase - 0.1).abs() < 1e-4);

        for _ in 0..1000 {
            p.update(&bounds());
            assert!(p.glow_phase >= 0.0 && p.glow_phase < MAX_GLOW_PHASE);
        }
    }

    #[test]
    fn test_largest_glow_step_stays_in_range() {
        let mut b = bounds();
        b.glow_step = 6.28;
        let mut p = particle(0.0, 0.0, 0.0, 0.0);
        p.glow_phase = 6.0;
        for _ in 0..1000 {
            p.update(&b);
            assert!(p.glow_phase >= 0.0 && p.glow_phase < MAX_GLOW_PHASE);
        }
    }

    #[test]
    fn test_distance() {
        let a = particle(10.0, 20.0, 0.0, 0.0);
        let b = particle(13.0, 24.0, 0.0, 0.0);
        assert_eq!(a.distance(&a.clone()), 0.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_flicker_alpha_range() {
        let mut p = particle(0.0, 0.0, 0.0, 0.0);
        p.glow_phase = std::f32::consts::FRAC_PI_2;
        assert_eq!(p.flicker_alpha(), 255);
        p.glow_phase = 3.0 * std::f32::consts::FRAC_PI_2;
        assert_eq!(p.flicker_alpha(), 0);
        p.glow_phase = 0.0;
        assert_eq!(p.flicker_alpha(), 127);
    }
}
