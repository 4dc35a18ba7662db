//! Particle field simulation state.

use glam::Vec2;
use plexus_core::{FieldSettings, MAX_GLOW_PHASE};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::color::{connection_alpha, random_color};
use crate::particle::{Bounds, Particle};

/// A line to draw between two points with the given opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: u8,
}

/// The simulated particle field.
#[derive(Debug)]
pub struct Field {
    /// Tunable constants.
    settings: FieldSettings,
    /// Particles in creation order. Only ever grows.
    particles: Vec<Particle>,
    /// Last known cursor position, if the cursor has moved yet.
    mouse: Option<Vec2>,
    /// Source of randomness for new particles.
    rng: StdRng,
}

impl Field {
    /// Create a field with the initial population, seeded from the OS.
    pub fn new(settings: FieldSettings) -> Self {
        Self::from_rng(settings, StdRng::from_entropy())
    }

    /// Create a field with a deterministic seed.
    pub fn with_seed(settings: FieldSettings, seed: u64) -> Self {
        Self::from_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn from_rng(settings: FieldSettings, rng: StdRng) -> Self {
        let mut field = Self {
            settings,
            particles: Vec::new(),
            mouse: None,
            rng,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        self.particles.reserve(self.settings.particle_count);
        for _ in 0..self.settings.particle_count {
            let pos = Vec2::new(
                self.rng.gen_range(0..self.settings.width.max(1)) as f32,
                self.rng.gen_range(0..self.settings.height.max(1)) as f32,
            );
            let particle = self.random_particle(pos);
            self.particles.push(particle);
        }
    }

    /// Build a particle at `pos` with random velocity, size, glow and colour.
    fn random_particle(&mut self, pos: Vec2) -> Particle {
        let speed = self.settings.particle_speed;
        let vel = Vec2::new(
            (self.rng.gen_range(0.0..1.0) - 0.5) * speed,
            (self.rng.gen_range(0.0..1.0) - 0.5) * speed,
        );
        let min_size = self.settings.min_size;
        let size = self
            .rng
            .gen_range(min_size..self.settings.max_size.max(min_size + 1));
        let glow_phase = self.rng.gen_range(0.0..1.0) * MAX_GLOW_PHASE;
        let color = random_color(&mut self.rng);

        Particle::new(pos, vel, size, color, glow_phase)
    }

    /// Advance every particle by one tick.
    pub fn tick(&mut self) {
        let bounds = self.bounds();
        for particle in &mut self.particles {
            particle.update(&bounds);
        }
    }

    /// Record the cursor at `point` and pull nearby particles towards it.
    ///
    /// Each particle within the influence radius gets a velocity impulse
    /// along the unit vector towards the cursor. Velocity is not clamped.
    pub fn attract(&mut self, point: Vec2) {
        self.mouse = Some(point);

        let radius = self.settings.influence_radius;
        let threshold = self.settings.connection_distance;
        let strength = self.settings.attraction_strength;

        for particle in &mut self.particles {
            let distance = particle.distance_to(point);
            if distance >= radius {
                continue;
            }

            let force = (threshold - distance) / threshold * strength;
            let delta = point - particle.pos;
            let length = delta.length();

            if length > 0.0 {
                particle.vel += delta / length * force;
            }
        }
    }

    /// Append a new random particle at `point`.
    pub fn spawn_at(&mut self, point: Vec2) -> &Particle {
        let particle = self.random_particle(point);
        self.particles.push(particle);
        &self.particles[self.particles.len() - 1]
    }

    /// Lines between every unordered pair of particles closer than the
    /// connection distance.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.settings.connection_distance;
        self.particles
            .iter()
            .enumerate()
            .flat_map(move |(i, a)| {
                self.particles[i + 1..].iter().filter_map(move |b| {
                    let distance = a.distance(b);
                    (distance < threshold).then(|| Connection {
                        from: a.pos,
                        to: b.pos,
                        alpha: connection_alpha(distance, threshold),
                    })
                })
            })
    }

    /// Lines from the cursor to every particle closer than the connection
    /// distance. Empty until the cursor has moved.
    pub fn mouse_connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.settings.connection_distance;
        self.mouse.into_iter().flat_map(move |mouse| {
            self.particles.iter().filter_map(move |p| {
                let distance = p.distance_to(mouse);
                (distance < threshold).then(|| Connection {
                    from: mouse,
                    to: p.pos,
                    alpha: connection_alpha(distance, threshold),
                })
            })
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn mouse(&self) -> Option<Vec2> {
        self.mouse
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            width: self.settings.width as f32,
            height: self.settings.height as f32,
            offset: self.settings.boundary_offset,
            glow_step: self.settings.glow_step,
            max_glow_phase: MAX_GLOW_PHASE,
        }
    }
}
