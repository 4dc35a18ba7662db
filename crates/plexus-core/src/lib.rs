//! Core types shared across the plexus crates.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Full turn in radians; the glow phase wraps at this value.
pub const MAX_GLOW_PHASE: f32 = std::f32::consts::TAU;

/// Largest opacity value a connection or particle can have.
pub const MAX_ALPHA: u8 = 255;

/// An opaque 24-bit colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Colour theme for connection lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTheme {
    /// Red particle links, cyan cursor links.
    #[default]
    Classic,
    Ice,
    Ember,
    Mono,
}

impl LineTheme {
    /// Cycle to the next line theme.
    pub fn next(&self) -> Self {
        match self {
            LineTheme::Classic => LineTheme::Ice,
            LineTheme::Ice => LineTheme::Ember,
            LineTheme::Ember => LineTheme::Mono,
            LineTheme::Mono => LineTheme::Classic,
        }
    }

    /// Colour of particle-to-particle connections.
    pub fn link_color(self) -> Rgb {
        match self {
            LineTheme::Classic => Rgb::new(255, 0, 0),
            LineTheme::Ice => Rgb::new(70, 130, 255),
            LineTheme::Ember => Rgb::new(255, 140, 0),
            LineTheme::Mono => Rgb::new(200, 200, 200),
        }
    }

    /// Colour of cursor-to-particle connections.
    pub fn cursor_color(self) -> Rgb {
        match self {
            LineTheme::Classic => Rgb::new(0, 255, 255),
            LineTheme::Ice => Rgb::new(220, 240, 255),
            LineTheme::Ember => Rgb::new(255, 230, 120),
            LineTheme::Mono => Rgb::WHITE,
        }
    }

    /// Human readable name for the status line.
    pub fn name(self) -> &'static str {
        match self {
            LineTheme::Classic => "classic",
            LineTheme::Ice => "ice",
            LineTheme::Ember => "ember",
            LineTheme::Mono => "mono",
        }
    }
}

/// Tunable constants of the particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Width of the virtual canvas.
    pub width: u32,
    /// Height of the virtual canvas.
    pub height: u32,
    /// Number of particles created at startup.
    pub particle_count: usize,
    /// Distance under which two entities are connected by a line.
    pub connection_distance: f32,
    /// Scale of the random initial velocity.
    pub particle_speed: f32,
    /// Distance under which the cursor attracts particles.
    pub influence_radius: f32,
    /// Scale of the attraction impulse.
    pub attraction_strength: f32,
    /// Glow phase advance per tick, in radians.
    pub glow_step: f32,
    /// How far past the canvas edge a particle may travel before bouncing.
    pub boundary_offset: f32,
    /// Smallest particle diameter (inclusive).
    pub min_size: u32,
    /// Largest particle diameter (exclusive).
    pub max_size: u32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            particle_count: 25,
            connection_distance: 170.0,
            particle_speed: 4.0,
            influence_radius: 150.0,
            attraction_strength: 0.1,
            glow_step: 0.15,
            boundary_offset: 50.0,
            min_size: 5,
            max_size: 10,
        }
    }
}
