//! Particle field simulation and rendering for plexus.
//!
//! A [`Field`] owns a population of drifting particles that bounce just
//! beyond the edges of a virtual canvas, pull towards the cursor, and are
//! linked by lines that fade with distance. [`FieldWidget`] paints a field
//! onto a ratatui buffer and [`Viewport`] maps terminal cells back into field
//! coordinates for mouse input.

mod color;
mod field;
mod particle;
mod render;
mod viewport;

pub use color::{blend, connection_alpha};
pub use field::{Connection, Field};
pub use particle::{Bounds, Particle};
pub use render::{BACKGROUND, FieldWidget};
pub use viewport::Viewport;
