//! Colour helpers for translucent drawing on an opaque terminal.

use plexus_core::{MAX_ALPHA, Rgb};
use ratatui::style::Color;
use rand::Rng;

/// Blend `color` at the given opacity over `background`.
///
/// Terminal cells have no alpha channel, so opacity is emulated by mixing
/// the two colours per channel.
pub fn blend(color: Rgb, alpha: u8, background: Rgb) -> Color {
    let mix = |fg: u8, bg: u8| -> u8 {
        let a = alpha as u32;
        let inv = (MAX_ALPHA - alpha) as u32;
        ((fg as u32 * a + bg as u32 * inv) / MAX_ALPHA as u32) as u8
    };

    Color::Rgb(
        mix(color.r, background.r),
        mix(color.g, background.g),
        mix(color.b, background.b),
    )
}

/// Opacity of a connection line at `distance`, fading linearly to zero at
/// `threshold`.
pub fn connection_alpha(distance: f32, threshold: f32) -> u8 {
    let alpha = (threshold - distance) / threshold;
    (alpha * MAX_ALPHA as f32) as u8
}

/// Pick a uniformly random opaque colour.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    )
}
