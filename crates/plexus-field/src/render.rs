//! Drawing a particle field onto a terminal canvas.

use plexus_core::{LineTheme, Rgb};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Context, Line, Points},
    },
};

use crate::color::blend;
use crate::field::{Connection, Field};
use crate::viewport::Viewport;

/// Canvas background; all translucency is blended against it.
pub const BACKGROUND: Rgb = Rgb::BLACK;

/// Widget that paints links, cursor links and particles, in that order.
#[derive(Debug, Clone, Copy)]
pub struct FieldWidget<'a> {
    field: &'a Field,
    theme: LineTheme,
}

impl<'a> FieldWidget<'a> {
    pub fn new(field: &'a Field, theme: LineTheme) -> Self {
        Self { field, theme }
    }

    /// Viewport the widget would use when rendered into `area`.
    pub fn viewport(&self, area: Rect) -> Viewport {
        let settings = self.field.settings();
        Viewport::new(area, settings.width as f32, settings.height as f32)
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = self.viewport(area);
        let link = self.theme.link_color();
        let cursor = self.theme.cursor_color();

        Canvas::default()
            .background_color(BACKGROUND.into())
            .marker(Marker::Braille)
            .x_bounds([0.0, viewport.width as f64])
            .y_bounds([0.0, viewport.height as f64])
            .paint(|ctx| {
                for connection in self.field.connections() {
                    draw_connection(ctx, &viewport, connection, link);
                }
                for connection in self.field.mouse_connections() {
                    draw_connection(ctx, &viewport, connection, cursor);
                }
                ctx.layer();

                for particle in self.field.particles() {
                    let color = blend(particle.color, particle.flicker_alpha(), BACKGROUND);
                    let (x, y) = viewport.to_canvas(particle.pos);
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: particle.size as f64 / 2.0,
                        color,
                    });
                    ctx.draw(&Points {
                        coords: &[(x, y)],
                        color,
                    });
                }
            })
            .render(area, buf);
    }
}

fn draw_connection(ctx: &mut Context, viewport: &Viewport, connection: Connection, color: Rgb) {
    if connection.alpha == 0 {
        return;
    }
    let (x1, y1) = viewport.to_canvas(connection.from);
    let (x2, y2) = viewport.to_canvas(connection.to);
    ctx.draw(&Line::new(
        x1,
        y1,
        x2,
        y2,
        blend(color, connection.alpha, BACKGROUND),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::connection_alpha;
    use crate::particle::Particle;
    use glam::Vec2;
    use plexus_core::FieldSettings;
    use ratatui::style::Color;

    fn empty_field() -> Field {
        let settings = FieldSettings {
            particle_count: 0,
            ..Default::default()
        };
        Field::with_seed(settings, 0)
    }

    fn bright(x: f32, y: f32, color: Rgb) -> Particle {
        Particle::new(
            Vec2::new(x, y),
            Vec2::ZERO,
            6,
            color,
            std::f32::consts::FRAC_PI_2,
        )
    }

    fn has_fg(buf: &Buffer, color: Color) -> bool {
        buf.content().iter().any(|cell| cell.fg == color)
    }

    fn render(field: &Field, theme: LineTheme) -> Buffer {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        FieldWidget::new(field, theme).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_empty_field_is_black() {
        let buf = render(&empty_field(), LineTheme::Classic);
        for cell in buf.content() {
            assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
            assert!(cell.symbol() == " " || cell.symbol() == "\u{2800}");
        }
    }

    #[test]
    fn test_particle_is_drawn_in_its_color() {
        let mut field = empty_field();
        field.push(bright(400.0, 300.0, Rgb::new(10, 200, 30)));
        let buf = render(&field, LineTheme::Classic);
        assert!(has_fg(&buf, Color::Rgb(10, 200, 30)));
    }

    #[test]
    fn test_link_is_blended_theme_color() {
        let mut field = empty_field();
        field.push(bright(100.0, 300.0, Rgb::WHITE));
        field.push(bright(200.0, 300.0, Rgb::WHITE));
        let buf = render(&field, LineTheme::Classic);

        let alpha = connection_alpha(100.0, 170.0);
        let expected = blend(LineTheme::Classic.link_color(), alpha, BACKGROUND);
        assert!(has_fg(&buf, expected));
    }

    #[test]
    fn test_cursor_link_uses_cursor_color() {
        let mut field = empty_field();
        field.push(bright(100.0, 300.0, Rgb::WHITE));
        field.attract(Vec2::new(200.0, 300.0));
        let buf = render(&field, LineTheme::Ice);

        let alpha = connection_alpha(100.0, 170.0);
        let expected = blend(LineTheme::Ice.cursor_color(), alpha, BACKGROUND);
        assert!(has_fg(&buf, expected));
    }

    #[test]
    fn test_viewport_matches_settings() {
        let field = empty_field();
        let vp = FieldWidget::new(&field, LineTheme::Classic).viewport(Rect::new(0, 0, 10, 10));
        assert_eq!((vp.width, vp.height), (800.0, 600.0));
    }
}
