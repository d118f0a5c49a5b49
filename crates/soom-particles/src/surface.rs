//! Drawing surface abstraction and its terminal implementation.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::color::shade;

/// Primitive drawing operations the particle field needs. Coordinates are in
/// field units with the origin at the top-left of the surface.
pub trait Surface {
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, opacity: f32);
    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, opacity: f32);
    /// Vertical line segment starting at (x, y) and extending downward.
    fn vline(&mut self, x: f32, y: f32, length: f32, color: Color, opacity: f32);
}

/// Field units per terminal cell. Particle sizes carry the source scale of a
/// few units per dot, so a divisor keeps small particles single-cell.
const CELL_SCALE: f32 = 3.0;

/// A [`Surface`] that writes glyphs into a ratatui buffer region.
///
/// One field unit maps to one cell horizontally; vertical distances are
/// halved in circle math to compensate for the 2:1 cell aspect ratio.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    /// Write one glyph at area-relative cell coordinates, ignoring writes
    /// that fall outside the area.
    fn put(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        if x >= self.area.width || y >= self.area.height {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((self.area.x + x, self.area.y + y)) {
            cell.set_char(ch);
            cell.set_fg(color);
        }
    }
}

/// Single-cell glyph for a filled dot of the given size.
fn dot_glyph(radius: f32) -> char {
    if radius < 2.0 {
        '·'
    } else if radius < 3.5 {
        '•'
    } else {
        '●'
    }
}

impl Surface for BufferSurface<'_> {
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, opacity: f32) {
        let color = shade(color, opacity);
        let cx = x.round() as i32;
        let cy = y.round() as i32;

        let r = radius / CELL_SCALE;
        if r < 0.75 {
            self.put(cx, cy, dot_glyph(radius), color);
            return;
        }

        let span = r.ceil() as i32;
        for dy in -span..=span {
            for dx in -span..=span {
                // Halve vertical reach for the terminal cell aspect ratio.
                let dist = ((dx * dx + dy * dy * 4) as f32).sqrt();
                if dist <= r {
                    let ch = if dist <= r * 0.5 { '●' } else { '•' };
                    self.put(cx + dx, cy + dy, ch, color);
                }
            }
        }
    }

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, opacity: f32) {
        let color = shade(color, opacity);
        let cx = x.round() as i32;
        let cy = y.round() as i32;

        let r = radius / CELL_SCALE;
        if r < 0.75 {
            self.put(cx, cy, '○', color);
            return;
        }

        let span = r.ceil() as i32;
        for dy in -span..=span {
            for dx in -span..=span {
                let dist = ((dx * dx + dy * dy * 4) as f32).sqrt();
                if (dist - r).abs() <= 0.5 {
                    self.put(cx + dx, cy + dy, '◦', color);
                }
            }
        }
    }

    fn vline(&mut self, x: f32, y: f32, length: f32, color: Color, opacity: f32) {
        let color = shade(color, opacity);
        let cx = x.round() as i32;
        let cy = y.round() as i32;
        let cells = ((length / CELL_SCALE).round() as i32).max(1);
        for i in 0..cells {
            self.put(cx, cy + i, '│', color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> Buffer {
        Buffer::empty(Rect::new(0, 0, 20, 10))
    }

    #[test]
    fn test_small_fill_is_a_single_glyph() {
        let mut buf = buffer();
        let area = buf.area;
        let mut surface = BufferSurface::new(&mut buf, area);
        surface.fill_circle(5.0, 4.0, 1.5, Color::Rgb(255, 255, 255), 1.0);

        assert_eq!(buf.cell((5, 4)).unwrap().symbol(), "·");
        assert_eq!(buf.cell((6, 4)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_vline_extends_downward() {
        let mut buf = buffer();
        let area = buf.area;
        let mut surface = BufferSurface::new(&mut buf, area);
        surface.vline(3.0, 2.0, 6.0, Color::Rgb(96, 165, 250), 1.0);

        assert_eq!(buf.cell((3, 2)).unwrap().symbol(), "│");
        assert_eq!(buf.cell((3, 3)).unwrap().symbol(), "│");
        assert_eq!(buf.cell((3, 4)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_offscreen_draws_are_ignored() {
        let mut buf = buffer();
        let area = buf.area;
        let mut surface = BufferSurface::new(&mut buf, area);
        surface.fill_circle(-30.0, -30.0, 5.0, Color::Rgb(255, 0, 0), 1.0);
        surface.stroke_circle(100.0, 100.0, 8.0, Color::Rgb(255, 0, 0), 1.0);
        surface.vline(0.0, 50.0, 4.0, Color::Rgb(255, 0, 0), 1.0);

        for y in 0..10u16 {
            for x in 0..20u16 {
                assert_eq!(buf.cell((x, y)).unwrap().symbol(), " ");
            }
        }
    }

    #[test]
    fn test_opacity_dims_the_written_color() {
        let mut buf = buffer();
        let area = buf.area;
        let mut surface = BufferSurface::new(&mut buf, area);
        surface.fill_circle(2.0, 2.0, 1.0, Color::Rgb(200, 100, 50), 0.5);

        assert_eq!(buf.cell((2, 2)).unwrap().fg, Color::Rgb(100, 50, 25));
    }
}
