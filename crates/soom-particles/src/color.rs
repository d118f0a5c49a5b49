//! Color utility functions for particle and backdrop rendering.

use ratatui::style::Color;

/// Dim an RGB color toward black by the given opacity (0.0-1.0).
///
/// Terminal cells have no alpha channel, so opacity is approximated by
/// scaling the channel values, the same trick the backdrop shimmer uses.
pub fn shade(color: Color, opacity: f32) -> Color {
    let f = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f32::from(r) * f) as u8,
            (f32::from(g) * f) as u8,
            (f32::from(b) * f) as u8,
        ),
        other => other,
    }
}

/// Linear blend between two RGB colors; `t` = 0 yields `a`, 1 yields `b`.
/// Non-RGB colors pass through unchanged.
pub fn blend(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => {
            Color::Rgb(lerp(ar, br, t), lerp(ag, bg, t), lerp(ab, bb, t))
        }
        _ => a,
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_scales_toward_black() {
        assert_eq!(shade(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(shade(Color::Rgb(200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(shade(Color::Rgb(200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(100, 200, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(50, 100, 25));
    }
}
