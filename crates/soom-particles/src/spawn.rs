//! Per-kind particle generation rules.

use rand::Rng;
use ratatui::style::Color;
use soom_core::{Bounds, ParticleKind};

use crate::field::Particle;

const RAIN_BLUE: Color = Color::Rgb(96, 165, 250);
const SNOW_WHITE: Color = Color::Rgb(255, 255, 255);
const SPARKLE_GOLD: Color = Color::Rgb(251, 191, 36);
const BUBBLE_CYAN: Color = Color::Rgb(103, 232, 249);
const FIREFLY_YELLOW: Color = Color::Rgb(253, 224, 71);

/// Leaf particles pick one of these greens each.
const LEAF_GREENS: [Color; 3] = [
    Color::Rgb(22, 163, 74),
    Color::Rgb(34, 197, 94),
    Color::Rgb(101, 163, 13),
];

/// How far off-screen a fresh particle may start, so entries stagger instead
/// of arriving as one sheet.
const ENTRY_STAGGER: f32 = 100.0;

/// Uniform sample that degrades to `lo` when the range has no extent.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Create one particle of the given kind, positioned off-screen on the side
/// its motion originates from.
pub(crate) fn spawn<R: Rng + ?Sized>(kind: ParticleKind, bounds: Bounds, rng: &mut R) -> Particle {
    let (vx, vy, size, color) = match kind {
        ParticleKind::Rain => (
            uniform(rng, -1.0, 1.0),
            uniform(rng, 2.0, 5.0),
            uniform(rng, 1.0, 3.0),
            RAIN_BLUE,
        ),
        ParticleKind::Snow => (
            uniform(rng, -0.5, 0.5),
            uniform(rng, 0.5, 2.0),
            uniform(rng, 2.0, 5.0),
            SNOW_WHITE,
        ),
        ParticleKind::Leaves => (
            uniform(rng, -1.0, 1.0),
            uniform(rng, 0.5, 1.5),
            uniform(rng, 3.0, 7.0),
            LEAF_GREENS[rng.random_range(0..LEAF_GREENS.len())],
        ),
        ParticleKind::Sparkles => (
            uniform(rng, -1.0, 1.0),
            uniform(rng, -1.0, 1.0),
            uniform(rng, 1.0, 4.0),
            SPARKLE_GOLD,
        ),
        ParticleKind::Bubbles => (
            uniform(rng, -0.5, 0.5),
            -uniform(rng, 1.0, 3.0),
            uniform(rng, 3.0, 9.0),
            BUBBLE_CYAN,
        ),
        ParticleKind::Fireflies => (
            uniform(rng, -1.0, 1.0),
            uniform(rng, -1.0, 1.0),
            uniform(rng, 2.0, 4.0),
            FIREFLY_YELLOW,
        ),
    };

    let x = uniform(rng, 0.0, bounds.width);
    let y = if kind.rises() {
        bounds.height + uniform(rng, 0.0, ENTRY_STAGGER)
    } else {
        -uniform(rng, 0.0, ENTRY_STAGGER)
    };

    Particle {
        x,
        y,
        vx,
        vy,
        size,
        opacity: uniform(rng, 0.3, 1.0),
        color,
    }
}
