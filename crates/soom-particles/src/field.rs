//! Particle field state and per-step motion.

use rand::Rng;
use ratatui::style::Color;
use soom_core::{Bounds, Environment, ParticleKind};

use crate::spawn;
use crate::surface::Surface;

/// Particles teleport to the opposite edge once they are this far outside
/// the visible bounds.
const WRAP_MARGIN: f32 = 10.0;

/// One moving particle. Position and velocity are in field units; `size`
/// drives both glyph choice and drawn extent.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub opacity: f32,
    pub color: Color,
}

/// A fixed-size set of recycling particles for one environment.
///
/// The field is replaced wholesale when the environment changes; particles
/// are never destroyed individually, only wrapped back across the bounds.
#[derive(Debug)]
pub struct ParticleField {
    kind: ParticleKind,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate a fresh field for the environment, with every particle
    /// sampled from the environment's rule set.
    pub fn new<R: Rng + ?Sized>(environment: &Environment, bounds: Bounds, rng: &mut R) -> Self {
        let kind = environment.particle_kind;
        let particles = (0..environment.particle_count)
            .map(|_| spawn::spawn(kind, bounds, rng))
            .collect();
        Self { kind, particles }
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
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

    /// Advance every particle one step and wrap those that left the bounds.
    ///
    /// Rising kinds wrap top to bottom, falling kinds bottom to top, and
    /// free-floating kinds on both vertical edges; every wrap re-rolls the
    /// horizontal position so recycled particles don't retrace their path.
    pub fn advance<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        let kind = self.kind;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            let top = -WRAP_MARGIN;
            let bottom = bounds.height + WRAP_MARGIN;

            if kind.rises() {
                if p.y < top {
                    p.y = bottom;
                    p.x = spawn::uniform(rng, 0.0, bounds.width);
                }
            } else if p.y > bottom {
                p.y = top;
                p.x = spawn::uniform(rng, 0.0, bounds.width);
            } else if kind.drifts() && p.y < top {
                p.y = bottom;
                p.x = spawn::uniform(rng, 0.0, bounds.width);
            }

            if p.x < -WRAP_MARGIN {
                p.x = bounds.width + WRAP_MARGIN;
            } else if p.x > bounds.width + WRAP_MARGIN {
                p.x = -WRAP_MARGIN;
            }
        }
    }

    /// Draw the field. Bubbles render as outlines, rain as short vertical
    /// streaks, everything else as filled dots.
    pub fn render(&self, surface: &mut dyn Surface) {
        for p in &self.particles {
            match self.kind {
                ParticleKind::Bubbles => {
                    surface.stroke_circle(p.x, p.y, p.size, p.color, p.opacity);
                }
                ParticleKind::Rain => {
                    surface.vline(p.x, p.y, p.size * 2.0, p.color, p.opacity);
                }
                _ => {
                    surface.fill_circle(p.x, p.y, p.size, p.color, p.opacity);
                }
            }
        }
    }
}
