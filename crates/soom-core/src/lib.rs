//! Core types for the soom breathwork and ambient-scene app.
//!
//! Holds the fixed catalogs (breathing patterns, scene environments) and the
//! small shared types the other crates build on. Everything here is plain
//! data; the state machines live in `soom-breath` and `soom-particles`.

mod environment;
mod pattern;

pub use environment::{ENVIRONMENTS, Environment, ParticleKind};
pub use pattern::{BreathingPattern, PATTERNS, Phase};

/// Extent of the drawable field, in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when the field has no drawable extent.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(u16, u16)> for Bounds {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(f32::from(width), f32::from(height))
    }
}
