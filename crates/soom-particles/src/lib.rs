//! Ambient particle field for the soom scene screen.
//!
//! A [`ParticleField`] holds a fixed-size set of independently moving
//! particles whose velocity, size, and color rules come from the selected
//! environment's particle kind. The field is advanced one step at a time by
//! the caller's animation clock and drawn through the [`Surface`] trait,
//! which the terminal implementation maps onto buffer cells.

mod color;
mod field;
mod spawn;
mod surface;

pub use color::{blend, shade};
pub use field::{Particle, ParticleField};
pub use surface::{BufferSurface, Surface};
