//! Scene environment catalog.

use ratatui::style::Color;

/// The motion and appearance rule set bound to an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Rain,
    Snow,
    Leaves,
    Sparkles,
    Bubbles,
    Fireflies,
}

impl ParticleKind {
    /// Rising kinds enter from below the bottom edge and wrap top-to-bottom.
    pub fn rises(self) -> bool {
        matches!(self, ParticleKind::Bubbles)
    }

    /// Free-floating kinds have no dominant vertical direction and wrap on
    /// both vertical edges.
    pub fn drifts(self) -> bool {
        matches!(self, ParticleKind::Sparkles | ParticleKind::Fireflies)
    }
}

/// An immersive scene from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Dominant backdrop color.
    pub primary_color: Color,
    /// Accent backdrop color.
    pub secondary_color: Color,
    pub particle_kind: ParticleKind,
    pub particle_count: usize,
}

impl Environment {
    /// Look an environment up by id.
    pub fn find(id: &str) -> Option<&'static Environment> {
        ENVIRONMENTS.iter().find(|e| e.id == id)
    }
}

/// The fixed catalog of scene environments.
pub const ENVIRONMENTS: &[Environment] = &[
    Environment {
        id: "rain",
        name: "Rainy Day",
        description: "Gentle rainfall with soft gray clouds",
        primary_color: Color::Rgb(100, 116, 139),
        secondary_color: Color::Rgb(148, 163, 184),
        particle_kind: ParticleKind::Rain,
        particle_count: 50,
    },
    Environment {
        id: "sunset",
        name: "Golden Sunset",
        description: "Warm sunset glow with floating particles",
        primary_color: Color::Rgb(245, 158, 11),
        secondary_color: Color::Rgb(249, 115, 22),
        particle_kind: ParticleKind::Sparkles,
        particle_count: 30,
    },
    Environment {
        id: "night",
        name: "Starry Night",
        description: "Peaceful night with twinkling stars",
        primary_color: Color::Rgb(30, 41, 59),
        secondary_color: Color::Rgb(51, 65, 85),
        particle_kind: ParticleKind::Fireflies,
        particle_count: 25,
    },
    Environment {
        id: "forest",
        name: "Enchanted Forest",
        description: "Mystical forest with floating leaves",
        primary_color: Color::Rgb(22, 163, 74),
        secondary_color: Color::Rgb(34, 197, 94),
        particle_kind: ParticleKind::Leaves,
        particle_count: 40,
    },
    Environment {
        id: "ocean",
        name: "Ocean Depths",
        description: "Underwater serenity with bubbles",
        primary_color: Color::Rgb(14, 165, 233),
        secondary_color: Color::Rgb(6, 182, 212),
        particle_kind: ParticleKind::Bubbles,
        particle_count: 35,
    },
    Environment {
        id: "winter",
        name: "Winter Wonderland",
        description: "Peaceful snowfall in a winter scene",
        primary_color: Color::Rgb(224, 242, 254),
        secondary_color: Color::Rgb(186, 230, 253),
        particle_kind: ParticleKind::Snow,
        particle_count: 60,
    },
    Environment {
        id: "fireplace",
        name: "Cozy Fireplace",
        description: "Warm fireplace with dancing embers",
        primary_color: Color::Rgb(220, 38, 38),
        secondary_color: Color::Rgb(249, 115, 22),
        particle_kind: ParticleKind::Sparkles,
        particle_count: 45,
    },
    Environment {
        id: "mountain",
        name: "Mountain Peak",
        description: "Serene mountain vista with gentle breeze",
        primary_color: Color::Rgb(124, 58, 237),
        secondary_color: Color::Rgb(168, 85, 247),
        particle_kind: ParticleKind::Sparkles,
        particle_count: 20,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        assert_eq!(Environment::find("ocean").map(|e| e.name), Some("Ocean Depths"));
        assert!(Environment::find("volcano").is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in ENVIRONMENTS.iter().enumerate() {
            for b in &ENVIRONMENTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_motion_directions() {
        assert!(ParticleKind::Bubbles.rises());
        assert!(!ParticleKind::Rain.rises());
        assert!(ParticleKind::Fireflies.drifts());
        assert!(!ParticleKind::Snow.drifts());
    }
}
