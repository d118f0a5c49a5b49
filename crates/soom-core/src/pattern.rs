//! Breathing pattern catalog and phase type.

/// One discrete stage of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the user to start.
    #[default]
    Ready,
    Inhale,
    Hold,
    Exhale,
    /// All cycles finished; terminal.
    Complete,
}

impl Phase {
    /// Display label for the phase.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Ready => "Ready to begin",
            Phase::Inhale => "Breathe In",
            Phase::Hold => "Hold",
            Phase::Exhale => "Breathe Out",
            Phase::Complete => "Complete",
        }
    }

    /// True for the phases a running session moves through.
    pub fn is_breathing(self) -> bool {
        matches!(self, Phase::Inhale | Phase::Hold | Phase::Exhale)
    }
}

/// An immutable guided-breathing pattern from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreathingPattern {
    pub name: &'static str,
    /// Inhale duration in seconds.
    pub inhale_secs: f32,
    /// Hold duration in seconds; 0 skips the hold phase entirely.
    pub hold_secs: f32,
    /// Exhale duration in seconds.
    pub exhale_secs: f32,
    /// Number of full inhale-hold-exhale cycles in a session.
    pub cycles: u32,
}

impl BreathingPattern {
    /// Duration of the given phase under this pattern. Ready and Complete
    /// have no duration.
    pub fn phase_duration(&self, phase: Phase) -> f32 {
        match phase {
            Phase::Inhale => self.inhale_secs,
            Phase::Hold => self.hold_secs,
            Phase::Exhale => self.exhale_secs,
            Phase::Ready | Phase::Complete => 0.0,
        }
    }

    /// Length of one full cycle in seconds.
    pub fn cycle_secs(&self) -> f32 {
        self.inhale_secs + self.hold_secs + self.exhale_secs
    }

    /// Short "4s-7s-8s" style summary for listings.
    pub fn timing_summary(&self) -> String {
        format!(
            "{}s-{}s-{}s",
            self.inhale_secs, self.hold_secs, self.exhale_secs
        )
    }

    /// Look a pattern up by name, ignoring case.
    pub fn find(name: &str) -> Option<&'static BreathingPattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// The fixed catalog of breathing patterns.
pub const PATTERNS: &[BreathingPattern] = &[
    BreathingPattern {
        name: "4-7-8 Technique",
        inhale_secs: 4.0,
        hold_secs: 7.0,
        exhale_secs: 8.0,
        cycles: 4,
    },
    BreathingPattern {
        name: "Box Breathing",
        inhale_secs: 4.0,
        hold_secs: 4.0,
        exhale_secs: 4.0,
        cycles: 4,
    },
    BreathingPattern {
        name: "Equal Breathing",
        inhale_secs: 4.0,
        hold_secs: 0.0,
        exhale_secs: 4.0,
        cycles: 6,
    },
    BreathingPattern {
        name: "Calming Breath",
        inhale_secs: 4.0,
        hold_secs: 2.0,
        exhale_secs: 6.0,
        cycles: 5,
    },
];
