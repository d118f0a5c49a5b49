//! Guided-breathing session state machine.
//!
//! A [`BreathingSession`] walks a fixed pattern through
//! ready → inhale → hold → exhale, repeating for the pattern's cycle count
//! and ending at complete. It is advanced by a fixed-rate clock owned by the
//! caller; each `tick` adds elapsed wall time and performs at most one phase
//! transition. Time overshooting a phase boundary is dropped rather than
//! carried into the next phase — at a 100 ms tick the error is invisible and
//! keeps phase starts aligned with what the user sees.

use soom_core::{BreathingPattern, Phase};

/// Mutable state of one guided-breathing session.
#[derive(Debug, Clone)]
pub struct BreathingSession {
    pattern: &'static BreathingPattern,
    phase: Phase,
    /// Completed cycles, in `0..=pattern.cycles`.
    cycle_index: u32,
    /// Seconds spent in the current phase, in `[0, phase duration)`.
    phase_elapsed: f32,
    /// Seconds spent breathing across the whole session.
    total_elapsed: f32,
    running: bool,
}

impl BreathingSession {
    /// Create an idle session for the given pattern.
    pub fn new(pattern: &'static BreathingPattern) -> Self {
        Self {
            pattern,
            phase: Phase::Ready,
            cycle_index: 0,
            phase_elapsed: 0.0,
            total_elapsed: 0.0,
            running: false,
        }
    }

    pub fn pattern(&self) -> &'static BreathingPattern {
        self.pattern
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed cycles so far.
    pub fn cycle_index(&self) -> u32 {
        self.cycle_index
    }

    /// Seconds elapsed in the current phase.
    pub fn phase_elapsed(&self) -> f32 {
        self.phase_elapsed
    }

    /// Seconds elapsed over the whole session.
    pub fn total_elapsed(&self) -> f32 {
        self.total_elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Duration of the current phase in seconds.
    pub fn current_phase_duration(&self) -> f32 {
        self.pattern.phase_duration(self.phase)
    }

    /// Whole seconds left in the current phase, for countdown display.
    pub fn seconds_remaining(&self) -> u32 {
        (self.current_phase_duration() - self.phase_elapsed).ceil().max(0.0) as u32
    }

    /// Progress through the current phase as a 0-100 percentage.
    pub fn progress(&self) -> f32 {
        let duration = self.current_phase_duration();
        if duration <= 0.0 {
            return 0.0;
        }
        (self.phase_elapsed / duration * 100.0).min(100.0)
    }

    /// Begin the session: first inhale of the first cycle.
    pub fn start(&mut self) {
        self.phase = Phase::Inhale;
        self.cycle_index = 0;
        self.phase_elapsed = 0.0;
        self.total_elapsed = 0.0;
        self.running = true;
    }

    /// Suspend ticking without losing phase state. Idempotent.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Continue a paused session. No-op when already running or when the
    /// session has not started / has finished.
    pub fn resume(&mut self) {
        if self.phase.is_breathing() {
            self.running = true;
        }
    }

    /// Return to the idle state, clearing all counters.
    pub fn reset(&mut self) {
        self.phase = Phase::Ready;
        self.cycle_index = 0;
        self.phase_elapsed = 0.0;
        self.total_elapsed = 0.0;
        self.running = false;
    }

    /// Advance the session by `delta_secs` of wall time. Does nothing unless
    /// the session is running. Performs at most one phase transition;
    /// overshoot past the phase boundary is dropped.
    pub fn tick(&mut self, delta_secs: f32) {
        if !self.running || !self.phase.is_breathing() {
            return;
        }

        self.total_elapsed += delta_secs;
        self.phase_elapsed += delta_secs;

        if self.phase_elapsed >= self.current_phase_duration() {
            self.advance_phase();
        }
    }

    /// Move to the next phase, resetting the phase clock.
    fn advance_phase(&mut self) {
        self.phase_elapsed = 0.0;

        match self.phase {
            Phase::Inhale => {
                // A zero-length hold is skipped entirely.
                self.phase = if self.pattern.hold_secs > 0.0 {
                    Phase::Hold
                } else {
                    Phase::Exhale
                };
            }
            Phase::Hold => {
                self.phase = Phase::Exhale;
            }
            Phase::Exhale => {
                self.cycle_index += 1;
                if self.cycle_index >= self.pattern.cycles {
                    self.phase = Phase::Complete;
                    self.running = false;
                } else {
                    self.phase = Phase::Inhale;
                }
            }
            Phase::Ready | Phase::Complete => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soom_core::PATTERNS;

    /// Drive a session with exact quarter-second ticks for `secs` seconds.
    fn tick_for(session: &mut BreathingSession, secs: f32) {
        let steps = (secs / 0.25).round() as u32;
        for _ in 0..steps {
            session.tick(0.25);
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = BreathingSession::new(&PATTERNS[0]);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.cycle_index(), 0);
        assert!(!session.is_running());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_tick_before_start_is_a_no_op() {
        let mut session = BreathingSession::new(&PATTERNS[0]);
        session.tick(1.0);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.total_elapsed(), 0.0);
    }

    #[test]
    fn test_equal_breathing_skips_hold() {
        // Equal Breathing: inhale 4, hold 0, exhale 4.
        let mut session = BreathingSession::new(&PATTERNS[2]);
        session.start();

        tick_for(&mut session, 4.0);
        assert_eq!(session.phase(), Phase::Exhale);

        tick_for(&mut session, 4.0);
        assert_eq!(session.cycle_index(), 1);
        assert_eq!(session.phase(), Phase::Inhale);
    }

    #[test]
    fn test_one_cycle_session_completes_after_one_exhale() {
        const ONE_CYCLE: BreathingPattern = BreathingPattern {
            name: "test",
            inhale_secs: 4.0,
            hold_secs: 0.0,
            exhale_secs: 4.0,
            cycles: 1,
        };
        let mut session = BreathingSession::new(&ONE_CYCLE);
        session.start();

        tick_for(&mut session, 4.0);
        assert_eq!(session.phase(), Phase::Exhale);

        tick_for(&mut session, 4.0);
        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.cycle_index(), 1);
        assert!(!session.is_running());
    }

    #[test]
    fn test_single_cycle_phase_walk() {
        // 4-7-8: one full cycle is 19 seconds.
        let mut session = BreathingSession::new(&PATTERNS[0]);
        session.start();
        assert_eq!(session.phase(), Phase::Inhale);

        tick_for(&mut session, 4.0);
        assert_eq!(session.phase(), Phase::Hold);

        tick_for(&mut session, 7.0);
        assert_eq!(session.phase(), Phase::Exhale);

        tick_for(&mut session, 8.0);
        assert_eq!(session.phase(), Phase::Inhale);
        assert_eq!(session.cycle_index(), 1);
    }

    #[test]
    fn test_every_pattern_runs_to_completion() {
        for pattern in PATTERNS {
            let mut session = BreathingSession::new(pattern);
            session.start();

            // Uneven tick rate; generous upper bound on iterations.
            let mut guard = 0u32;
            while session.phase() != Phase::Complete {
                session.tick(0.1);
                assert!(
                    session.phase_elapsed() < session.current_phase_duration()
                        || !session.phase().is_breathing(),
                    "phase clock escaped its bound for {}",
                    pattern.name
                );
                guard += 1;
                assert!(guard < 100_000, "{} never completed", pattern.name);
            }

            assert_eq!(session.cycle_index(), pattern.cycles);
            assert!(!session.is_running());
        }
    }

    #[test]
    fn test_overshoot_is_dropped() {
        let mut session = BreathingSession::new(&PATTERNS[0]);
        session.start();

        // One oversized tick crosses the inhale boundary; the excess must
        // not leak into the hold phase.
        session.tick(5.5);
        assert_eq!(session.phase(), Phase::Hold);
        assert_eq!(session.phase_elapsed(), 0.0);
        assert_eq!(session.total_elapsed(), 5.5);
    }

    #[test]
    fn test_progress_stays_in_range() {
        let mut session = BreathingSession::new(&PATTERNS[1]);
        session.start();
        for _ in 0..500 {
            session.tick(0.1);
            let p = session.progress();
            assert!((0.0..=100.0).contains(&p));
        }
    }

    #[test]
    fn test_pause_and_resume_are_idempotent() {
        let mut session = BreathingSession::new(&PATTERNS[1]);
        session.start();
        tick_for(&mut session, 1.0);

        session.pause();
        session.pause();
        assert!(!session.is_running());

        let frozen_phase = session.phase();
        let frozen_elapsed = session.phase_elapsed();
        session.tick(10.0);
        assert_eq!(session.phase(), frozen_phase);
        assert_eq!(session.phase_elapsed(), frozen_elapsed);

        session.resume();
        session.resume();
        assert!(session.is_running());
        assert_eq!(session.phase(), frozen_phase);
        assert_eq!(session.phase_elapsed(), frozen_elapsed);
    }

    #[test]
    fn test_resume_does_not_revive_finished_session() {
        let mut session = BreathingSession::new(&PATTERNS[2]);
        session.start();
        while session.phase() != Phase::Complete {
            session.tick(0.25);
        }

        session.resume();
        assert!(!session.is_running());
        assert_eq!(session.phase(), Phase::Complete);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut session = BreathingSession::new(&PATTERNS[0]);
        session.start();
        tick_for(&mut session, 6.0);
        session.reset();

        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.cycle_index(), 0);
        assert_eq!(session.phase_elapsed(), 0.0);
        assert_eq!(session.total_elapsed(), 0.0);
        assert!(!session.is_running());
    }

    #[test]
    fn test_seconds_remaining_counts_down() {
        let mut session = BreathingSession::new(&PATTERNS[0]);
        session.start();
        assert_eq!(session.seconds_remaining(), 4);
        tick_for(&mut session, 1.5);
        assert_eq!(session.seconds_remaining(), 3);
    }
}
