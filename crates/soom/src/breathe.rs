//! Guided-breathing screen: pattern selection, session controls, and the
//! scaling breath circle.

use std::time::Duration;

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use soom_breath::BreathingSession;
use soom_core::{PATTERNS, Phase};
use soom_particles::shade;

/// Visible progress-bar width in cells.
const BAR_WIDTH: usize = 32;

pub struct BreatheScreen {
    session: BreathingSession,
    /// Index of the selected pattern in the catalog.
    selected: usize,
}

impl BreatheScreen {
    /// Create the screen with the named pattern selected, falling back to
    /// the first catalog entry.
    pub fn new(pattern_name: &str) -> Self {
        let selected = PATTERNS
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(pattern_name))
            .unwrap_or(0);
        Self {
            session: BreathingSession::new(&PATTERNS[selected]),
            selected,
        }
    }

    /// Name of the currently selected pattern, for persistence.
    pub fn pattern_name(&self) -> &'static str {
        PATTERNS[self.selected].name
    }

    /// Advance the session clock.
    pub fn update(&mut self, delta: Duration) {
        self.session.tick(delta.as_secs_f32());
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='4') => {
                self.select_pattern(c as usize - '1' as usize);
            }
            KeyCode::Char(' ') => self.toggle_session(),
            KeyCode::Char('r') => self.session.reset(),
            _ => {}
        }
    }

    /// Switch patterns. Any selection discards the session in progress, so
    /// a half-finished exercise can't continue under different timings.
    fn select_pattern(&mut self, index: usize) {
        if index >= PATTERNS.len() {
            return;
        }
        self.selected = index;
        self.session = BreathingSession::new(&PATTERNS[index]);
    }

    /// Space bar: pause while running, resume while paused mid-exercise,
    /// otherwise start from the top.
    fn toggle_session(&mut self) {
        if self.session.is_running() {
            self.session.pause();
        } else if self.session.phase().is_breathing() {
            self.session.resume();
        } else {
            self.session.start();
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(PATTERNS.len() as u16 + 1), // Pattern list
            Constraint::Fill(1),                           // Breath circle
            Constraint::Length(1),                         // Phase + countdown
            Constraint::Length(1),                         // Progress bar
            Constraint::Length(1),                         // Cycle + elapsed
        ])
        .split(area);

        self.render_pattern_list(frame, chunks[0]);
        self.render_circle(frame, chunks[1]);

        let color = phase_color(self.session.phase());

        let status = if self.session.phase() == Phase::Complete {
            Line::from("Great job! Take a moment to notice how you feel".fg(color))
        } else if self.session.phase().is_breathing() {
            let suffix = if self.session.is_running() { "" } else { "  (paused)" };
            Line::from(vec![
                self.session.phase().label().bold().fg(color),
                format!(" · {}s{}", self.session.seconds_remaining(), suffix).white(),
            ])
        } else {
            Line::from(self.session.phase().label().fg(color))
        };
        frame.render_widget(status.centered(), chunks[2]);

        frame.render_widget(self.progress_bar(color).centered(), chunks[3]);

        let pattern = self.session.pattern();
        let total = self.session.total_elapsed() as u32;
        let footer = Line::from(vec![
            format!(
                "Cycle {} of {}",
                (self.session.cycle_index() + 1).min(pattern.cycles),
                pattern.cycles
            )
            .dark_gray(),
            "   ".into(),
            format!("{}:{:02}", total / 60, total % 60).dark_gray(),
        ]);
        frame.render_widget(footer.centered(), chunks[4]);
    }

    fn render_pattern_list(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = PATTERNS
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let text = format!(
                    "{} {}  {}  {} cycles",
                    i + 1,
                    p.name,
                    p.timing_summary(),
                    p.cycles
                );
                if i == self.selected {
                    Line::from(vec!["▸ ".fg(phase_color(Phase::Inhale)), text.bold().white()])
                } else {
                    Line::from(vec!["  ".into(), text.dark_gray()])
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    /// Render the breath circle, scaled by the phase: it grows over the
    /// inhale, holds at full size, and shrinks back over the exhale.
    fn render_circle(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let scale = match self.session.phase() {
            Phase::Inhale => 1.0 + 0.5 * self.session.progress() / 100.0,
            Phase::Hold => 1.5,
            Phase::Exhale => 1.5 - 0.5 * self.session.progress() / 100.0,
            Phase::Ready | Phase::Complete => 1.0,
        };
        let color = phase_color(self.session.phase());

        let width = f32::from(area.width);
        let height = f32::from(area.height);
        let base = (width / 2.0).min(height) * 0.9;
        let radius = (base * scale / 1.5).max(1.0);

        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| {
                        let dx = f32::from(x) - width / 2.0;
                        // Adjust for terminal cell aspect ratio.
                        let dy = (f32::from(y) - height / 2.0) * 2.0;
                        let dist = (dx * dx + dy * dy).sqrt();

                        if dist > radius {
                            return Span::raw(" ");
                        }

                        let intensity = 1.0 - dist / radius;
                        let ch = if intensity > 0.75 {
                            '█'
                        } else if intensity > 0.5 {
                            '▓'
                        } else if intensity > 0.25 {
                            '▒'
                        } else {
                            '░'
                        };
                        Span::styled(
                            ch.to_string(),
                            Style::new().fg(shade(color, 0.35 + 0.65 * intensity)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn progress_bar(&self, color: Color) -> Line<'static> {
        let filled = ((self.session.progress() / 100.0 * BAR_WIDTH as f32).round() as usize)
            .min(BAR_WIDTH);
        Line::from(vec![
            Span::styled("█".repeat(filled), Style::new().fg(color)),
            Span::styled("░".repeat(BAR_WIDTH - filled), Style::new().fg(Color::DarkGray)),
        ])
    }
}

/// Display color for each phase.
fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Ready => Color::Rgb(148, 163, 184),
        Phase::Inhale => Color::Rgb(96, 165, 250),
        Phase::Hold => Color::Rgb(168, 85, 247),
        Phase::Exhale => Color::Rgb(34, 197, 94),
        Phase::Complete => Color::Rgb(251, 191, 36),
    }
}
