//! Ambient scene screen: environment selection, gradient backdrop, and the
//! particle field.

use std::time::Duration;

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use soom_core::{Bounds, ENVIRONMENTS, Environment};
use soom_particles::{blend, shade, BufferSurface, ParticleField};

/// Milliseconds of wall time per animation step.
const STEP_MS: f32 = 100.0;

/// Ceiling on banked animation steps, so a stall doesn't replay as a burst.
const MAX_PENDING_STEPS: f32 = 8.0;

pub struct SceneScreen {
    /// Index of the selected environment in the catalog.
    selected: usize,
    /// Current particle field; rebuilt on environment or size changes.
    field: Option<ParticleField>,
    playing: bool,
    rng: StdRng,
    /// Animation steps owed to the field, accumulated from wall time.
    pending: f32,
    /// Last known body area, to reinitialize the field on resize.
    last_area: Rect,
}

impl SceneScreen {
    /// Create the screen with the given environment selected, falling back
    /// to the first catalog entry.
    pub fn new(environment_id: &str) -> Self {
        let selected = ENVIRONMENTS
            .iter()
            .position(|e| e.id == environment_id)
            .unwrap_or(0);
        Self {
            selected,
            field: None,
            playing: false,
            rng: StdRng::from_os_rng(),
            pending: 0.0,
            last_area: Rect::default(),
        }
    }

    /// Id of the currently selected environment, for persistence.
    pub fn environment_id(&self) -> &'static str {
        ENVIRONMENTS[self.selected].id
    }

    fn environment(&self) -> &'static Environment {
        &ENVIRONMENTS[self.selected]
    }

    /// Bank wall time toward animation steps while playing.
    pub fn update(&mut self, delta: Duration) {
        if self.playing {
            self.pending =
                (self.pending + delta.as_millis() as f32 / STEP_MS).min(MAX_PENDING_STEPS);
        }
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.cycle_environment(-1),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_environment(1),
            KeyCode::Char(' ') => self.playing = !self.playing,
            _ => {}
        }
    }

    /// Select the previous/next environment and discard the old field; the
    /// new one is generated wholesale on the next render.
    fn cycle_environment(&mut self, step: isize) {
        let len = ENVIRONMENTS.len() as isize;
        self.selected = ((self.selected as isize + step).rem_euclid(len)) as usize;
        self.field = None;
        self.pending = 0.0;
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let env = self.environment();

        // Rebuild the field when the environment changed or the terminal
        // was resized, the same way the backdrop animations reseed.
        let bounds = Bounds::from((area.width, area.height));
        if self.field.is_none() || area != self.last_area {
            self.field = Some(ParticleField::new(env, bounds, &mut self.rng));
            self.last_area = area;
            self.pending = 0.0;
        }

        self.render_backdrop(frame, area);

        let steps = self.pending.floor() as u32;
        self.pending -= steps as f32;
        if let Some(field) = self.field.as_mut() {
            for _ in 0..steps {
                field.advance(bounds, &mut self.rng);
            }
            field.render(&mut BufferSurface::new(frame.buffer_mut(), area));
        }

        self.render_overlay(frame, area);
    }

    /// Vertical gradient between the environment's two colors, dimmed so
    /// the particles stay legible on top of it.
    fn render_backdrop(&self, frame: &mut Frame, area: Rect) {
        let env = self.environment();
        let top = shade(env.primary_color, 0.25);
        let bottom = shade(env.secondary_color, 0.45);

        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let t = f32::from(y) / f32::from(area.height.max(1));
                let bg = blend(top, bottom, t);
                Line::from(Span::styled(
                    " ".repeat(area.width as usize),
                    Style::new().bg(bg),
                ))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_overlay(&self, frame: &mut Frame, area: Rect) {
        let env = self.environment();

        let selector = Line::from(vec![
            "← ".dark_gray(),
            env.name.bold().white(),
            " →".dark_gray(),
            format!("  {}/{}", self.selected + 1, ENVIRONMENTS.len()).dark_gray(),
        ])
        .centered();
        frame.render_widget(
            selector,
            Rect {
                height: 1,
                ..area
            },
        );

        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

        let status = if self.playing {
            Line::from(env.description.white())
        } else {
            Line::from(vec![
                env.description.white(),
                "  ·  paused".dark_gray(),
            ])
        };
        frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_environment_falls_back_to_first() {
        let screen = SceneScreen::new("nowhere");
        assert_eq!(screen.environment_id(), ENVIRONMENTS[0].id);
    }

    #[test]
    fn test_cycling_wraps_both_directions() {
        let mut screen = SceneScreen::new("rain");
        screen.cycle_environment(-1);
        assert_eq!(screen.environment_id(), ENVIRONMENTS.last().unwrap().id);
        screen.cycle_environment(1);
        assert_eq!(screen.environment_id(), "rain");
    }

    #[test]
    fn test_cycling_discards_the_field() {
        let mut screen = SceneScreen::new("rain");
        let env = screen.environment();
        screen.field = Some(ParticleField::new(
            env,
            Bounds::new(80.0, 24.0),
            &mut screen.rng,
        ));
        screen.cycle_environment(1);
        assert!(screen.field.is_none());
    }

    #[test]
    fn test_time_only_banks_while_playing() {
        let mut screen = SceneScreen::new("rain");
        screen.update(Duration::from_millis(500));
        assert_eq!(screen.pending, 0.0);

        screen.on_key(KeyCode::Char(' '));
        screen.update(Duration::from_millis(500));
        assert_eq!(screen.pending, 5.0);

        // A long stall is capped rather than replayed as a burst.
        screen.update(Duration::from_secs(60));
        assert_eq!(screen.pending, MAX_PENDING_STEPS);
    }
}
