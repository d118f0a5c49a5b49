use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
};
use soom_config::Config;

mod breathe;
mod scene;

use breathe::BreatheScreen;
use scene::SceneScreen;

/// Accent color for keys and the app name.
const ACCENT: Color = Color::Rgb(96, 165, 250);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Which screen currently owns the main area and key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Breathe,
    Scene,
}

impl Screen {
    fn toggle(self) -> Self {
        match self {
            Screen::Breathe => Screen::Scene,
            Screen::Scene => Screen::Breathe,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Screen::Breathe => "Breathe",
            Screen::Scene => "Scene",
        }
    }
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Currently visible screen.
    screen: Screen,
    breathe: BreatheScreen,
    scene: SceneScreen,
    config: Config,
}

impl App {
    /// Construct the app from the loaded configuration.
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            screen: Screen::Breathe,
            breathe: BreatheScreen::new(&config.pattern),
            scene: SceneScreen::new(&config.environment),
            config,
        }
    }

    /// Run the application's main loop. The event-poll timeout doubles as
    /// the tick source for both screens; the measured inter-iteration delta
    /// is what actually advances their clocks.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut last_tick = Instant::now();

        while self.running {
            let now = Instant::now();
            self.update(now.duration_since(last_tick));
            last_tick = now;

            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        // Persist the last selections for the next launch.
        self.config.pattern = self.breathe.pattern_name().to_string();
        self.config.environment = self.scene.environment_id().to_string();
        self.config.save()?;
        Ok(())
    }

    /// Feed elapsed wall time to the active state machines.
    fn update(&mut self, delta: Duration) {
        self.breathe.update(delta);
        self.scene.update(delta);
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Fill(1),   // Screen body
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let header = Line::from(vec![
            "soom".bold().fg(ACCENT),
            "  ".into(),
            self.screen.title().white(),
            "  ".into(),
            Local::now().format("%A, %B %d").to_string().dark_gray(),
        ])
        .centered();
        frame.render_widget(header, chunks[0]);

        match self.screen {
            Screen::Breathe => self.breathe.render(frame, chunks[1]),
            Screen::Scene => self.scene.render(frame, chunks[1]),
        }

        frame.render_widget(self.help_line(), chunks[2]);
    }

    /// Bottom help line for the active screen.
    fn help_line(&self) -> Line<'static> {
        let line = match self.screen {
            Screen::Breathe => Line::from(vec![
                "q".bold().fg(ACCENT),
                " quit  ".dark_gray(),
                "tab".bold().fg(ACCENT),
                " scene  ".dark_gray(),
                "1-4".bold().fg(ACCENT),
                " pattern  ".dark_gray(),
                "space".bold().fg(ACCENT),
                " start/pause  ".dark_gray(),
                "r".bold().fg(ACCENT),
                " reset".dark_gray(),
            ]),
            Screen::Scene => Line::from(vec![
                "q".bold().fg(ACCENT),
                " quit  ".dark_gray(),
                "tab".bold().fg(ACCENT),
                " breathe  ".dark_gray(),
                "←/→".bold().fg(ACCENT),
                " environment  ".dark_gray(),
                "space".bold().fg(ACCENT),
                " play/pause".dark_gray(),
            ]),
        };
        line.centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a timeout so both screens tick in real time.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab) => self.screen = self.screen.toggle(),
            _ => match self.screen {
                Screen::Breathe => self.breathe.on_key(key.code),
                Screen::Scene => self.scene.on_key(key.code),
            },
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
