use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};

use crate::config::{GlobalConfig, ThemeConfig};

use super::board::BoardState;
use super::mode::{self, Flow, ModeSwitch, Msg};

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Translate a terminal event into a message; None for events we ignore
pub fn to_msg(event: Event) -> Option<Msg> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Msg::Key(key)),
        Event::Resize(width, height) => Some(Msg::Resize(width, height)),
        _ => None,
    }
}

pub struct App {
    terminal: Terminal,
    mode: ModeSwitch,
    theme: ThemeConfig,
}

impl App {
    pub fn new(config: &GlobalConfig) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                // No App exists yet, so Drop won't restore the terminal
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(err).context("Failed to initialize terminal");
            }
        };

        Ok(Self {
            terminal,
            mode: ModeSwitch::new(BoardState::new()),
            theme: config.theme.clone(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        // Crossterm sends no resize at startup; size the board from the
        // current terminal dimensions
        let size = self.terminal.size()?;
        self.mode.update(Msg::Resize(size.width, size.height));

        loop {
            self.draw()?;

            let Some(msg) = to_msg(event::read()?) else {
                continue;
            };
            if self.mode.update(msg) == Flow::Quit {
                break;
            }
        }

        // Quitting state renders an empty surface
        self.draw()?;
        tracing::info!("quit");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let mode = &self.mode;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            let area = frame.area();
            mode::render(mode, frame, area, theme);
        })?;

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}
