//! Board/form handoff. Exactly one of the two screens is active; the other
//! is kept exactly as it was left.

use crossterm::event::KeyEvent;
use ratatui::prelude::*;

use crate::config::ThemeConfig;
use crate::model::{Status, Task};

use super::board::{render_board, BoardAction, BoardState};
use super::form::{render_form, FormAction, FormState};

/// Which screen is rendered and receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Board,
    Form,
}

/// Inbound events, including messages screens send each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Resize(u16, u16),
    Key(KeyEvent),
    /// A finished form delivering its task to the board
    TaskCreated(Task),
}

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Two-slot register holding the last-known board and form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSwitch {
    pub board: BoardState,
    pub form: FormState,
    active: Screen,
}

impl ModeSwitch {
    pub fn new(board: BoardState) -> Self {
        Self {
            board,
            form: FormState::new(Status::Todo),
            active: Screen::Board,
        }
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    /// Process one event to completion, including any follow-up message it
    /// produces, before returning
    pub fn update(&mut self, msg: Msg) -> Flow {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            match self.step(msg) {
                (Flow::Quit, _) => return Flow::Quit,
                (Flow::Continue, follow_up) => next = follow_up,
            }
        }
        Flow::Continue
    }

    fn step(&mut self, msg: Msg) -> (Flow, Option<Msg>) {
        match msg {
            Msg::Resize(width, height) => {
                // The form lays itself out per frame; only the board keeps sizes
                self.board.handle_resize(width, height);
                (Flow::Continue, None)
            }
            Msg::TaskCreated(task) => {
                tracing::info!(status = ?task.status, title = %task.title, "task created");
                self.board.insert_task(task);
                (Flow::Continue, None)
            }
            Msg::Key(key) => match self.active {
                Screen::Board => self.board_key(&key),
                Screen::Form => self.form_key(&key),
            },
        }
    }

    fn board_key(&mut self, key: &KeyEvent) -> (Flow, Option<Msg>) {
        match self.board.handle_key(key) {
            BoardAction::None => (Flow::Continue, None),
            BoardAction::Quit => (Flow::Quit, None),
            BoardAction::NewTask(target) => {
                tracing::info!(?target, "opening task form");
                self.form = FormState::new(target);
                self.active = Screen::Form;
                (Flow::Continue, None)
            }
        }
    }

    fn form_key(&mut self, key: &KeyEvent) -> (Flow, Option<Msg>) {
        match self.form.handle_key(key) {
            FormAction::None => (Flow::Continue, None),
            FormAction::Quit => {
                self.board.quitting = true;
                (Flow::Quit, None)
            }
            FormAction::Cancel => {
                tracing::info!("task form cancelled");
                self.active = Screen::Board;
                (Flow::Continue, None)
            }
            FormAction::Created(task) => {
                self.active = Screen::Board;
                (Flow::Continue, Some(Msg::TaskCreated(task)))
            }
        }
    }
}

/// Draw whichever screen is active
pub fn render(mode: &ModeSwitch, frame: &mut Frame, area: Rect, theme: &ThemeConfig) {
    if mode.board.quitting {
        return;
    }
    match mode.active {
        Screen::Board => render_board(&mode.board, frame, area, theme),
        Screen::Form => render_form(&mode.form, frame, area, theme),
    }
}
