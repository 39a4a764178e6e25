use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

use crate::config::ThemeConfig;
use crate::error::BoardError;
use crate::model::{seed_tasks, Status, Task};

use super::column::{ColumnList, TaskList};
use super::hex_to_color;
use super::keys::KeyCommand;

/// Rows reserved below the columns for the help footer
pub const FOOTER_HEIGHT: u16 = 1;

pub const BOARD_HELP: &str = " ←/h →/l column • ↑/k ↓/j select • enter move • n new • q quit";

/// What the board asks of its owner after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    None,
    /// Open the task form targeting this column
    NewTask(Status),
    Quit,
}

/// Move the selected task of column `from` to the bottom of the next
/// column in the cycle. Returns the status the task now has.
///
/// The remove, status rewrite and append happen in this one call, so
/// callers never see a task whose status disagrees with its column.
pub fn move_to_next<L: TaskList>(lists: &mut [L; 3], from: Status) -> Result<Status, BoardError> {
    let source = &mut lists[from.index()];
    let index = source.selected_index().ok_or(BoardError::EmptyColumn(from))?;
    let mut task = source.remove_item(index).ok_or(BoardError::EmptyColumn(from))?;

    task.advance();
    let to = task.status;

    let dest = &mut lists[to.index()];
    let end = dest.item_count();
    dest.insert_item(end, task);
    Ok(to)
}

/// State for the kanban board view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub columns: [ColumnList; 3],
    pub focused: Status,
    pub loaded: bool,
    pub quitting: bool,
    seed: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self::with_seed(true)
    }

    /// Board that will (or won't) receive the starter cards when first sized.
    /// The app always seeds; an unseeded board lets tests start from known columns.
    pub fn with_seed(seed: bool) -> Self {
        Self {
            columns: Default::default(),
            focused: Status::Todo,
            loaded: false,
            quitting: false,
            seed,
        }
    }

    pub fn column(&self, status: Status) -> &ColumnList {
        &self.columns[status.index()]
    }

    pub fn column_mut(&mut self, status: Status) -> &mut ColumnList {
        &mut self.columns[status.index()]
    }

    /// Titles of every task in a column, top to bottom
    pub fn titles(&self, status: Status) -> Vec<&str> {
        self.column(status).titles()
    }

    /// Get the currently selected task in the focused column
    pub fn selected_task(&self) -> Option<Task> {
        self.column(self.focused).selected_item()
    }

    /// Focus the column to the right, wrapping from Done to To Do
    pub fn next(&mut self) {
        if !self.loaded {
            return;
        }
        self.focused = self.focused.next();
        tracing::trace!(focused = ?self.focused, "focus moved right");
    }

    /// Focus the column to the left, wrapping from To Do to Done
    pub fn prev(&mut self) {
        if !self.loaded {
            return;
        }
        self.focused = self.focused.prev();
        tracing::trace!(focused = ?self.focused, "focus moved left");
    }

    /// Promote the selected task in the focused column
    pub fn move_to_next(&mut self) -> Result<Status, BoardError> {
        if !self.loaded {
            return Err(BoardError::NotLoaded);
        }
        let from = self.focused;
        let to = move_to_next(&mut self.columns, from)?;
        tracing::debug!(?from, ?to, "task moved");
        Ok(to)
    }

    /// Column a new task would be created in, if a handoff is allowed now
    pub fn new_task_target(&self) -> Result<Status, BoardError> {
        if !self.loaded {
            return Err(BoardError::NotLoaded);
        }
        if self.column(self.focused).is_empty() {
            return Err(BoardError::EmptyColumn(self.focused));
        }
        Ok(self.focused)
    }

    /// Append a task delivered from outside (the task form) to the bottom of
    /// the column named by its status
    pub fn insert_task(&mut self, task: Task) {
        let column = self.column_mut(task.status);
        let end = column.item_count();
        column.insert_item(end, task);
    }

    /// Size the columns on the first resize; later resizes only reach the
    /// list widgets
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let column_width = width / Status::columns().len() as u16;
        let column_height = height.saturating_sub(FOOTER_HEIGHT);

        if self.loaded {
            for column in &mut self.columns {
                column.set_size(column_width, column_height);
            }
            return;
        }

        self.init_lists(column_width, column_height);
        self.loaded = true;
        tracing::info!(width, height, "board sized");
    }

    fn init_lists(&mut self, width: u16, height: u16) {
        for status in Status::columns() {
            let column = self.column_mut(*status);
            column.set_size(width, height);
            column.set_title(status.title());
        }
        if self.seed {
            for task in seed_tasks() {
                self.insert_task(task);
            }
        }
    }

    /// Handle a key press while the board is the active screen
    pub fn handle_key(&mut self, key: &KeyEvent) -> BoardAction {
        let command = KeyCommand::from_board_key(key);

        if command == KeyCommand::Quit {
            self.quitting = true;
            return BoardAction::Quit;
        }
        if !self.loaded {
            return BoardAction::None;
        }

        match command {
            KeyCommand::Left => self.prev(),
            KeyCommand::Right => self.next(),
            KeyCommand::Up => self.column_mut(self.focused).select_prev(),
            KeyCommand::Down => self.column_mut(self.focused).select_next(),
            KeyCommand::Confirm => {
                if let Err(err) = self.move_to_next() {
                    tracing::debug!(%err, "move ignored");
                }
            }
            KeyCommand::NewTask => match self.new_task_target() {
                Ok(target) => return BoardAction::NewTask(target),
                Err(err) => tracing::debug!(%err, "new task ignored"),
            },
            KeyCommand::Quit | KeyCommand::Other => {}
        }
        BoardAction::None
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the board: three columns side by side plus a help footer
pub fn render_board(board: &BoardState, frame: &mut Frame, area: Rect, theme: &ThemeConfig) {
    if board.quitting {
        return;
    }
    if !board.loaded {
        frame.render_widget(Paragraph::new("loading..."), area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
        .split(area);

    // Columns keep the size their list widgets were given on resize
    let board_area = chunks[0];
    let mut x = board_area.x;
    for status in Status::columns() {
        let column = board.column(*status);
        let width = column.width.min(board_area.right().saturating_sub(x));
        let height = column.height.min(board_area.height);
        let column_area = Rect {
            x,
            y: board_area.y,
            width,
            height,
        };
        draw_column(column, board.focused == *status, frame, column_area, theme);
        x += width;
    }

    let footer = Paragraph::new(BOARD_HELP).style(Style::default().fg(hex_to_color(&theme.color_help)));
    frame.render_widget(footer, chunks[1]);
}

fn draw_column(column: &ColumnList, is_focused: bool, frame: &mut Frame, area: Rect, theme: &ThemeConfig) {
    let (border_type, border_color) = if is_focused {
        (BorderType::Rounded, hex_to_color(&theme.color_focused))
    } else {
        (BorderType::Plain, hex_to_color(&theme.color_normal))
    };

    let block = Block::default()
        .title(format!(" {} ({}) ", column.title, column.item_count()))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));

    let text_color = hex_to_color(&theme.color_text);
    let description_color = hex_to_color(&theme.color_description);
    let items: Vec<ListItem> = column
        .items()
        .iter()
        .map(|task| {
            let summary = task.description.lines().next().unwrap_or_default().to_string();
            ListItem::new(vec![
                Line::from(Span::styled(task.title.clone(), Style::default().fg(text_color))),
                Line::from(Span::styled(summary, Style::default().fg(description_color))),
            ])
        })
        .collect();

    let list = List::new(items).block(block);
    if is_focused {
        let list = list
            .highlight_symbol("│ ")
            .highlight_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD));
        let mut state = ListState::default().with_selected(column.selected_index());
        frame.render_stateful_widget(list, area, &mut state);
    } else {
        frame.render_widget(list, area);
    }
}
