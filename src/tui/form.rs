use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::config::ThemeConfig;
use crate::model::{Status, Task};

use super::hex_to_color;
use super::input::{TextArea, TextInput};
use super::keys::is_global_quit;

/// Which field of the form receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    /// Entering task title
    Title,
    /// Entering task description
    Description,
}

/// What the form asks of its owner after handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Key handled inside the form
    None,
    /// Form finished; deliver this task to the board
    Created(Task),
    /// Form abandoned without producing a task
    Cancel,
    Quit,
}

/// Two-step entry of a new task: title, then description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub target: Status,
    pub title: TextInput,
    pub description: TextArea,
}

impl FormState {
    pub fn new(target: Status) -> Self {
        let mut title = TextInput::with_placeholder("Task title");
        title.focus();
        Self {
            target,
            title,
            description: TextArea::with_placeholder("Description"),
        }
    }

    pub fn step(&self) -> FormStep {
        if self.title.is_focused() {
            FormStep::Title
        } else {
            FormStep::Description
        }
    }

    /// Build the task from the current field values. No validation: empty
    /// strings are kept as typed.
    pub fn create_task(&self) -> Task {
        Task::new(self.target, self.title.value(), self.description.value())
    }

    /// Handle a key press while the form is the active screen
    pub fn handle_key(&mut self, key: &KeyEvent) -> FormAction {
        if is_global_quit(key) {
            return FormAction::Quit;
        }

        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter if !key.modifiers.contains(KeyModifiers::ALT) => {
                return self.commit();
            }
            _ => {}
        }

        match self.step() {
            FormStep::Title => self.title.handle_key(key),
            FormStep::Description => self.description.handle_key(key),
        };
        FormAction::None
    }

    fn commit(&mut self) -> FormAction {
        match self.step() {
            FormStep::Title => {
                self.title.blur();
                self.description.focus();
                FormAction::None
            }
            FormStep::Description if self.description.at_line_continuation() => {
                self.description.continue_line();
                FormAction::None
            }
            FormStep::Description => FormAction::Created(self.create_task()),
        }
    }
}

pub const TITLE_HELP: &str = " enter next • esc cancel • ctrl+c quit";
pub const DESCRIPTION_HELP: &str = " enter save • alt+enter or \\ enter newline • esc cancel • ctrl+c quit";

/// Draw the form: title input above the description area
pub fn render_form(form: &FormState, frame: &mut Frame, area: Rect, theme: &ThemeConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Description
            Constraint::Length(1), // Help
        ])
        .split(area);

    let focused = hex_to_color(&theme.color_focused);
    let normal = hex_to_color(&theme.color_normal);
    let text = hex_to_color(&theme.color_text);
    let dimmed = hex_to_color(&theme.color_description);

    let field_block = |label: String, is_focused: bool| {
        let (border_type, color) = if is_focused {
            (BorderType::Rounded, focused)
        } else {
            (BorderType::Plain, normal)
        };
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(color))
    };

    let title_line = field_line(form.title.value(), &form.title.placeholder, form.title.cursor(), form.title.is_focused(), text, dimmed);
    let title = Paragraph::new(title_line)
        .block(field_block(format!(" New task in {} ", form.target.title()), form.title.is_focused()));
    frame.render_widget(title, chunks[0]);

    let description = Paragraph::new(field_text(
        form.description.value(),
        &form.description.placeholder,
        form.description.cursor(),
        form.description.is_focused(),
        text,
        dimmed,
    ))
    .wrap(Wrap { trim: false })
    .block(field_block(" Description ".to_string(), form.description.is_focused()));
    frame.render_widget(description, chunks[1]);

    let help = match form.step() {
        FormStep::Title => TITLE_HELP,
        FormStep::Description => DESCRIPTION_HELP,
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(hex_to_color(&theme.color_help))),
        chunks[2],
    );
}

/// Single line with a block cursor inserted when focused
fn field_line(value: &str, placeholder: &str, cursor: usize, is_focused: bool, text: Color, dimmed: Color) -> Line<'static> {
    if value.is_empty() && !is_focused {
        return Line::from(Span::styled(placeholder.to_string(), Style::default().fg(dimmed)));
    }
    if !is_focused {
        return Line::from(Span::styled(value.to_string(), Style::default().fg(text)));
    }
    let (before, after) = value.split_at(cursor.min(value.len()));
    Line::from(vec![
        Span::styled(before.to_string(), Style::default().fg(text)),
        Span::styled("█", Style::default().fg(text)),
        Span::styled(after.to_string(), Style::default().fg(text)),
    ])
}

/// Multi-line variant of `field_line`
fn field_text(value: &str, placeholder: &str, cursor: usize, is_focused: bool, text: Color, dimmed: Color) -> Text<'static> {
    if value.is_empty() && !is_focused {
        return Text::from(Span::styled(placeholder.to_string(), Style::default().fg(dimmed)));
    }
    let (before, after) = value.split_at(cursor.min(value.len()));
    let marker = if is_focused { "█" } else { "" };
    Text::styled(format!("{}{}{}", before, marker, after), Style::default().fg(text))
}
