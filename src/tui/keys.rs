use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key vocabulary understood by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    Left,
    Right,
    Up,
    Down,
    Confirm,
    NewTask,
    /// Anything else; forwarded to the focused widget
    Other,
}

/// True for Ctrl+C, the quit key honored on every screen
pub fn is_global_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

impl KeyCommand {
    /// Map a key press on the board screen
    pub fn from_board_key(key: &KeyEvent) -> Self {
        if is_global_quit(key) {
            return KeyCommand::Quit;
        }
        match key.code {
            KeyCode::Char('q') => KeyCommand::Quit,
            KeyCode::Char('h') | KeyCode::Left => KeyCommand::Left,
            KeyCode::Char('l') | KeyCode::Right => KeyCommand::Right,
            KeyCode::Char('k') | KeyCode::Up => KeyCommand::Up,
            KeyCode::Char('j') | KeyCode::Down => KeyCommand::Down,
            KeyCode::Enter => KeyCommand::Confirm,
            KeyCode::Char('n') => KeyCommand::NewTask,
            _ => KeyCommand::Other,
        }
    }
}
