//! Text entry widgets used by the task form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shared line-editing state. `cursor` is a byte offset that always sits on
/// a char boundary of `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Editor {
    value: String,
    cursor: usize,
    focused: bool,
}

impl Editor {
    fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn move_left(&mut self) {
        if let Some((i, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = i;
        }
    }

    fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.move_left();
            self.value.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Editing keys common to both widgets. Returns true when consumed.
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.focused {
            return false;
        }
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Left if has_alt => self.cursor = word_boundary_left(&self.value, self.cursor),
            KeyCode::Right if has_alt => self.cursor = word_boundary_right(&self.value, self.cursor),
            // macOS: Option+Left/Right sends Alt+b / Alt+f
            KeyCode::Char('b') if has_alt => self.cursor = word_boundary_left(&self.value, self.cursor),
            KeyCode::Char('f') if has_alt => self.cursor = word_boundary_right(&self.value, self.cursor),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.len(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char(c) if !has_ctrl => self.insert(c),
            _ => return false,
        }
        true
    }
}

/// Single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    editor: Editor,
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            editor: Editor::default(),
            placeholder: placeholder.into(),
        }
    }

    pub fn focus(&mut self) {
        self.editor.focused = true;
    }

    pub fn blur(&mut self) {
        self.editor.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.editor.focused
    }

    pub fn value(&self) -> &str {
        &self.editor.value
    }

    pub fn cursor(&self) -> usize {
        self.editor.cursor
    }

    /// Apply an editing key; ignored while blurred. Returns true when consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        self.editor.handle_key(key)
    }
}

/// Multi-line text area. Newlines are inserted with Alt+Enter or
/// `insert_newline`; a plain Enter belongs to whoever owns the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextArea {
    editor: Editor,
    pub placeholder: String,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            editor: Editor::default(),
            placeholder: placeholder.into(),
        }
    }

    pub fn focus(&mut self) {
        self.editor.focused = true;
    }

    pub fn blur(&mut self) {
        self.editor.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.editor.focused
    }

    pub fn value(&self) -> &str {
        &self.editor.value
    }

    pub fn cursor(&self) -> usize {
        self.editor.cursor
    }

    pub fn insert_newline(&mut self) {
        self.editor.insert('\n');
    }

    /// True when the text just before the cursor is a `\` line continuation
    pub fn at_line_continuation(&self) -> bool {
        self.editor.value[..self.editor.cursor].ends_with('\\')
    }

    /// Replace a trailing `\` before the cursor with a newline
    pub fn continue_line(&mut self) {
        if self.at_line_continuation() {
            self.editor.backspace();
            self.insert_newline();
        }
    }

    /// Apply an editing key; ignored while blurred. Returns true when consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.editor.focused
            && key.code == KeyCode::Enter
            && key.modifiers.contains(KeyModifiers::ALT)
        {
            self.insert_newline();
            return true;
        }
        self.editor.handle_key(key)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Find the previous word boundary (for Option+Left)
fn word_boundary_left(s: &str, pos: usize) -> usize {
    let mut chars = s[..pos].char_indices().rev().peekable();
    // Skip whitespace/punctuation
    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}
    // Skip word characters
    let mut boundary = chars.peek().map(|(i, c)| i + c.len_utf8()).unwrap_or(0);
    while let Some((i, _)) = chars.next_if(|(_, c)| is_word_char(*c)) {
        boundary = i;
    }
    boundary
}

/// Find the next word boundary (for Option+Right)
fn word_boundary_right(s: &str, pos: usize) -> usize {
    let mut chars = s[pos..].char_indices().peekable();
    // Skip current word characters
    while chars.next_if(|(_, c)| is_word_char(*c)).is_some() {}
    // Skip whitespace/punctuation
    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}
    chars.peek().map(|(i, _)| pos + i).unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_blurred_input_ignores_keys() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(&key(KeyCode::Char('a'))));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_and_editing() {
        let mut input = TextInput::new();
        input.focus();
        type_str(&mut input, "helo");
        input.handle_key(&key(KeyCode::Left));
        type_str(&mut input, "l");
        assert_eq!(input.value(), "hello");

        input.handle_key(&key(KeyCode::Home));
        input.handle_key(&key(KeyCode::Delete));
        assert_eq!(input.value(), "ello");

        input.handle_key(&key(KeyCode::End));
        input.handle_key(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "ell");
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut input = TextInput::new();
        input.focus();
        type_str(&mut input, "héé");
        input.handle_key(&key(KeyCode::Left));
        input.handle_key(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "hé");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_ctrl_chars_are_not_inserted() {
        let mut input = TextInput::new();
        input.focus();
        let consumed = input.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!consumed);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_text_area_alt_enter_inserts_newline() {
        let mut area = TextArea::new();
        area.focus();
        area.handle_key(&key(KeyCode::Char('a')));
        area.handle_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
        area.handle_key(&key(KeyCode::Char('b')));
        assert_eq!(area.value(), "a\nb");
    }

    #[test]
    fn test_text_area_plain_enter_not_consumed() {
        let mut area = TextArea::new();
        area.focus();
        assert!(!area.handle_key(&key(KeyCode::Enter)));
    }

    #[test]
    fn test_line_continuation() {
        let mut area = TextArea::new();
        area.focus();
        for c in "first\\".chars() {
            area.handle_key(&key(KeyCode::Char(c)));
        }
        assert!(area.at_line_continuation());
        area.continue_line();
        assert_eq!(area.value(), "first\n");
        assert!(!area.at_line_continuation());
    }

    #[test]
    fn test_word_boundaries() {
        let s = "foo bar  baz";
        assert_eq!(word_boundary_left(s, s.len()), 9);
        assert_eq!(word_boundary_left(s, 9), 4);
        assert_eq!(word_boundary_left(s, 0), 0);
        assert_eq!(word_boundary_right(s, 0), 4);
        assert_eq!(word_boundary_right(s, 4), 9);
        assert_eq!(word_boundary_right(s, 9), s.len());
    }
}
