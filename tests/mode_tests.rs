use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kanban::model::{Status, Task};
use kanban::tui::board::BoardState;
use kanban::tui::form::FormStep;
use kanban::tui::mode::{Flow, ModeSwitch, Msg, Screen};

fn key(code: KeyCode) -> Msg {
    Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_c() -> Msg {
    Msg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

fn type_str(mode: &mut ModeSwitch, s: &str) {
    for c in s.chars() {
        assert_eq!(mode.update(key(KeyCode::Char(c))), Flow::Continue);
    }
}

/// Board with To Do = [a, b] and the other columns holding one card each,
/// so a handoff is possible from any column
fn loaded_mode() -> ModeSwitch {
    let mut mode = ModeSwitch::new(BoardState::with_seed(false));
    mode.update(Msg::Resize(120, 40));
    mode.board.insert_task(Task::new(Status::Todo, "a", ""));
    mode.board.insert_task(Task::new(Status::Todo, "b", ""));
    mode.board.insert_task(Task::new(Status::InProgress, "c", ""));
    mode
}

#[test]
fn test_starts_on_board() {
    let mode = ModeSwitch::new(BoardState::new());

    assert_eq!(mode.active(), Screen::Board);
    assert_eq!(mode.form.target, Status::Todo);
}

#[test]
fn test_resize_loads_board() {
    let mut mode = ModeSwitch::new(BoardState::new());

    assert_eq!(mode.update(Msg::Resize(80, 24)), Flow::Continue);

    assert!(mode.board.loaded);
}

#[test]
fn test_new_task_hands_off_to_form() {
    let mut mode = loaded_mode();
    mode.update(key(KeyCode::Right));

    mode.update(key(KeyCode::Char('n')));

    assert_eq!(mode.active(), Screen::Form);
    assert_eq!(mode.form.target, Status::InProgress);
    assert_eq!(mode.form.step(), FormStep::Title);
}

#[test]
fn test_handoff_round_trip_appends_to_focused_column() {
    let mut mode = loaded_mode();

    mode.update(key(KeyCode::Char('n')));
    type_str(&mut mode, "x");
    mode.update(key(KeyCode::Enter));
    type_str(&mut mode, "y");
    assert_eq!(mode.update(key(KeyCode::Enter)), Flow::Continue);

    assert_eq!(mode.active(), Screen::Board);
    assert_eq!(mode.board.titles(Status::Todo), vec!["a", "b", "x"]);
    assert_eq!(mode.board.titles(Status::InProgress), vec!["c"]);
    assert!(mode.board.column(Status::Done).is_empty());
    assert_eq!(
        mode.board.column(Status::Todo).items()[2],
        Task::new(Status::Todo, "x", "y")
    );
}

#[test]
fn test_handoff_round_trip_from_in_progress() {
    let mut mode = loaded_mode();
    mode.update(key(KeyCode::Right));

    mode.update(key(KeyCode::Char('n')));
    type_str(&mut mode, "x");
    mode.update(key(KeyCode::Enter));
    type_str(&mut mode, "y");
    mode.update(key(KeyCode::Enter));

    assert_eq!(mode.board.titles(Status::Todo), vec!["a", "b"]);
    assert_eq!(mode.board.titles(Status::InProgress), vec!["c", "x"]);
    assert_eq!(mode.board.focused, Status::InProgress);
}

#[test]
fn test_board_untouched_while_form_active() {
    let mut mode = loaded_mode();
    mode.update(key(KeyCode::Down));
    let board_before = mode.board.clone();

    mode.update(key(KeyCode::Char('n')));
    // Keys that would move focus or promote on the board go to the form
    mode.update(key(KeyCode::Right));
    mode.update(key(KeyCode::Char('l')));
    mode.update(key(KeyCode::Char('q')));

    assert_eq!(mode.active(), Screen::Form);
    assert_eq!(mode.board, board_before);
    assert_eq!(mode.form.title.value(), "lq");
}

#[test]
fn test_cancel_returns_board_unchanged() {
    let mut mode = loaded_mode();
    let board_before = mode.board.clone();

    mode.update(key(KeyCode::Char('n')));
    type_str(&mut mode, "draft");
    mode.update(key(KeyCode::Esc));

    assert_eq!(mode.active(), Screen::Board);
    assert_eq!(mode.board, board_before);
}

#[test]
fn test_empty_title_and_description_accepted() {
    let mut mode = loaded_mode();

    mode.update(key(KeyCode::Char('n')));
    mode.update(key(KeyCode::Enter));
    mode.update(key(KeyCode::Enter));

    assert_eq!(mode.board.titles(Status::Todo), vec!["a", "b", ""]);
}

#[test]
fn test_new_task_on_empty_column_stays_on_board() {
    let mut mode = loaded_mode();
    mode.update(key(KeyCode::Left));
    assert_eq!(mode.board.focused, Status::Done);

    mode.update(key(KeyCode::Char('n')));

    assert_eq!(mode.active(), Screen::Board);
}

#[test]
fn test_task_created_message_reaches_board_from_any_screen() {
    let mut mode = loaded_mode();

    mode.update(Msg::TaskCreated(Task::new(Status::Done, "shipped", "")));

    assert_eq!(mode.board.titles(Status::Done), vec!["shipped"]);
    assert_eq!(mode.active(), Screen::Board);
}

#[test]
fn test_quit_from_board() {
    let mut mode = loaded_mode();

    assert_eq!(mode.update(key(KeyCode::Char('q'))), Flow::Quit);
    assert!(mode.board.quitting);
}

#[test]
fn test_ctrl_c_quits_from_form_title_and_description() {
    let mut mode = loaded_mode();
    mode.update(key(KeyCode::Char('n')));
    assert_eq!(mode.update(ctrl_c()), Flow::Quit);
    assert!(mode.board.quitting);

    let mut mode = loaded_mode();
    mode.update(key(KeyCode::Char('n')));
    mode.update(key(KeyCode::Enter));
    assert_eq!(mode.update(ctrl_c()), Flow::Quit);
}

#[test]
fn test_quit_before_loaded() {
    let mut mode = ModeSwitch::new(BoardState::new());

    assert_eq!(mode.update(key(KeyCode::Char('q'))), Flow::Quit);
}

#[test]
fn test_fresh_form_each_handoff() {
    let mut mode = loaded_mode();

    mode.update(key(KeyCode::Char('n')));
    type_str(&mut mode, "first");
    mode.update(key(KeyCode::Esc));
    mode.update(key(KeyCode::Char('n')));

    assert_eq!(mode.form.title.value(), "");
    assert_eq!(mode.form.step(), FormStep::Title);
}

#[test]
fn test_default_board_can_create_task_in_every_column() {
    let mut mode = ModeSwitch::new(BoardState::new());
    mode.update(Msg::Resize(120, 40));

    for status in Status::columns() {
        assert_eq!(mode.board.focused, *status);
        mode.update(key(KeyCode::Char('n')));
        assert_eq!(mode.active(), Screen::Form);
        assert_eq!(mode.form.target, *status);

        mode.update(key(KeyCode::Esc));
        assert_eq!(mode.active(), Screen::Board);
        mode.update(key(KeyCode::Right));
    }
}
