/// Column a task belongs to. Declaration order is both the display order
/// and the promotion cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Column header shown above the list
    pub fn title(&self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    pub fn columns() -> &'static [Status; 3] {
        &[Status::Todo, Status::InProgress, Status::Done]
    }

    /// Position of this status in `columns()`
    pub fn index(&self) -> usize {
        match self {
            Status::Todo => 0,
            Status::InProgress => 1,
            Status::Done => 2,
        }
    }

    /// Next status in the cycle, Done wraps to Todo
    pub fn next(&self) -> Self {
        match self {
            Status::Todo => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Todo,
        }
    }

    /// Previous status in the cycle, Todo wraps to Done
    pub fn prev(&self) -> Self {
        match self {
            Status::Todo => Status::Done,
            Status::InProgress => Status::Todo,
            Status::Done => Status::InProgress,
        }
    }
}

/// A card on the board. Tasks have no id; a task is addressed by its
/// position in the column that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub status: Status,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(status: Status, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Rewrite the status to the next one in the cycle
    pub fn advance(&mut self) {
        self.status = self.status.next();
    }
}

/// Starter cards placed on the board when it is first sized
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(Status::Todo, "create gophoria", "implement gophoria framework"),
        Task::new(Status::Todo, "create adress book", "implement address book in go + htmx"),
        Task::new(Status::Todo, "pedagogical notebook ui", "implement web ui for pedagogical notebook"),
        Task::new(Status::InProgress, "write code", "don't worry"),
        Task::new(Status::Done, "stay cool", "keep coding"),
    ]
}
