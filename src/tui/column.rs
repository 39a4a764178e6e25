//! Ordered task list backing one board column.

use crate::model::Task;

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

/// Operations the board needs from a column list widget
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait TaskList {
    /// Set the header shown above the list
    fn set_title(&mut self, title: &str);

    /// Set the list's outer size in cells
    fn set_size(&mut self, width: u16, height: u16);

    /// Insert a task before `index`; an index past the end appends
    fn insert_item(&mut self, index: usize, task: Task);

    /// Remove and return the task at `index`
    fn remove_item(&mut self, index: usize) -> Option<Task>;

    /// Index of the selected task, None when the list is empty
    fn selected_index(&self) -> Option<usize>;

    /// Copy of the selected task, None when the list is empty
    fn selected_item(&self) -> Option<Task>;

    /// Number of tasks in the list
    fn item_count(&self) -> usize;
}

/// Vec-backed list with a clamped selection cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnList {
    pub title: String,
    pub width: u16,
    pub height: u16,
    items: Vec<Task>,
    selected: usize,
}

impl ColumnList {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace the contents and reset the cursor to the top
    pub fn set_items(&mut self, items: Vec<Task>) {
        self.items = items;
        self.selected = 0;
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|t| t.title.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Ensure the cursor points at an item (or 0 for an empty list)
    fn clamp_selection(&mut self) {
        if self.items.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.items.len() {
            self.selected = self.items.len() - 1;
        }
    }
}

impl TaskList for ColumnList {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    fn insert_item(&mut self, index: usize, task: Task) {
        let index = index.min(self.items.len());
        self.items.insert(index, task);
    }

    fn remove_item(&mut self, index: usize) -> Option<Task> {
        if index >= self.items.len() {
            return None;
        }
        let task = self.items.remove(index);
        self.clamp_selection();
        Some(task)
    }

    fn selected_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    fn selected_item(&self) -> Option<Task> {
        self.items.get(self.selected).cloned()
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn list_of(titles: &[&str]) -> ColumnList {
        let mut list = ColumnList::new(20, 10);
        list.set_items(titles.iter().map(|t| Task::new(Status::Todo, *t, "")).collect());
        list
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let list = ColumnList::new(20, 10);
        assert_eq!(list.selected_index(), None);
        assert!(list.selected_item().is_none());
        assert_eq!(list.item_count(), 0);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut list = list_of(&["a", "b"]);
        list.insert_item(99, Task::new(Status::Todo, "c", ""));
        assert_eq!(list.titles(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_last_clamps_selection() {
        let mut list = list_of(&["a", "b", "c"]);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected_index(), Some(2));

        let removed = list.remove_item(2).unwrap();
        assert_eq!(removed.title, "c");
        assert_eq!(list.selected_index(), Some(1));
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut list = list_of(&["a"]);
        assert!(list.remove_item(1).is_none());
        assert_eq!(list.item_count(), 1);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut list = list_of(&["a", "b"]);
        list.select_prev();
        assert_eq!(list.selected_index(), Some(0));
        list.select_next();
        list.select_next();
        assert_eq!(list.selected_index(), Some(1));
        assert_eq!(list.selected_item().unwrap().title, "b");
    }
}
