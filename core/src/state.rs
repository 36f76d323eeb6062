//! Client-side mirror of the todo collection.
//!
//! `TodoList` is loaded once from a list response and then patched from each
//! action's response instead of refetching. Mutations are applied only after
//! the server confirmed them. Filtering is a view over the list and is never
//! sent to the server.

use std::fmt;
use std::str::FromStr;

use crate::types::Todo;

/// Which todos a view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!(
                "unknown filter `{other}` (expected all, active or completed)"
            )),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        })
    }
}

/// Local copy of the server's todos, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    /// A newly created todo is the most recent one, so it goes on top.
    pub fn apply_created(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Replaces the entry with the same id. Returns false if none was held.
    pub fn apply_updated(&mut self, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    pub fn apply_deleted(&mut self, id: i64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    /// Drops every completed entry and returns how many were removed.
    pub fn apply_cleared(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        before - self.todos.len()
    }

    pub fn visible(&self, filter: Filter) -> Vec<&Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.len() - self.active_count()
    }

    pub fn items_left_label(&self) -> String {
        match self.active_count() {
            1 => "1 item left".to_string(),
            n => format!("{n} items left"),
        }
    }
}
