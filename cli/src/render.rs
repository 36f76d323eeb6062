use todo_core::{Filter, Todo, TodoList};

pub const EMPTY_MESSAGE: &str = "No todos found. Add one above!";

pub fn todo_line(todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!("[{mark}] {:>3}  {}", todo.id, todo.title)
}

/// The list view: visible todos, then a footer with counts.
pub fn render(todos: &TodoList, filter: Filter) -> String {
    let visible = todos.visible(filter);
    let mut out = String::new();
    if visible.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    for todo in visible {
        out.push_str(&todo_line(todo));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&todos.items_left_label());
    let completed = todos.completed_count();
    if completed > 0 {
        out.push_str(&format!(", {completed} completed"));
    }
    if filter != Filter::All {
        out.push_str(&format!(" (showing {filter})"));
    }
    out.push('\n');
    out
}
