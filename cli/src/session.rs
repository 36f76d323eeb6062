//! One client session: load the collection, act, patch local state.
//!
//! Mirrors the browser client: the list is fetched once, and every action
//! applies the server's response to the local copy rather than refetching.

use anyhow::Result;
use todo_core::{ApiError, CreateTodo, Todo, TodoClient, TodoList};

use crate::transport::Transport;

pub struct Session {
    client: TodoClient,
    transport: Transport,
    todos: TodoList,
}

impl Session {
    /// Connects to `api_url` and loads the full collection.
    pub fn load(api_url: &str) -> Result<Self> {
        let client = TodoClient::new(api_url);
        let transport = Transport::new();
        let response = transport.execute(client.build_list_todos())?;
        let todos = TodoList::from(client.parse_list_todos(response)?);
        tracing::debug!(count = todos.len(), "todos loaded");
        Ok(Self {
            client,
            transport,
            todos,
        })
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn add(&mut self, title: &str) -> Result<Todo> {
        let req = self.client.build_create_todo(&CreateTodo {
            title: title.to_string(),
        })?;
        let todo = self.client.parse_create_todo(self.transport.execute(req)?)?;
        self.todos.apply_created(todo.clone());
        Ok(todo)
    }

    /// Flips the todo as this session last saw it.
    pub fn toggle(&mut self, id: i64) -> Result<Todo> {
        let current = self.todos.get(id).ok_or(ApiError::NotFound)?;
        let req = self.client.build_toggle_todo(current)?;
        let todo = self.client.parse_update_todo(self.transport.execute(req)?)?;
        self.todos.apply_updated(todo.clone());
        Ok(todo)
    }

    pub fn rename(&mut self, id: i64, title: &str) -> Result<Todo> {
        let req = self.client.build_rename_todo(id, title)?;
        let todo = self.client.parse_update_todo(self.transport.execute(req)?)?;
        self.todos.apply_updated(todo.clone());
        Ok(todo)
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let req = self.client.build_delete_todo(id);
        self.client.parse_delete_todo(self.transport.execute(req)?)?;
        self.todos.apply_deleted(id);
        Ok(())
    }

    /// Returns how many todos the server removed.
    pub fn clear_completed(&mut self) -> Result<u64> {
        let req = self.client.build_clear_completed();
        let cleared = self
            .client
            .parse_clear_completed(self.transport.execute(req)?)?;
        self.todos.apply_cleared();
        Ok(cleared.deleted)
    }
}

/// Asks the API for its health status without loading any todos.
pub fn health(api_url: &str) -> Result<String> {
    let client = TodoClient::new(api_url);
    let response = Transport::new().execute(client.build_health())?;
    Ok(client.parse_health(response)?.status)
}
