//! Stateless HTTP request builder and response parser for the todo API.
//!
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; the caller does the round trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Cleared, CreateTodo, ErrorBody, Health, Todo, UpdateTodo};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_health(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/health")
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos")
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/todos/{id}"))
    }

    /// Rejects a blank title without producing a request.
    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let title = required_title(&input.title)?;
        self.json_request(HttpMethod::Post, "/todos", &CreateTodo { title })
    }

    pub fn build_update_todo(&self, id: i64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Patch, &format!("/todos/{id}"), input)
    }

    /// PATCH that flips `completed` relative to the caller's copy of `todo`.
    pub fn build_toggle_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        let input = UpdateTodo {
            title: None,
            completed: Some(!todo.completed),
        };
        self.build_update_todo(todo.id, &input)
    }

    pub fn build_rename_todo(&self, id: i64, title: &str) -> Result<HttpRequest, ApiError> {
        let input = UpdateTodo {
            title: Some(required_title(title)?),
            completed: None,
        };
        self.build_update_todo(id, &input)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/todos/{id}"))
    }

    pub fn build_clear_completed(&self) -> HttpRequest {
        self.request(HttpMethod::Delete, "/todos/completed")
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    /// Also used for the toggle and rename variants.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_clear_completed(&self, response: HttpResponse) -> Result<Cleared, ApiError> {
        parse_json(response, 200)
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut req = self.request(method, path);
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }
}

fn required_title(title: &str) -> Result<String, ApiError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::BadRequest(error_message(&response.body))),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

/// The `error` field of a JSON error body, or the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}
