use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// One row of the `todos` table.
#[derive(Clone, Debug, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Response body of the clear-completed sweep.
#[derive(Debug, Serialize, Deserialize)]
pub struct Cleared {
    pub deleted: u64,
}

/// Trims `title` and rejects it when nothing is left.
pub fn normalize_title(title: &str) -> Result<String, ApiError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

impl UpdateTodo {
    /// Checks the patch carries at least one field and normalizes the title.
    pub fn validate(self) -> Result<UpdateTodo, ApiError> {
        if self.title.is_none() && self.completed.is_none() {
            return Err(ApiError::Validation(
                "expected `title` or `completed`".to_string(),
            ));
        }
        let title = self.title.as_deref().map(normalize_title).transpose()?;
        Ok(UpdateTodo {
            title,
            completed: self.completed,
        })
    }
}
