//! Single-statement data access over the `todos` table.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{Todo, UpdateTodo};

const COLUMNS: &str = "id, title, completed, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All rows, most recently created first.
    pub async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(&format!(
            "SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(&format!("SELECT {COLUMNS} FROM todos WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Inserts an incomplete todo. `title` must already be normalized.
    pub async fn create(&self, title: &str) -> Result<Todo, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos (title, completed, created_at, updated_at) \
             VALUES (?, 0, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(title)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    /// Applies the present fields of `patch` and bumps `updated_at`.
    /// Returns `None` when no row has this id.
    pub async fn update(&self, id: i64, patch: &UpdateTodo) -> Result<Option<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(&format!(
            "UPDATE todos SET title = COALESCE(?, title), \
             completed = COALESCE(?, completed), updated_at = ? \
             WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(patch.title.as_deref())
        .bind(patch.completed)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes every completed row and returns how many went.
    pub async fn clear_completed(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE completed = 1")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn store() -> TodoStore {
        TodoStore::new(db::memory_pool().await.unwrap())
    }

    fn toggle(completed: bool) -> UpdateTodo {
        UpdateTodo {
            title: None,
            completed: Some(completed),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = store().await;
        let a = store.create("first").await.unwrap();
        let b = store.create("second").await.unwrap();
        assert!(b.id > a.id);
        assert!(!a.completed);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = store().await;
        for title in ["one", "two", "three"] {
            store.create(title).await.unwrap();
        }
        let titles: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["three", "two", "one"]);
    }

    #[tokio::test]
    async fn update_keeps_absent_fields_and_bumps_updated_at() {
        let store = store().await;
        let created = store.create("Walk dog").await.unwrap();

        let updated = store.update(created.id, &toggle(true)).await.unwrap().unwrap();
        assert_eq!(updated.title, "Walk dog");
        assert!(updated.completed);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        let renamed = store
            .update(
                created.id,
                &UpdateTodo {
                    title: Some("Walk cat".to_string()),
                    completed: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.title, "Walk cat");
        assert!(renamed.completed);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let store = store().await;
        assert!(store.update(99, &toggle(true)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_twice_reports_missing_row() {
        let store = store().await;
        let todo = store.create("gone").await.unwrap();
        assert!(store.delete(todo.id).await.unwrap());
        assert!(!store.delete(todo.id).await.unwrap());
        assert!(store.get(todo.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_completed_removes_only_completed_rows() {
        let store = store().await;
        let done = store.create("done").await.unwrap();
        let open = store.create("open").await.unwrap();
        let also_done = store.create("also done").await.unwrap();
        store.update(done.id, &toggle(true)).await.unwrap();
        store.update(also_done.id, &toggle(true)).await.unwrap();

        assert_eq!(store.clear_completed().await.unwrap(), 2);

        let remaining = store.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, open.id);
        assert_eq!(store.clear_completed().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = store().await;
        let first = store.create("first").await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.create("second").await.unwrap();
        assert!(second.id > first.id);
    }
}
