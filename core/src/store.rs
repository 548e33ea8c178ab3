//! In-memory todo storage shared by every caller.
//!
//! # Design
//! `TodoStore` owns a `Vec<TodoRecord>` in insertion order behind a single
//! `tokio::sync::Mutex`. Every operation, reads included, holds the lock for
//! its whole body, so each call is atomic with respect to every other call.
//! Sequences spanning several calls (check then add) are not.
//!
//! Lookups are linear scans. Records never leave the lock by reference:
//! everything returned is a clone.

use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::types::{TodoRecord, TodoSummary};

/// Authoritative in-memory set of todo records.
pub struct TodoStore {
    todos: Mutex<Vec<TodoRecord>>,
    clock: Box<dyn Clock>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore").finish_non_exhaustive()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock) -> Self {
        Self {
            todos: Mutex::new(Vec::new()),
            clock: Box::new(clock),
        }
    }

    /// All records, newest `created_at` first.
    ///
    /// Records sharing a timestamp come out most recently inserted first.
    pub async fn list_all(&self) -> Vec<TodoRecord> {
        let todos = self.todos.lock().await;
        let mut snapshot: Vec<TodoRecord> = todos.iter().rev().cloned().collect();
        // stable: ties keep the reversed insertion order
        snapshot.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        snapshot
    }

    pub async fn get_by_id(&self, id: Uuid) -> Option<TodoRecord> {
        let todos = self.todos.lock().await;
        todos.iter().find(|todo| todo.id == id).cloned()
    }

    /// Create a record from `title`, which is stored trimmed.
    pub async fn add(&self, title: &str) -> Result<TodoRecord, StoreError> {
        let title = normalize_title(title)?;

        let mut todos = self.todos.lock().await;
        let todo = TodoRecord {
            id: Uuid::new_v4(),
            title,
            is_completed: false,
            completed_at: None,
            created_at: self.clock.now(),
        };
        todos.push(todo.clone());
        debug!(id = %todo.id, count = todos.len(), "added todo");
        Ok(todo)
    }

    /// Flip completion. `None` when `id` is unknown.
    pub async fn toggle(&self, id: Uuid) -> Option<TodoRecord> {
        let mut todos = self.todos.lock().await;
        let todo = todos.iter_mut().find(|todo| todo.id == id)?;

        todo.is_completed = !todo.is_completed;
        todo.completed_at = todo.is_completed.then(|| self.clock.now());
        debug!(id = %id, is_completed = todo.is_completed, "toggled todo");
        Some(todo.clone())
    }

    /// Remove the record. Returns false when `id` is unknown.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut todos = self.todos.lock().await;
        match todos.iter().position(|todo| todo.id == id) {
            Some(index) => {
                todos.remove(index);
                debug!(id = %id, count = todos.len(), "deleted todo");
                true
            }
            None => false,
        }
    }

    /// Rename a record. The title is validated before the lookup, so an
    /// invalid title is an error even for an unknown `id`.
    pub async fn update(&self, id: Uuid, new_title: &str) -> Result<Option<TodoRecord>, StoreError> {
        let title = normalize_title(new_title)?;

        let mut todos = self.todos.lock().await;
        let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };
        todo.title = title;
        debug!(id = %id, "renamed todo");
        Ok(Some(todo.clone()))
    }

    /// Drop every completed record and return how many went.
    pub async fn clear_completed(&self) -> usize {
        let mut todos = self.todos.lock().await;
        let before = todos.len();
        todos.retain(TodoRecord::is_active);
        let removed = before - todos.len();
        if removed > 0 {
            debug!(removed, remaining = todos.len(), "cleared completed todos");
        }
        removed
    }

    pub async fn summary(&self) -> TodoSummary {
        let todos = self.todos.lock().await;
        TodoSummary::from_records(todos.iter())
    }
}

/// Trim `title`, rejecting it when nothing is left.
pub(crate) fn normalize_title(title: &str) -> Result<String, StoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidArgument(
            "title must not be empty or whitespace".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
