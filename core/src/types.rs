//! Domain types for the todo store and its HTTP surface.
//!
//! # Design
//! `TodoRecord` is the only entity. The store hands out clones of it and
//! never a reference into its own list, so nothing a caller does to a
//! returned record can reach back into the store.
//!
//! JSON uses camelCase keys because the browser UI that consumes the API
//! reads them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item.
///
/// `completed_at` is `Some` exactly when `is_completed` is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TodoRecord {
    /// Whether the record still needs doing.
    pub fn is_active(&self) -> bool {
        !self.is_completed
    }
}

/// Request payload for creating a new todo.
///
/// `title` is optional on the wire so a missing field reaches the store and
/// is rejected there with the same error as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
}

impl CreateTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// Request payload for renaming an existing todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Option<String>,
}

impl UpdateTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// Counts derived from one snapshot of the store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoSummary {
    pub total: usize,
    /// Records not yet completed ("items left").
    pub active: usize,
    pub completed: usize,
}

impl TodoSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TodoRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut acc, record| {
            acc.total += 1;
            if record.is_completed {
                acc.completed += 1;
            } else {
                acc.active += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(is_completed: bool) -> TodoRecord {
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        TodoRecord {
            id: Uuid::nil(),
            title: "Test".to_string(),
            is_completed,
            completed_at: is_completed.then_some(created_at),
            created_at,
        }
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(record(true)).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["isCompleted"], true);
        assert_eq!(json["completedAt"], "2024-05-01T09:30:00Z");
        assert_eq!(json["createdAt"], "2024-05-01T09:30:00Z");
    }

    #[test]
    fn incomplete_record_omits_completed_at() {
        let json = serde_json::to_value(record(false)).unwrap();
        assert!(json.get("completedAt").is_none());
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn create_todo_missing_title_is_none() {
        let input: CreateTodo = serde_json::from_str("{}").unwrap();
        assert!(input.title.is_none());
    }

    #[test]
    fn update_todo_accepts_title() {
        let input: UpdateTodo = serde_json::from_str(r#"{"title":"New title"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("New title"));
    }

    #[test]
    fn summary_counts_active_and_completed() {
        let records = [record(true), record(false), record(false)];
        let summary = TodoSummary::from_records(&records);
        assert_eq!(
            summary,
            TodoSummary {
                total: 3,
                active: 2,
                completed: 1
            }
        );
    }
}
