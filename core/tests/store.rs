//! Behavioural properties of `TodoStore` observed through its public API.
//!
//! A stepping clock gives each record a distinct `created_at` where ordering
//! matters; the concurrency test runs on the multi-threaded runtime so adds
//! genuinely contend for the lock.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use todo_core::{Clock, StoreError, TodoRecord, TodoStore};
use uuid::Uuid;

/// Advances one second every time it is read.
struct SteppingClock(Mutex<DateTime<Utc>>);

impl SteppingClock {
    fn new() -> Self {
        Self(Mutex::new(Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.0.lock().unwrap();
        *now += Duration::seconds(1);
        *now
    }
}

fn assert_completion_invariant(records: &[TodoRecord]) {
    for record in records {
        assert_eq!(
            record.completed_at.is_some(),
            record.is_completed,
            "completion fields disagree for {}",
            record.title
        );
    }
}

// --- add / get ---

#[tokio::test]
async fn add_then_get_returns_trimmed_incomplete_record() {
    let store = TodoStore::new();

    let groceries = store.add("Buy groceries").await.unwrap();
    assert_eq!(groceries.title, "Buy groceries");
    assert!(!groceries.is_completed);

    let milk = store.add("  milk  ").await.unwrap();
    let fetched = store.get_by_id(milk.id).await.unwrap();
    assert_eq!(fetched.title, "milk");
    assert!(!fetched.is_completed);
    assert!(fetched.completed_at.is_none());
}

#[tokio::test]
async fn blank_titles_are_invalid_arguments() {
    let store = TodoStore::new();
    for title in ["", "   ", "\t\n"] {
        let err = store.add(title).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)), "{title:?}");
    }

    let todo = store.add("real").await.unwrap();
    let err = store.update(todo.id, " ").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
    assert_eq!(store.get_by_id(todo.id).await.unwrap().title, "real");
}

#[tokio::test]
async fn get_unknown_id_is_none() {
    let store = TodoStore::new();
    store.add("something").await.unwrap();
    assert!(store.get_by_id(Uuid::new_v4()).await.is_none());
}

// --- toggle ---

#[tokio::test]
async fn toggle_twice_restores_record() {
    let store = TodoStore::with_clock(SteppingClock::new());
    let original = store.add("Walk dog").await.unwrap();

    let done = store.toggle(original.id).await.unwrap();
    assert!(done.is_completed);
    assert!(done.completed_at.unwrap() > original.created_at);
    assert_completion_invariant(&store.list_all().await);

    let restored = store.toggle(original.id).await.unwrap();
    assert_eq!(restored, original);
    assert_completion_invariant(&store.list_all().await);
}

#[tokio::test]
async fn unknown_ids_are_not_errors() {
    let store = TodoStore::new();
    let id = Uuid::new_v4();
    assert!(store.toggle(id).await.is_none());
    assert_eq!(store.update(id, "x").await.unwrap(), None);
    assert!(!store.delete(id).await);
    assert!(store.list_all().await.is_empty());
}

// --- delete ---

#[tokio::test]
async fn delete_is_true_then_false() {
    let store = TodoStore::new();
    let todo = store.add("once").await.unwrap();

    assert!(store.delete(todo.id).await);
    assert!(!store.delete(todo.id).await);
    assert!(store.get_by_id(todo.id).await.is_none());
}

// --- list ---

#[tokio::test]
async fn list_all_is_newest_first() {
    let store = TodoStore::with_clock(SteppingClock::new());
    for title in ["one", "two", "three", "four"] {
        store.add(title).await.unwrap();
    }

    let todos = store.list_all().await;
    let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["four", "three", "two", "one"]);
    assert!(todos.windows(2).all(|w| w[0].created_at > w[1].created_at));
}

#[tokio::test]
async fn list_all_empty_store() {
    assert!(TodoStore::new().list_all().await.is_empty());
}

// --- clear completed ---

#[tokio::test]
async fn clear_completed_keeps_only_active() {
    let store = TodoStore::with_clock(SteppingClock::new());
    let a = store.add("A").await.unwrap();
    let b = store.add("B").await.unwrap();
    let c = store.add("C").await.unwrap();
    store.toggle(a.id).await.unwrap();
    store.toggle(c.id).await.unwrap();

    store.clear_completed().await;

    assert_eq!(store.list_all().await, vec![b]);
}

#[tokio::test]
async fn clear_completed_on_empty_store_is_noop() {
    let store = TodoStore::new();
    assert_eq!(store.clear_completed().await, 0);
    assert!(store.list_all().await.is_empty());
}

// --- concurrency ---

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_all_land() {
    let store = Arc::new(TodoStore::new());

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.add(&format!("task {i}")).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let todos = store.list_all().await;
    assert_eq!(todos.len(), 100);
    let ids: HashSet<Uuid> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_toggles_keep_invariant() {
    let store = Arc::new(TodoStore::new());
    let mut ids = Vec::new();
    for i in 0..20 {
        ids.push(store.add(&format!("item {i}")).await.unwrap().id);
    }

    // each record toggled three times: ends completed
    let handles: Vec<_> = ids
        .iter()
        .flat_map(|&id| std::iter::repeat(id).take(3))
        .map(|id| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.toggle(id).await })
        })
        .collect();
    for handle in handles {
        assert!(handle.await.unwrap().is_some());
    }

    let todos = store.list_all().await;
    assert_completion_invariant(&todos);
    assert!(todos.iter().all(|t| t.is_completed));
    assert_eq!(store.summary().await.active, 0);
}
