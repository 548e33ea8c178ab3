//! In-memory todo storage and a client for the HTTP surface over it.
//!
//! # Overview
//! `TodoStore` is the authoritative list of todo records. Every operation is
//! async, takes one exclusive lock for its whole duration, and returns owned
//! snapshots. `TodoClient` builds requests for and parses responses from the
//! `todo-server` routes without touching the network itself.
//!
//! # Design
//! - The only error is `StoreError::InvalidArgument` for blank titles.
//!   Missing records come back as `None` or `false`.
//! - Timestamps come from a `Clock` so tests can control ordering.
//! - Ids are random v4 UUIDs and are never reused.

pub mod client;
pub mod clock;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use clock::{Clock, SystemClock};
pub use error::{ApiError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TodoStore;
pub use types::{CreateTodo, TodoRecord, TodoSummary, UpdateTodo};
