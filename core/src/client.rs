//! Stateless HTTP request builder and response parser for the todo server.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Every route gets a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the embedding UI performs the round-trip in between and
//! re-lists after each successful write.

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::store::normalize_title;
use crate::types::{CreateTodo, TodoRecord, TodoSummary, UpdateTodo};

/// Synchronous, stateless client for the todo server.
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

    /// Whether `title` would be accepted by the store. A UI disables its
    /// "add" button while this is false.
    pub fn validate_title(title: &str) -> bool {
        normalize_title(title).is_ok()
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: Uuid) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::get(self.todos_url())
    }

    pub fn build_get_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest::get(self.todo_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::post(self.todos_url()).with_json(body))
    }

    pub fn build_update_todo(&self, id: Uuid, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::put(self.todo_url(id)).with_json(body))
    }

    pub fn build_toggle_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest::post(format!("{}/toggle", self.todo_url(id)))
    }

    pub fn build_delete_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest::delete(self.todo_url(id))
    }

    pub fn build_clear_completed(&self) -> HttpRequest {
        HttpRequest::delete(format!("{}/completed", self.base_url))
    }

    pub fn build_summary(&self) -> HttpRequest {
        HttpRequest::get(format!("{}/summary", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoRecord>, ApiError> {
        parse_json(&response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<TodoRecord, ApiError> {
        parse_json(&response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<TodoRecord, ApiError> {
        parse_json(&response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<TodoRecord, ApiError> {
        parse_json(&response, 200)
    }

    pub fn parse_toggle_todo(&self, response: HttpResponse) -> Result<TodoRecord, ApiError> {
        parse_json(&response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_clear_completed(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_summary(&self, response: HttpResponse) -> Result<TodoSummary, ApiError> {
        parse_json(&response, 200)
    }
}

fn parse_json<T: DeserializeOwned>(response: &HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::InvalidArgument(error_message(&response.body))),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

/// Pull `error` out of a `{"error": "..."}` body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
