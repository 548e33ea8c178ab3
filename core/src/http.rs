//! Plain-data HTTP requests and responses for `TodoClient`.
//!
//! The client builds `HttpRequest` values and parses `HttpResponse` values;
//! whoever embeds it (a UI shell, a test) performs the round-trip.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Built by `TodoClient::build_*`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Filled in by the caller after executing an `HttpRequest`, then handed to
/// `TodoClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    fn new(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn get(path: String) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub(crate) fn delete(path: String) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub(crate) fn post(path: String) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub(crate) fn put(path: String) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Attach a JSON body and the matching content-type header.
    pub(crate) fn with_json(mut self, body: String) -> Self {
        self.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        self.body = Some(body);
        self
    }
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
