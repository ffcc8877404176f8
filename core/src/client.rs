//! Stateless HTTP request builder and response parser for the users endpoint.
//!
//! # Design
//! `UsersClient` holds only a `base_url` and carries no mutable state between
//! calls. Fetching is split into `build_list_users`, which produces an
//! `HttpRequest`, and `parse_list_users`, which consumes an `HttpResponse`.
//! The caller executes the HTTP round-trip in between.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::User;

/// Public test API serving the user list.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Synchronous, stateless client for the users endpoint.
#[derive(Debug, Clone)]
pub struct UsersClient {
    base_url: String,
}

impl Default for UsersClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl UsersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base_url}/users` with no headers, query or body.
    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/users", self.base_url),
        }
    }

    /// Parse a list response, keeping the server's ordering as-is.
    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
