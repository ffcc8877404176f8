//! Error types for the users client.
//!
//! # Design
//! Anything other than a 200 lands in `Status` with the raw code and body for
//! the diagnostic log. A 200 whose body is not a JSON array of users is a
//! `Parse` error. Transport failures never reach the core; the host reports
//! those itself.

/// Errors returned by `UsersClient::parse_list_users`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with something other than 200.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a JSON array of users.
    #[error("deserialization failed: {0}")]
    Parse(String),
}
