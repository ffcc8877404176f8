//! Domain DTOs for the users endpoint.
//!
//! # Design
//! The public API returns richer objects (`username`, `email`, `address`, ...).
//! Only `id` and `name` are rendered, so everything else is dropped during
//! deserialization rather than modelled.

use serde::{Deserialize, Serialize};

/// A single user as returned by `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}
