//! Request/response core for the user list.
//!
//! # Overview
//! Builds the `GET /users` request and parses its response without touching
//! the network (host-does-IO pattern). The host executes the HTTP round-trip
//! and feeds the result into [`ViewState`], which renders to an HTML fragment.
//!
//! # Design
//! - `UsersClient` is stateless: it holds only `base_url`.
//! - Fetching is split into `build_list_users` and `parse_list_users` so the
//!   I/O boundary is explicit.
//! - `ViewState` is the only state the view knows about. It starts `Loading`
//!   and settles to `Ready` once.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::{UsersClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::User;
pub use view::{render, ViewState, LOADING_PLACEHOLDER};
