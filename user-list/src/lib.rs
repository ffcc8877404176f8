//! Host side of the user list: performs the I/O `users-core` describes.
//!
//! # Overview
//! [`UserList::mount`] spawns a single fetch through a [`Loader`] and starts
//! out rendering the loading placeholder. When the fetch settles the view
//! switches to the list of names, or to an empty list if the fetch failed.
//!
//! # Design
//! - `Loader` is the seam between the component and the network, so tests can
//!   drive the lifecycle without a server.
//! - `HttpLoader` executes the core's `HttpRequest` with reqwest and hands the
//!   response back to the core parser.
//! - The fetch task is the only writer of the view state.

pub mod component;
pub mod config;
pub mod error;
pub mod loader;

pub use component::UserList;
pub use config::Config;
pub use error::LoadError;
pub use loader::{HttpLoader, Loader};
