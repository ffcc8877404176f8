//! View state and HTML rendering for the user list.
//!
//! # Design
//! The view is a pure function of [`ViewState`]. `Loading` renders a fixed
//! placeholder; `Ready` renders the heading and one list entry per user, in
//! the order held by `items`. A failed fetch settles to `Ready` with no items,
//! so it renders the same as an empty success.

use crate::types::User;

/// Placeholder rendered while the fetch is in flight.
pub const LOADING_PLACEHOLDER: &str = "<div>Loading...</div>";

const HEADING: &str = "List Users";

/// What the view shows. Starts as `Loading` and settles to `Ready` once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Ready {
        items: Vec<User>,
    },
}

impl ViewState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready { .. })
    }

    /// Users to show. Empty while loading.
    pub fn items(&self) -> &[User] {
        match self {
            ViewState::Loading => &[],
            ViewState::Ready { items } => items,
        }
    }

    /// Apply the outcome of the fetch.
    ///
    /// `Ready` is terminal: settling an already settled state returns it
    /// unchanged. Failures settle to an empty list.
    pub fn settle<E>(self, outcome: Result<Vec<User>, E>) -> ViewState {
        match self {
            ViewState::Loading => ViewState::Ready {
                items: outcome.unwrap_or_default(),
            },
            ready @ ViewState::Ready { .. } => ready,
        }
    }
}

/// Render the state as an HTML fragment.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Loading => LOADING_PLACEHOLDER.to_string(),
        ViewState::Ready { items } => {
            let mut html = format!("<div><h1>{HEADING}</h1><ul>");
            for user in items {
                html.push_str(&format!(
                    r#"<li data-key="{}">{}</li>"#,
                    user.id,
                    escape_html(&user.name)
                ));
            }
            html.push_str("</ul></div>");
            html
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
