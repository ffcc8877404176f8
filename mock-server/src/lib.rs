use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
}

/// A user as served by the endpoint. Carries more than the client reads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
}

impl User {
    pub fn new(id: i64, name: &str) -> Self {
        let username = name.split_whitespace().next().unwrap_or(name).to_string();
        Self {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", username.to_lowercase()),
            username,
            address: Address {
                street: "Kulas Light".to_string(),
                city: "Gwenborough".to_string(),
            },
        }
    }
}

/// How `GET /users` answers.
#[derive(Clone, Debug)]
pub enum Behavior {
    /// 200 with the given users as a JSON array.
    Users(Vec<User>),
    /// The given status with a plain-text body.
    Status(u16),
    /// 200 with a body that is not JSON.
    Malformed,
    /// Accept the request and never answer.
    Hang,
}

impl Default for Behavior {
    fn default() -> Self {
        Behavior::Users(sample_users())
    }
}

impl Behavior {
    /// Parse the `MOCK_BEHAVIOR` names used by the binary.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "users" => Some(Behavior::default()),
            "empty" => Some(Behavior::Users(Vec::new())),
            "error" => Some(Behavior::Status(500)),
            "malformed" => Some(Behavior::Malformed),
            "hang" => Some(Behavior::Hang),
            _ => None,
        }
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Leanne Graham"),
        User::new(2, "Ervin Howell"),
        User::new(3, "Clementine Bauch"),
    ]
}

#[derive(Clone, Debug)]
pub struct MockState {
    pub behavior: Arc<Behavior>,
    pub hits: Arc<AtomicUsize>,
}

impl MockState {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior: Arc::new(behavior),
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn app(behavior: Behavior) -> Router {
    app_with_state(MockState::new(behavior))
}

pub fn app_with_state(state: MockState) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .with_state(state)
}

pub async fn run(listener: TcpListener, behavior: Behavior) -> Result<(), std::io::Error> {
    run_with_state(listener, MockState::new(behavior)).await
}

pub async fn run_with_state(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn list_users(State(state): State<MockState>) -> Response {
    let hit = state.hits.fetch_add(1, Ordering::SeqCst) + 1;
    tracing::debug!(hit, behavior = ?state.behavior, "GET /users");
    match state.behavior.as_ref() {
        Behavior::Users(users) => Json(users.clone()).into_response(),
        Behavior::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "internal error").into_response()
        }
        Behavior::Malformed => (StatusCode::OK, "<html>not json</html>").into_response(),
        Behavior::Hang => std::future::pending::<Response>().await,
    }
}
