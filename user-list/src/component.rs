//! The user list component: one fetch per mount, rendered from `ViewState`.
//!
//! # Design
//! `mount` spawns the fetch task and keeps its `JoinHandle`. The task owns the
//! only `watch::Sender`, so it is the single writer of the state and it writes
//! exactly once. Readers only ever see `Loading` or the settled `Ready`.
//!
//! Teardown aborts the task. If the fetch completes after every receiver is
//! gone, the result is dropped and logged at debug level.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use users_core::ViewState;

use crate::loader::Loader;

#[derive(Debug)]
pub struct UserList {
    state: watch::Receiver<ViewState>,
    task: Option<JoinHandle<()>>,
}

impl UserList {
    /// Start the component. Must be called from within a tokio runtime.
    pub fn mount<L: Loader>(loader: L) -> Self {
        let (tx, rx) = watch::channel(ViewState::Loading);
        let task = tokio::spawn(load(loader, tx));
        Self {
            state: rx,
            task: Some(task),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn render(&self) -> String {
        users_core::render(&self.state.borrow())
    }

    /// Wait for the fetch to settle.
    ///
    /// Returns the current state unchanged if the fetch task is gone without
    /// having settled.
    pub async fn settled(&mut self) -> ViewState {
        let settled = self
            .state
            .wait_for(ViewState::is_ready)
            .await
            .map(|state| ViewState::clone(&state))
            .ok();
        settled.unwrap_or_else(|| self.state())
    }

    /// Tear down, cancelling the fetch if it is still in flight.
    pub async fn unmount(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            match task.await {
                Ok(()) => debug!("fetch had already settled"),
                Err(err) if err.is_cancelled() => debug!("fetch cancelled on unmount"),
                Err(err) => error!(%err, "fetch task failed"),
            }
        }
    }
}

impl Drop for UserList {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn load<L: Loader>(loader: L, tx: watch::Sender<ViewState>) {
    let outcome = loader.fetch_users().await;
    match &outcome {
        Ok(users) => info!(count = users.len(), "users loaded"),
        Err(err) => error!(%err, "error fetching users"),
    }

    let next = tx.borrow().clone().settle(outcome);
    if tx.send(next).is_err() {
        debug!("view torn down before the fetch settled; dropping result");
    }
}
