// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory view state kept in step with the store.
//!
//! The [`Coordinator`] owns the list of items shown to the user. Presentation
//! sends intents (`request_*`), reads the current [`ViewState`], and may
//! [`subscribe`](Coordinator::subscribe) to re-render on every change. Intents
//! take `&self`, so several may be in flight at once; each one patches the
//! state when its own round trip settles, keyed by item id.

use std::fmt;

use tokio::sync::watch;

use crate::error::TodoError;
use crate::item::{Item, ItemId};
use crate::service::TodoService;

/// The kind of operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Loading the full list.
    Load,
    /// Adding an item.
    Add,
    /// Toggling an item.
    Update,
    /// Deleting an item.
    Delete,
}

impl Operation {
    /// User-facing message for a failure of this operation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Load => "Failed to load todos",
            Self::Add => "Failed to add todo",
            Self::Update => "Failed to update todo",
            Self::Delete => "Failed to delete todo",
        }
    }
}

/// A failed operation as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Which operation failed.
    pub operation: Operation,
    /// The underlying cause, for diagnostics.
    pub cause: String,
}

impl Failure {
    fn new(operation: Operation, err: &TodoError) -> Self {
        Self {
            operation,
            cause: err.to_string(),
        }
    }

    /// User-facing message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.operation.message()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything presentation needs to render.
///
/// An error may be present alongside the last-known items; only `loading`
/// gates the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Cached items, in display order.
    pub items: Vec<Item>,
    /// Whether a full load is in progress.
    pub loading: bool,
    /// The most recent failure, if not yet cleared.
    pub error: Option<Failure>,
}

impl ViewState {
    /// Looks up a cached item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }
}

/// Owns the cached item list and drives a [`TodoService`] on user intent.
#[derive(Debug)]
pub struct Coordinator<S> {
    service: S,
    state: watch::Sender<ViewState>,
}

impl<S: TodoService> Coordinator<S> {
    /// Creates a coordinator in the loading state, before the first fetch.
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(ViewState {
            loading: true,
            ..Default::default()
        });
        Self { service, state }
    }

    /// Replaces the cached list with whatever the store holds.
    ///
    /// On failure the previous items are kept. Overlapping loads are not
    /// tracked: the first to settle clears `loading`, the last to settle
    /// leaves its items.
    pub async fn request_load(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.service.fetch_all().await;
        self.state.send_modify(|s| {
            match result {
                Ok(items) => s.items = items,
                Err(e) => s.error = Some(fail(Operation::Load, &e)),
            }
            s.loading = false;
        });
    }

    /// Creates an item and appends it to the end of the cached list.
    pub async fn request_add(&self, title: &str) {
        match self.service.create(title).await {
            Ok(item) => self.state.send_modify(|s| s.items.push(item)),
            Err(e) => self.set_error(fail(Operation::Add, &e)),
        }
    }

    /// Flips the completion flag of a cached item.
    ///
    /// Ids that are not in the cache are ignored without contacting the store.
    pub async fn request_toggle(&self, id: &ItemId) {
        let completed = self.state.borrow().item(id).map(|item| item.completed);
        let Some(completed) = completed else {
            tracing::debug!(%id, "ignoring toggle of unknown todo");
            return;
        };

        match self.service.toggle(id, !completed).await {
            Ok(updated) => {
                // The item may have been removed while the request was in flight
                self.state.send_if_modified(|s| {
                    match s.items.iter_mut().find(|item| item.id == updated.id) {
                        Some(slot) => {
                            *slot = updated;
                            true
                        }
                        None => false,
                    }
                });
            }
            Err(e) => self.set_error(fail(Operation::Update, &e)),
        }
    }

    /// Deletes an item and drops it from the cached list.
    pub async fn request_delete(&self, id: &ItemId) {
        match self.service.delete(id).await {
            Ok(()) => self.state.send_modify(|s| s.items.retain(|item| &item.id != id)),
            Err(e) => self.set_error(fail(Operation::Delete, &e)),
        }
    }

    /// Clears the current error without touching the items.
    pub fn dismiss_error(&self) {
        self.state.send_if_modified(|s| s.error.take().is_some());
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// The cached items, in display order.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.state.borrow().items.clone()
    }

    /// Whether a full load is in progress.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// The most recent failure.
    #[must_use]
    pub fn error(&self) -> Option<Failure> {
        self.state.borrow().error.clone()
    }

    /// Watches the state; the receiver is notified after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    fn set_error(&self, failure: Failure) {
        self.state.send_modify(|s| s.error = Some(failure));
    }
}

fn fail(operation: Operation, err: &TodoError) -> Failure {
    tracing::error!(?operation, %err, "{}", operation.message());
    Failure::new(operation, err)
}
