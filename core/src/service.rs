// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use ticklist_store::{Order, Query, StoreConfig, TableClient};

use crate::error::TodoError;
use crate::item::{Item, ItemId};

const COLUMN_ID: &str = "id";
const COLUMN_CREATED_AT: &str = "created_at";

/// Data access for todo items. Each operation is a single round trip to the store.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Returns every item, newest first.
    async fn fetch_all(&self) -> Result<Vec<Item>, TodoError>;

    /// Creates an incomplete item with the trimmed `title`.
    ///
    /// Fails with [`TodoError::Validation`] if the title is blank.
    async fn create(&self, title: &str) -> Result<Item, TodoError>;

    /// Sets the completion flag of the item with `id`.
    async fn toggle(&self, id: &ItemId, completed: bool) -> Result<Item, TodoError>;

    /// Removes the item with `id`. Removing a missing item succeeds.
    async fn delete(&self, id: &ItemId) -> Result<(), TodoError>;
}

#[async_trait]
impl<S: TodoService + ?Sized> TodoService for Arc<S> {
    async fn fetch_all(&self) -> Result<Vec<Item>, TodoError> {
        (**self).fetch_all().await
    }

    async fn create(&self, title: &str) -> Result<Item, TodoError> {
        (**self).create(title).await
    }

    async fn toggle(&self, id: &ItemId, completed: bool) -> Result<Item, TodoError> {
        (**self).toggle(id, completed).await
    }

    async fn delete(&self, id: &ItemId) -> Result<(), TodoError> {
        (**self).delete(id).await
    }
}

#[async_trait]
impl<S: TodoService + ?Sized> TodoService for Box<S> {
    async fn fetch_all(&self) -> Result<Vec<Item>, TodoError> {
        (**self).fetch_all().await
    }

    async fn create(&self, title: &str) -> Result<Item, TodoError> {
        (**self).create(title).await
    }

    async fn toggle(&self, id: &ItemId, completed: bool) -> Result<Item, TodoError> {
        (**self).toggle(id, completed).await
    }

    async fn delete(&self, id: &ItemId) -> Result<(), TodoError> {
        (**self).delete(id).await
    }
}

/// Trims `title` and rejects it if nothing is left.
///
/// # Errors
///
/// Returns [`TodoError::Validation`] for empty or whitespace-only titles.
pub fn validate_title(title: &str) -> Result<&str, TodoError> {
    match title.trim() {
        "" => Err(TodoError::Validation("title must not be empty".to_string())),
        trimmed => Ok(trimmed),
    }
}

/// [`TodoService`] backed by a remote table.
#[derive(Debug, Clone)]
pub struct RemoteTodoService {
    client: TableClient,
}

#[derive(Debug, Serialize)]
struct NewItem<'a> {
    title: &'a str,
    completed: bool,
}

#[derive(Debug, Serialize)]
struct CompletedPatch {
    completed: bool,
}

impl RemoteTodoService {
    /// Connects to the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: StoreConfig) -> Result<Self, TodoError> {
        Ok(Self::with_client(TableClient::new(config)?))
    }

    /// Wraps an existing table client.
    #[must_use]
    pub fn with_client(client: TableClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TodoService for RemoteTodoService {
    async fn fetch_all(&self) -> Result<Vec<Item>, TodoError> {
        let query = Query::new()
            .select("*")
            .order(COLUMN_CREATED_AT, Order::Desc);
        let items: Vec<Item> = self.client.select(&query).await?;
        Ok(items)
    }

    async fn create(&self, title: &str) -> Result<Item, TodoError> {
        let title = validate_title(title)?;
        tracing::debug!(title, "creating todo");

        let row = NewItem {
            title,
            completed: false,
        };
        self.client
            .insert(&row)
            .await?
            .ok_or_else(|| TodoError::NotFound("creation yielded no row".to_string()))
    }

    async fn toggle(&self, id: &ItemId, completed: bool) -> Result<Item, TodoError> {
        tracing::debug!(%id, completed, "updating todo");
        let query = Query::new().eq(COLUMN_ID, id);
        self.client
            .update(&query, &CompletedPatch { completed })
            .await?
            .ok_or_else(|| TodoError::NotFound(format!("no todo with id {id}")))
    }

    async fn delete(&self, id: &ItemId) -> Result<(), TodoError> {
        tracing::debug!(%id, "deleting todo");
        let query = Query::new().eq(COLUMN_ID, id);
        self.client.delete(&query).await?;
        Ok(())
    }
}
