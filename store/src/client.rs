// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Table client for row operations.

use std::sync::Arc;

use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::http::HttpClient;
use crate::request::Query;

/// Client for one table of a PostgREST-style store.
///
/// Every method is a single round trip. Rows are decoded into whatever type the
/// caller asks for, so the client knows nothing about the table's schema.
///
/// # Example
///
/// ```ignore
/// use ticklist_store::{Credential, Order, Query, StoreConfig, TableClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoreConfig::new(
///     "https://project.supabase.co",
///     Credential::ApiKey { key: "anon-key".to_string() },
/// );
///
/// let client = TableClient::new(config)?;
/// let rows: Vec<serde_json::Value> = client
///     .select(&Query::new().select("*").order("created_at", Order::Desc))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TableClient {
    http: Arc<HttpClient>,
    config: StoreConfig,
}

impl TableClient {
    /// Creates a new table client.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL or HTTP client
    /// initialization fails.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        reqwest::Url::parse(&config.endpoint).map_err(|e| {
            StoreError::Config(format!("Invalid endpoint {:?}: {e}", config.endpoint))
        })?;
        if config.table.is_empty() {
            return Err(StoreError::Config("Table name must not be empty".to_string()));
        }

        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// The table this client operates on.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.config.table
    }

    /// Selects every row matching `query`, in the order the query asks for.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the rows cannot be decoded.
    pub async fn select<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, StoreError> {
        tracing::debug!(table = self.table(), ?query, "selecting rows");
        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::GET, &self.url())
                    .query(&query.to_pairs()),
            )
            .await?;

        read_rows(resp).await
    }

    /// Inserts one row and returns it as stored, or `None` if the store echoed nothing back.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the row cannot be decoded.
    pub async fn insert<B, T>(&self, row: &B) -> Result<Option<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(table = self.table(), "inserting row");
        let resp = self
            .http
            .execute(HttpClient::return_representation(
                self.http.build_request(Method::POST, &self.url()).json(row),
            ))
            .await?;

        Ok(read_rows(resp).await?.into_iter().next())
    }

    /// Applies `patch` to the rows matching `query` and returns the first updated row.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` has no filter, the request fails, or the row
    /// cannot be decoded.
    pub async fn update<B, T>(&self, query: &Query, patch: &B) -> Result<Option<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        ensure_filtered(query, "update")?;
        tracing::debug!(table = self.table(), ?query, "updating rows");
        let resp = self
            .http
            .execute(HttpClient::return_representation(
                self.http
                    .build_request(Method::PATCH, &self.url())
                    .query(&query.to_pairs())
                    .json(patch),
            ))
            .await?;

        Ok(read_rows(resp).await?.into_iter().next())
    }

    /// Deletes the rows matching `query`. Matching nothing is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` has no filter or the request fails.
    pub async fn delete(&self, query: &Query) -> Result<(), StoreError> {
        ensure_filtered(query, "delete")?;
        tracing::debug!(table = self.table(), ?query, "deleting rows");
        self.http
            .execute(
                self.http
                    .build_request(Method::DELETE, &self.url())
                    .query(&query.to_pairs()),
            )
            .await?;

        Ok(())
    }

    fn url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.table
        )
    }
}

/// An unfiltered write would touch the whole table.
fn ensure_filtered(query: &Query, action: &str) -> Result<(), StoreError> {
    if query.has_filters() {
        Ok(())
    } else {
        Err(StoreError::Config(format!(
            "Refusing to {action} without a row filter"
        )))
    }
}

async fn read_rows<T: DeserializeOwned>(resp: Response) -> Result<Vec<T>, StoreError> {
    let body = resp.text().await?;
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&body)?)
}
