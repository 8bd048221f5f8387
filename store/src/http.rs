// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status handling.

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::{Credential, StoreConfig};
use crate::error::StoreError;

/// HTTP client for store operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    credential: Credential,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            credential: config.credential.clone(),
        })
    }

    /// Builds a request with authentication headers.
    pub fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self.client.request(method, url);

        match &self.credential {
            Credential::ApiKey { key } => {
                req = req.header("apikey", key).bearer_auth(key);
            }
            Credential::Bearer { token, api_key } => {
                if let Some(key) = api_key {
                    req = req.header("apikey", key);
                }
                req = req.bearer_auth(token);
            }
            Credential::None => {}
        }

        req
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, StoreError> {
        let resp = req.send().await?;

        match resp.status() {
            status if status.is_success() => Ok(resp),
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(StoreError::Http(format!("{status}: {text}")))
            }
        }
    }

    /// Asks the store to echo the affected rows back.
    pub fn return_representation(req: RequestBuilder) -> RequestBuilder {
        req.header("Prefer", "return=representation")
    }
}
