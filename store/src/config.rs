// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// How requests authenticate against the store.
#[derive(Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "type")]
pub enum Credential {
    /// No authentication.
    #[serde(rename = "none")]
    #[default]
    None,
    /// Project API key, sent as both `apikey` and bearer token.
    #[serde(rename = "api-key")]
    ApiKey {
        /// The API key.
        key: String,
    },
    /// A user access token alongside the project API key.
    #[serde(rename = "bearer")]
    Bearer {
        /// Access token for the `Authorization` header.
        token: String,
        /// Optional project API key for the `apikey` header.
        #[serde(default)]
        api_key: Option<String>,
    },
}

// Secrets never end up in logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::ApiKey { .. } => f.debug_struct("ApiKey").finish_non_exhaustive(),
            Self::Bearer { api_key, .. } => f
                .debug_struct("Bearer")
                .field("api_key", &api_key.as_ref().map(|_| "***"))
                .finish_non_exhaustive(),
        }
    }
}

/// Remote store configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store, e.g. `https://project.supabase.co`.
    pub endpoint: String,
    /// Authentication.
    #[serde(default)]
    pub credential: Credential,
    /// Name of the table holding the items.
    #[serde(default = "default_table")]
    pub table: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl StoreConfig {
    /// Creates a configuration for `endpoint` with defaults for everything else.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, credential: Credential) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential,
            ..Default::default()
        }
    }
}

fn default_table() -> String {
    "todos".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("ticklist-store/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            credential: Credential::default(),
            table: default_table(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
