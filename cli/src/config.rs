// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use ticklist_core::{APP_NAME, StoreConfig};

const TICKLIST_CONFIG_ENV: &str = "TICKLIST_CONFIG";
const TICKLIST_DEV_ENV: &str = "TICKLIST_DEV";

const TICKLIST_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const TICKLIST_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locates and reads the store configuration.
///
/// Lookup order: the explicit path, then `$TICKLIST_CONFIG`, then
/// `<config dir>/ticklist/config.toml`.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<StoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TICKLIST_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({TICKLIST_DEV_ENV} is set): config must be explicitly specified via --config or {TICKLIST_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading configuration");
    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.store)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    store: StoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(TICKLIST_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if TICKLIST_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if TICKLIST_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            TICKLIST_DEV_ENV,
            val,
            TICKLIST_DEV_VALID_TRUE.join(", "),
            TICKLIST_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
