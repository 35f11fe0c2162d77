use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use client_core::{DEFAULT_API_BASE_URL, SUCCESS_DISPLAY};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "order_desk.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub success_display_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout_secs: 10,
            success_display_ms: SUCCESS_DISPLAY.as_millis() as u64,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// `None` disables the per-request timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with_env(path, |key| std::env::var(key).ok())
}

/// Defaults, then the settings file if it exists, then environment overrides.
pub fn load_settings_with_env(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str::<Settings>(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    };

    if let Some(v) = env("ORDER_DESK_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = v
            .trim()
            .parse()
            .with_context(|| format!("APP__REQUEST_TIMEOUT_SECS is not a number: '{v}'"))?;
    }
    if let Some(v) = env("APP__SUCCESS_DISPLAY_MS") {
        settings.success_display_ms = v
            .trim()
            .parse()
            .with_context(|| format!("APP__SUCCESS_DISPLAY_MS is not a number: '{v}'"))?;
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
