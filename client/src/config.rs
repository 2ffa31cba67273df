//! Application configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values come from `option_env!` so the wasm bundle carries them without a
//! runtime lookup. `start()` builds one `AppConfig` and hands it to the
//! components as props; nothing below the entry point reads configuration
//! from ambient state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_STATUS_TIMEOUT_MS: u32 = 10_000;
pub const APP_NAME: &str = "Vibed Traveller";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid APP_API_URL '{value}': {reason}")]
    InvalidApiUrl { value: String, reason: String },
    #[error("unknown APP_ENV '{0}' (expected 'development' or 'production')")]
    UnknownEnvironment(String),
    #[error("invalid APP_STATUS_TIMEOUT_MS '{0}' (expected a positive integer)")]
    InvalidTimeout(String),
}

/// Deployment mode the bundle was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Read-only description of the build environment, shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentInfo {
    pub is_development: bool,
    pub is_production: bool,
    pub mode: Environment,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash.
    pub api_base_url: String,
    pub app_name: &'static str,
    pub app_version: &'static str,
    pub environment: Environment,
    /// Upper bound for a single auth-status request in the browser.
    pub status_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_owned(),
            app_name: APP_NAME,
            app_version: APP_VERSION,
            environment: default_environment(),
            status_timeout_ms: DEFAULT_STATUS_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// - `APP_API_URL`: backend base URL, default `http://localhost:8080`
    /// - `APP_ENV`: `development` or `production`, default follows `debug_assertions`
    /// - `APP_STATUS_TIMEOUT_MS`: default 10000
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when any of the values is present but malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("APP_API_URL"),
            option_env!("APP_ENV"),
            option_env!("APP_STATUS_TIMEOUT_MS"),
        )
    }

    /// Build config from raw values. Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when any of the values is present but malformed.
    pub fn from_values(
        api_url: Option<&str>,
        environment: Option<&str>,
        status_timeout_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_api_url(api_url)?,
            environment: parse_environment(environment)?,
            status_timeout_ms: parse_timeout(status_timeout_ms)?,
            ..Self::default()
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Derive the environment descriptor. Computed on every call.
    pub fn environment_info(&self) -> EnvironmentInfo {
        let mode = self.environment;
        EnvironmentInfo {
            is_development: mode == Environment::Development,
            is_production: mode == Environment::Production,
            mode,
            description: match mode {
                Environment::Development => "Development mode - build-time defaults and local overrides",
                Environment::Production => "Production mode - environment variable baked in at build time",
            },
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn default_environment() -> Environment {
    if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(value) = non_empty(raw) else {
        return Ok(DEFAULT_API_URL.to_owned());
    };
    let parsed = url::Url::parse(value).map_err(|e| ConfigError::InvalidApiUrl {
        value: value.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl {
            value: value.to_owned(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_environment(raw: Option<&str>) -> Result<Environment, ConfigError> {
    let Some(value) = non_empty(raw) else {
        return Ok(default_environment());
    };
    match value.to_ascii_lowercase().as_str() {
        "development" | "dev" => Ok(Environment::Development),
        "production" | "prod" => Ok(Environment::Production),
        _ => Err(ConfigError::UnknownEnvironment(value.to_owned())),
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(value) = non_empty(raw) else {
        return Ok(DEFAULT_STATUS_TIMEOUT_MS);
    };
    match value.parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTimeout(value.to_owned())),
    }
}
