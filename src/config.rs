//! Client configuration.

use crate::{Error, Result};
use std::env;
use std::time::Duration;

/// Base URL of the sandbox environment.
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.mangopay.com";
/// Base URL of the production environment.
pub const PRODUCTION_BASE_URL: &str = "https://api.mangopay.com";
/// API version segment inserted before every path.
pub const DEFAULT_API_VERSION: &str = "v2.01";

/// Connection settings and credentials for the API.
#[derive(Clone)]
pub struct Config {
    /// Client identifier, also used as a path segment for client-scoped endpoints.
    pub client_id: String,

    /// API key paired with the client id for token acquisition.
    pub client_password: String,

    /// Scheme and host, without the version segment.
    pub base_url: String,

    /// Version segment, e.g. `v2.01`.
    pub api_version: String,

    /// Connect and request timeout. `Duration::ZERO` keeps the transport default.
    pub timeout: Duration,
}

impl Config {
    /// Sandbox configuration with the default API version and no timeout.
    pub fn new(client_id: impl Into<String>, client_password: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_password: client_password.into(),
            base_url: SANDBOX_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::ZERO,
        }
    }

    /// Loads configuration from the environment, reading a `.env` file first if present.
    ///
    /// | Variable | Required | Default |
    /// |---|---|---|
    /// | `MANGOPAY_CLIENT_ID` | yes | |
    /// | `MANGOPAY_CLIENT_PASSWORD` | yes | |
    /// | `MANGOPAY_BASE_URL` | no | sandbox |
    /// | `MANGOPAY_API_VERSION` | no | `v2.01` |
    /// | `MANGOPAY_TIMEOUT_MS` | no | `0` (transport default) |
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] when a required variable is missing
    /// or the timeout is not an integer.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let client_id = env::var("MANGOPAY_CLIENT_ID")
            .map_err(|_| Error::ConfigurationError("MANGOPAY_CLIENT_ID not set".to_string()))?;
        let client_password = env::var("MANGOPAY_CLIENT_PASSWORD").map_err(|_| {
            Error::ConfigurationError("MANGOPAY_CLIENT_PASSWORD not set".to_string())
        })?;

        let base_url =
            env::var("MANGOPAY_BASE_URL").unwrap_or_else(|_| SANDBOX_BASE_URL.to_string());
        let api_version =
            env::var("MANGOPAY_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let timeout_ms: u64 = env::var("MANGOPAY_TIMEOUT_MS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .map_err(|_| Error::ConfigurationError("Invalid MANGOPAY_TIMEOUT_MS".to_string()))?;

        Ok(Self {
            client_id,
            client_password,
            base_url,
            api_version,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured timeout, or `None` when the transport default applies.
    pub fn effective_timeout(&self) -> Option<Duration> {
        (!self.timeout.is_zero()).then_some(self.timeout)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}
