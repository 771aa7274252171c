//! Authentication header providers.
//!
//! The request executor asks a [`CredentialProvider`] for one header per
//! outgoing request. Providers may perform their own network round-trip;
//! whatever error they return reaches the caller unchanged.

use crate::config::Config;
use crate::endpoint::AUTHENTICATION_OAUTH;
use crate::metadata::RequestContext;
use crate::{Error, Result};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderName, HeaderValue};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use url::Url;

/// Supplies the authentication header for outgoing requests.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use http::{header::AUTHORIZATION, HeaderName, HeaderValue};
/// use mangopay::{credentials::CredentialProvider, metadata::RequestContext, Result};
///
/// struct FromVault;
///
/// #[async_trait]
/// impl CredentialProvider for FromVault {
///     async fn authorization_header(
///         &self,
///         _context: &RequestContext,
///     ) -> Result<(HeaderName, HeaderValue)> {
///         Ok((AUTHORIZATION, HeaderValue::from_static("Bearer from-vault")))
///     }
/// }
/// ```
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Returns the header name and value that authenticate a request.
    async fn authorization_header(
        &self,
        context: &RequestContext,
    ) -> Result<(HeaderName, HeaderValue)>;
}

/// A pre-obtained bearer token.
pub struct StaticToken {
    value: HeaderValue,
}

impl StaticToken {
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if the token is not a valid header value.
    pub fn bearer(token: impl AsRef<str>) -> Result<Self> {
        let mut value = HeaderValue::try_from(format!("Bearer {}", token.as_ref()))
            .map_err(|e| Error::ConfigurationError(format!("Invalid bearer token: {}", e)))?;
        value.set_sensitive(true);
        Ok(Self { value })
    }
}

#[async_trait]
impl CredentialProvider for StaticToken {
    async fn authorization_header(
        &self,
        _context: &RequestContext,
    ) -> Result<(HeaderName, HeaderValue)> {
        Ok((AUTHORIZATION, self.value.clone()))
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken").finish_non_exhaustive()
    }
}

/// Tokens are refreshed this long before the server-announced expiry.
const EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// Upper bound on how long a token is reused, whatever `expires_in` says.
const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    expires_in: u64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

struct CachedToken {
    header: HeaderValue,
    refresh_at: Instant,
}

/// OAuth 2 client-credentials flow against `/{version}/oauth/token`.
///
/// The token is cached and shared by every request issued through the same
/// provider; it is fetched again once it is about to expire.
pub struct OAuthCredentials {
    http_client: reqwest::Client,
    token_url: Url,
    client_id: String,
    client_password: String,
    timeout: Option<Duration>,
    cached: Mutex<Option<CachedToken>>,
}

impl OAuthCredentials {
    /// Builds a provider from the client id and API key in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let path = AUTHENTICATION_OAUTH.resolve(&[])?;
        let token_url = Url::parse(&format!(
            "{}/{}{}",
            config.base_url.trim_end_matches('/'),
            config.api_version,
            path
        ))?;

        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http_client,
            token_url,
            client_id: config.client_id.clone(),
            client_password: config.client_password.clone(),
            timeout: config.effective_timeout(),
            cached: Mutex::new(None),
        })
    }

    /// Drops the cached token so that the next request fetches a fresh one.
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }

    async fn fetch_token(&self) -> Result<CachedToken> {
        tracing::debug!(url = %self.token_url, "Requesting OAuth token");

        let mut request = self
            .http_client
            .post(self.token_url.clone())
            .basic_auth(&self.client_id, Some(&self.client_password))
            .form(&[("grant_type", "client_credentials")]);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(Error::from_transport)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::from_transport)?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "OAuth token request rejected");
            return Err(Error::from_status(status, body));
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| Error::DeserializationFailed {
                raw_response: body.clone(),
                serde_error: e.to_string(),
                status,
            })?;

        let mut header = HeaderValue::try_from(format!("{} {}", token.token_type, token.access_token))
            .map_err(|e| Error::ConfigurationError(format!("Invalid access token: {}", e)))?;
        header.set_sensitive(true);

        let lifetime = Duration::from_secs(token.expires_in)
            .min(MAX_TOKEN_LIFETIME)
            .saturating_sub(EXPIRY_MARGIN);
        tracing::info!(expires_in = token.expires_in, "Obtained OAuth token");

        let now = Instant::now();
        Ok(CachedToken {
            header,
            refresh_at: now.checked_add(lifetime).unwrap_or(now),
        })
    }
}

#[async_trait]
impl CredentialProvider for OAuthCredentials {
    async fn authorization_header(
        &self,
        _context: &RequestContext,
    ) -> Result<(HeaderName, HeaderValue)> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok((AUTHORIZATION, token.header.clone()));
            }
        }

        let token = self.fetch_token().await?;
        let header = token.header.clone();
        *cached = Some(token);
        Ok((AUTHORIZATION, header))
    }
}

impl std::fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("token_url", &self.token_url.as_str())
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
