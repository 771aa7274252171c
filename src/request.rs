//! Assembly of outgoing requests from an endpoint and per-call inputs.

use crate::endpoint::Endpoint;
use crate::metadata::RequestContext;
use crate::pagination::Pagination;
use crate::{Error, Result};
use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use url::Url;

/// Value of the `User-Agent` header sent with every request.
pub const SDK_USER_AGENT: &str = concat!("mangopay-rust/", env!("CARGO_PKG_VERSION"));
/// Header carrying the caller's idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";
const APPLICATION_JSON: &str = "application/json";

/// The fixed prefix every endpoint path is resolved against.
#[derive(Debug, Clone)]
pub struct ApiRoot {
    base_url: String,
    api_version: String,
    client_id: String,
}

impl ApiRoot {
    pub fn new(
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            client_id: client_id.into(),
        }
    }

    /// `{base_url}/{api_version}[/{client_id}]{path}`.
    ///
    /// # Errors
    ///
    /// Returns an error when a placeholder is unresolved or the URL is malformed.
    pub fn url_for(&self, endpoint: &Endpoint, path_args: &[&str]) -> Result<Url> {
        let path = endpoint.resolve(path_args)?;
        let url = if endpoint.include_client_id() {
            format!(
                "{}/{}/{}{}",
                self.base_url, self.api_version, self.client_id, path
            )
        } else {
            format!("{}/{}{}", self.base_url, self.api_version, path)
        };
        Ok(Url::parse(&url)?)
    }
}

/// A fully specified outgoing request.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Builds a request for `endpoint`.
    ///
    /// Pagination is appended as `page`/`per_page`, followed by the context's
    /// query parameters. Headers are layered as content type, user agent,
    /// idempotency key, credential, then the context's custom headers, so the
    /// caller wins on a name collision. The entity, when present, becomes the
    /// JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built or the entity fails to serialize.
    pub fn build<T>(
        root: &ApiRoot,
        endpoint: &Endpoint,
        path_args: &[&str],
        entity: Option<&T>,
        context: &RequestContext,
        pagination: Option<&Pagination>,
        credential: Option<(HeaderName, HeaderValue)>,
    ) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let mut url = root.url_for(endpoint, path_args)?;

        if pagination.is_some() || !context.query_params.is_empty() {
            let mut query = url.query_pairs_mut();
            if let Some(pagination) = pagination {
                query
                    .append_pair("page", &pagination.page().to_string())
                    .append_pair("per_page", &pagination.per_page().to_string());
            }
            for (key, value) in &context.query_params {
                query.append_pair(key, value);
            }
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(USER_AGENT, HeaderValue::from_static(SDK_USER_AGENT));

        if let Some(key) = context.effective_idempotency_key() {
            let value = HeaderValue::try_from(key).map_err(|e| {
                Error::ConfigurationError(format!("Invalid idempotency key: {}", e))
            })?;
            headers.insert(HeaderName::from_static(IDEMPOTENCY_KEY_HEADER), value);
        }

        if let Some((name, value)) = credential {
            headers.insert(name, value);
        }

        for (name, value) in &context.headers {
            headers.insert(name.clone(), value.clone());
        }

        let body = entity
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| Error::SerializationFailed(e.to_string()))?;

        Ok(Self {
            method: endpoint.method().clone(),
            url,
            headers,
            body,
        })
    }

    /// A loggable copy with sensitive header values redacted.
    pub fn snapshot(&self) -> RequestSnapshot {
        RequestSnapshot {
            method: self.method.to_string(),
            url: self.url.to_string(),
            headers: redacted_headers(&self.headers),
            body: self.body.clone(),
        }
    }
}

/// What was sent, as recorded by the telemetry recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSnapshot {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

pub(crate) fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let rendered = if name == AUTHORIZATION || value.is_sensitive() {
                "<redacted>".to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.as_str().to_string(), rendered)
        })
        .collect()
}
