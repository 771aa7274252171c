//! Asynchronous API client.
//!
//! The [`Client`] type is the main entry point for making API calls.
//! Use [`ClientBuilder`] to configure and create clients.

use crate::{
    apis::clients::ClientsApi,
    config::{Config, DEFAULT_API_VERSION, SANDBOX_BASE_URL},
    credentials::{CredentialProvider, OAuthCredentials, StaticToken},
    endpoint::Endpoint,
    metadata::RequestContext,
    pagination::{ListResult, Pagination},
    request::{redacted_headers, ApiRoot, PreparedRequest},
    response::{map_list, map_object, RawResponse},
    telemetry::{ExchangeRecord, ExchangeRecorder},
    Error, Result,
};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// An asynchronous client for the MangoPay API.
///
/// The client is designed to be reused across calls and is cheap to clone;
/// clones share the connection pool, the credential provider and the
/// last-exchange record. Each call makes exactly one attempt.
///
/// # Examples
///
/// ```no_run
/// use mangopay::{Client, Config, Pagination};
/// use mangopay::entities::FundsType;
///
/// # async fn example() -> Result<(), mangopay::Error> {
/// let client = Client::new(Config::from_env()?)?;
///
/// let me = client.clients().get().await?;
/// println!("Client: {:?}", me.name);
///
/// let wallets = client
///     .clients()
///     .wallets(FundsType::Fees, Some(&Pagination::new(1, 20)?))
///     .await?;
/// println!("{} of {} wallets", wallets.len(), wallets.pagination.total_items);
///
/// if let Some(exchange) = client.last_exchange() {
///     println!("Calls remaining: {:?}", exchange.rate_limit.remaining);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    root: ApiRoot,
    default_headers: HeaderMap,
    credentials: Option<Arc<dyn CredentialProvider>>,
    recorder: ExchangeRecorder,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client from `config`, authenticating with the OAuth
    /// client-credentials flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        ClientBuilder::new().config(config)?.build()
    }

    /// Calls an endpoint that returns a single object.
    ///
    /// # Type Parameters
    ///
    /// * `Req` - The entity sent as JSON body (must implement `Serialize`)
    /// * `Res` - The response type; a 204 yields `Res::default()`
    ///
    /// # Errors
    ///
    /// * [`Error::Authentication`] on HTTP 401
    /// * [`Error::Timeout`] when the transport times out
    /// * [`Error::Response`] on any status other than 200, 204 or 401
    /// * [`Error::Network`] when the transport fails for another reason
    /// * whatever the credential provider returns, unchanged
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mangopay::{endpoint::CLIENT_SAVE, Client, RequestContext};
    /// use mangopay::entities::{ClientDto, ClientPutDto};
    ///
    /// # async fn example(client: Client) -> Result<(), mangopay::Error> {
    /// let update = ClientPutDto {
    ///     primary_theme_colour: Some("#000000".to_string()),
    ///     ..Default::default()
    /// };
    /// let ctx = RequestContext::new().with_idempotency_key("update-colours-1");
    /// let updated: ClientDto = client
    ///     .request(&CLIENT_SAVE, &[], Some(&update), &ctx, None)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request<Req, Res>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        entity: Option<&Req>,
        context: &RequestContext,
        pagination: Option<&Pagination>,
    ) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned + Default,
    {
        let response = self
            .execute(endpoint, path_args, entity, context, pagination)
            .await?;
        map_object(&response)
    }

    /// Calls an endpoint that returns a collection.
    ///
    /// The list carries the server's pagination metadata when the response
    /// was a 200.
    ///
    /// # Errors
    ///
    /// As [`Client::request`], plus [`Error::InvalidPaginationHeader`] when a
    /// page or item count header is not numeric.
    pub async fn request_list<T>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        context: &RequestContext,
        pagination: Option<&Pagination>,
    ) -> Result<ListResult<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .execute::<()>(endpoint, path_args, None, context, pagination)
            .await?;
        map_list(&response)
    }

    /// Fetches a single object.
    pub async fn get_object<T>(&self, endpoint: &Endpoint, path_args: &[&str]) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request::<(), T>(endpoint, path_args, None, &RequestContext::default(), None)
            .await
    }

    /// Fetches one page of a collection.
    pub async fn get_list<T>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        pagination: Option<&Pagination>,
        context: &RequestContext,
    ) -> Result<ListResult<T>>
    where
        T: DeserializeOwned,
    {
        self.request_list(endpoint, path_args, context, pagination)
            .await
    }

    /// Creates an object, sending `idempotency_key` when provided.
    pub async fn create_object<Req, Res>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        entity: &Req,
        idempotency_key: Option<&str>,
    ) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned + Default,
    {
        let context = RequestContext {
            idempotency_key: idempotency_key.map(str::to_string),
            ..Default::default()
        };
        self.request(endpoint, path_args, Some(entity), &context, None)
            .await
    }

    /// Updates an object.
    pub async fn update_object<Req, Res>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        entity: &Req,
    ) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned + Default,
    {
        self.request(endpoint, path_args, Some(entity), &RequestContext::default(), None)
            .await
    }

    /// The most recent exchange performed through this client or its clones.
    ///
    /// Concurrent calls overwrite the same slot; see [`crate::telemetry`].
    pub fn last_exchange(&self) -> Option<ExchangeRecord> {
        self.inner.recorder.last()
    }

    /// The recorder holding the last exchange.
    pub fn recorder(&self) -> &ExchangeRecorder {
        &self.inner.recorder
    }

    /// Endpoints operating on the client account itself.
    pub fn clients(&self) -> ClientsApi<'_> {
        ClientsApi::new(self)
    }

    /// Performs one exchange and classifies its outcome.
    ///
    /// The exchange is recorded before any error is returned.
    async fn execute<Req>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        entity: Option<&Req>,
        context: &RequestContext,
        pagination: Option<&Pagination>,
    ) -> Result<RawResponse>
    where
        Req: Serialize + ?Sized,
    {
        let credential = match &self.inner.credentials {
            Some(provider) => Some(provider.authorization_header(context).await?),
            None => None,
        };

        let mut context = context.clone();
        let mut headers = self.inner.default_headers.clone();
        for (name, value) in &context.headers {
            headers.insert(name.clone(), value.clone());
        }
        context.headers = headers;

        let prepared = PreparedRequest::build(
            &self.inner.root,
            endpoint,
            path_args,
            entity,
            &context,
            pagination,
            credential,
        )?;

        tracing::debug!(
            method = %prepared.method,
            url = %prepared.url,
            "Executing HTTP request"
        );
        for (name, value) in redacted_headers(&prepared.headers) {
            tracing::debug!(header = %name, value = %value, "HTTP header");
        }
        if let Some(body) = &prepared.body {
            tracing::debug!(body = %body, "Request body");
        }

        let snapshot = prepared.snapshot();
        let mut request = self
            .inner
            .http_client
            .request(prepared.method, prepared.url)
            .headers(prepared.headers);
        if let Some(body) = prepared.body {
            request = request.body(body);
        }

        let start_time = Instant::now();
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let latency = start_time.elapsed();
                self.inner
                    .recorder
                    .record(ExchangeRecord::new(snapshot, None, latency));
                tracing::warn!(
                    error = %e,
                    timeout = e.is_timeout(),
                    latency_ms = latency.as_millis(),
                    "Request failed before a response was received"
                );
                return Err(Error::from_transport(e));
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let latency = start_time.elapsed();
                // Status and headers arrived; keep them with an empty body.
                self.inner.recorder.record(ExchangeRecord::new(
                    snapshot,
                    Some(RawResponse::new(status, headers, String::new())),
                    latency,
                ));
                tracing::warn!(
                    error = %e,
                    status = status.as_u16(),
                    timeout = e.is_timeout(),
                    latency_ms = latency.as_millis(),
                    "Failed to read response body"
                );
                return Err(Error::from_transport(e));
            }
        };
        let latency = start_time.elapsed();
        let response = RawResponse::new(status, headers, body);

        tracing::info!(
            status = response.status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        self.inner.recorder.record(ExchangeRecord::new(
            snapshot,
            Some(response.clone()),
            latency,
        ));

        if !response.is_success() {
            let status = response.status;
            if status.is_server_error() {
                tracing::warn!(
                    status = status.as_u16(),
                    response = %response.body,
                    "Server error"
                );
            } else {
                tracing::error!(
                    status = status.as_u16(),
                    response = %response.body,
                    "Unexpected status"
                );
            }
            return Err(Error::from_status(status, response.body));
        }

        tracing::debug!(response = %response.body, "Response OK");
        Ok(response)
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// Without an explicit credential provider the client uses
/// [`OAuthCredentials`] built from the client id and password.
///
/// # Examples
///
/// ```no_run
/// use mangopay::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), mangopay::Error> {
/// let client = ClientBuilder::new()
///     .base_url("https://api.mangopay.com")?
///     .client_id("my-client")
///     .client_password("my-api-key")
///     .timeout(Duration::from_secs(30))
///     .default_header("X-Tenant", "eu")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    api_version: String,
    client_id: Option<String>,
    client_password: Option<String>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    credentials: Option<Arc<dyn CredentialProvider>>,
    anonymous: bool,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` targeting the sandbox.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            client_id: None,
            client_password: None,
            default_headers: HeaderMap::new(),
            timeout: None,
            credentials: None,
            anonymous: false,
        }
    }

    /// Applies every setting from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn config(self, config: Config) -> Result<Self> {
        let timeout = config.effective_timeout();
        let mut builder = self
            .base_url(&config.base_url)?
            .api_version(config.api_version)
            .client_id(config.client_id)
            .client_password(config.client_password);
        builder.timeout = timeout;
        Ok(builder)
    }

    /// Sets the scheme and host all requests are sent to.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_password(mut self, client_password: impl Into<String>) -> Self {
        self.client_password = Some(client_password.into());
        self
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// Per-call headers from [`RequestContext`] take precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the connect and request timeout. `Duration::ZERO` keeps the
    /// transport default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Uses `provider` to authenticate every request.
    pub fn credentials(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.credentials = Some(Arc::new(provider));
        self.anonymous = false;
        self
    }

    /// Authenticates with a pre-obtained bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value.
    pub fn bearer_token(self, token: impl AsRef<str>) -> Result<Self> {
        Ok(self.credentials(StaticToken::bearer(token)?))
    }

    /// Sends requests without any authentication header.
    pub fn without_authentication(mut self) -> Self {
        self.credentials = None;
        self.anonymous = true;
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no client id was provided, if no credentials are
    /// available, or if the HTTP client cannot be built.
    pub fn build(self) -> Result<Client> {
        let client_id = self
            .client_id
            .ok_or_else(|| Error::ConfigurationError("Client id is required".to_string()))?;
        let base_url = match &self.base_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => SANDBOX_BASE_URL.to_string(),
        };

        let credentials = match (self.credentials, self.anonymous) {
            (Some(provider), _) => Some(provider),
            (None, true) => None,
            (None, false) => {
                let password = self.client_password.ok_or_else(|| {
                    Error::ConfigurationError(
                        "Client password or a credential provider is required".to_string(),
                    )
                })?;
                let config = Config {
                    client_id: client_id.clone(),
                    client_password: password,
                    base_url: base_url.clone(),
                    api_version: self.api_version.clone(),
                    timeout: self.timeout.unwrap_or(Duration::ZERO),
                };
                let provider: Arc<dyn CredentialProvider> =
                    Arc::new(OAuthCredentials::from_config(&config)?);
                Some(provider)
            }
        };

        let mut http_client = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http_client = http_client.connect_timeout(timeout).timeout(timeout);
        }
        let http_client = http_client.build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                root: ApiRoot::new(base_url, self.api_version, client_id),
                default_headers: self.default_headers,
                credentials,
                recorder: ExchangeRecorder::new(),
            }),
        })
    }

    /// Builds a [`BlockingClient`](crate::BlockingClient) with the same settings.
    ///
    /// # Errors
    ///
    /// As [`ClientBuilder::build`], or if the runtime cannot be created.
    pub fn build_blocking(self) -> Result<crate::BlockingClient> {
        crate::BlockingClient::new(self.build()?)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
