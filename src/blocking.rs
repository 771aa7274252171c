//! Blocking facade over [`Client`].
//!
//! Each call drives the asynchronous implementation to completion on a
//! runtime owned by the facade, so the blocking and asynchronous surfaces
//! share request building, classification, mapping and telemetry. Do not
//! call these methods from inside an asynchronous context.

use crate::{
    endpoint::Endpoint,
    metadata::RequestContext,
    pagination::{ListResult, Pagination},
    telemetry::ExchangeRecord,
    Client, Error, Result,
};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;

/// A client whose calls block the current thread until the exchange completes.
///
/// # Examples
///
/// ```no_run
/// use mangopay::{BlockingClient, Config};
///
/// # fn example() -> Result<(), mangopay::Error> {
/// let client = BlockingClient::from_config(Config::from_env()?)?;
/// let me = client.block_on(client.client().clients().get())?;
/// println!("Client: {:?}", me.name);
/// # Ok(())
/// # }
/// ```
pub struct BlockingClient {
    client: Client,
    runtime: tokio::runtime::Runtime,
}

impl BlockingClient {
    /// Wraps an existing client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if the runtime cannot be created.
    pub fn new(client: Client) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::ConfigurationError(format!("Failed to build runtime: {}", e)))?;
        Ok(Self { client, runtime })
    }

    /// Creates a blocking client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: crate::Config) -> Result<Self> {
        Self::new(Client::new(config)?)
    }

    /// The asynchronous client this facade drives.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Runs any future produced by the wrapped client to completion.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Blocking form of [`Client::request`].
    pub fn request<Req, Res>(
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
        self.block_on(
            self.client
                .request(endpoint, path_args, entity, context, pagination),
        )
    }

    /// Blocking form of [`Client::request_list`].
    pub fn request_list<T>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        context: &RequestContext,
        pagination: Option<&Pagination>,
    ) -> Result<ListResult<T>>
    where
        T: DeserializeOwned,
    {
        self.block_on(
            self.client
                .request_list(endpoint, path_args, context, pagination),
        )
    }

    /// Blocking form of [`Client::get_object`].
    pub fn get_object<T>(&self, endpoint: &Endpoint, path_args: &[&str]) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.block_on(self.client.get_object(endpoint, path_args))
    }

    /// Blocking form of [`Client::get_list`].
    pub fn get_list<T>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        pagination: Option<&Pagination>,
        context: &RequestContext,
    ) -> Result<ListResult<T>>
    where
        T: DeserializeOwned,
    {
        self.block_on(
            self.client
                .get_list(endpoint, path_args, pagination, context),
        )
    }

    /// Blocking form of [`Client::create_object`].
    pub fn create_object<Req, Res>(
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
        self.block_on(
            self.client
                .create_object(endpoint, path_args, entity, idempotency_key),
        )
    }

    /// Blocking form of [`Client::update_object`].
    pub fn update_object<Req, Res>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        entity: &Req,
    ) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned + Default,
    {
        self.block_on(self.client.update_object(endpoint, path_args, entity))
    }

    /// See [`Client::last_exchange`].
    pub fn last_exchange(&self) -> Option<ExchangeRecord> {
        self.client.last_exchange()
    }
}
