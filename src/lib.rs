//! # mangopay - A typed client for the MangoPay payment API
//!
//! Builds authenticated HTTP requests from endpoint descriptors, executes
//! them asynchronously or blocking, maps JSON responses onto typed records and
//! paginated lists, and keeps the last request/response pair with the
//! server's rate-limit counters for diagnostics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mangopay::{Client, Config, Pagination};
//! use mangopay::entities::{CurrencyIso, FundsType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mangopay::Error> {
//!     // Reads MANGOPAY_CLIENT_ID, MANGOPAY_CLIENT_PASSWORD, ... (and .env)
//!     let client = Client::new(Config::from_env()?)?;
//!
//!     let me = client.clients().get().await?;
//!     println!("Client: {:?}", me.name);
//!
//!     let page = Pagination::new(1, 20)?;
//!     let wallets = client.clients().wallets(FundsType::Fees, Some(&page)).await?;
//!     for wallet in wallets.iter() {
//!         println!("{:?}: {}", wallet.id, wallet.balance.amount);
//!     }
//!     println!("Next page: {:?}", wallets.pagination.links.next());
//!
//!     let credit = client
//!         .clients()
//!         .wallet(FundsType::Credit, CurrencyIso::Eur)
//!         .await?;
//!     println!("Credit wallet: {:?}", credit.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Failing statuses keep the raw body:
//!
//! ```no_run
//! use mangopay::{Client, Error};
//!
//! # async fn example(client: Client) -> Result<(), Error> {
//! match client.clients().get().await {
//!     Ok(me) => println!("Client: {:?}", me.name),
//!     Err(Error::Authentication { body }) => eprintln!("Rejected credentials: {}", body),
//!     Err(Error::Response { status, body }) => eprintln!("HTTP {}: {}", status, body),
//!     Err(Error::Timeout(msg)) => eprintln!("Timed out: {}", msg),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//!
//! if let Some(exchange) = client.last_exchange() {
//!     eprintln!("{} {} took {:?}", exchange.request.method, exchange.request.url, exchange.latency);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking calls
//!
//! [`BlockingClient`] runs the same calls to completion on the current thread:
//!
//! ```no_run
//! use mangopay::{BlockingClient, Config};
//!
//! # fn example() -> Result<(), mangopay::Error> {
//! let client = BlockingClient::from_config(Config::from_env()?)?;
//! let me = client.block_on(client.client().clients().get())?;
//! # Ok(())
//! # }
//! ```

pub mod apis;
mod blocking;
mod client;
pub mod config;
pub mod credentials;
pub mod endpoint;
pub mod entities;
mod error;
pub mod link;
pub mod metadata;
pub mod pagination;
pub mod request;
pub mod response;
pub mod telemetry;

pub use blocking::BlockingClient;
pub use client::{Client, ClientBuilder};
pub use config::Config;
pub use error::{Error, Result};
pub use link::{parse_link_header, LinkRelation, PaginationLinks};
pub use metadata::{RequestContext, Sort, SortDirection};
pub use pagination::{ListResult, Pagination, PaginationResult};
pub use telemetry::{ExchangeRecord, RateLimitInfo};
