//! Typed wrappers over groups of endpoints.

pub mod clients;
pub mod filters;

pub use clients::ClientsApi;
pub use filters::{FilterKycDocuments, FilterTransactions};
