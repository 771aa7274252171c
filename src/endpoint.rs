//! Endpoint descriptors for remote operations.
//!
//! An [`Endpoint`] is static configuration: an HTTP method, a path template
//! relative to `/{api_version}` and whether the client id is inserted as the
//! first path segment. Templates use positional placeholders `{0}`, `{1}`, ...

use crate::{Error, Result};
use http::Method;
use url::Url;

/// Describes one remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    template: &'static str,
    include_client_id: bool,
}

impl Endpoint {
    /// An endpoint scoped under the client id (`/{version}/{client_id}{template}`).
    pub const fn new(method: Method, template: &'static str) -> Self {
        Self {
            method,
            template,
            include_client_id: true,
        }
    }

    /// An endpoint addressed without the client id segment.
    pub const fn unscoped(method: Method, template: &'static str) -> Self {
        Self {
            method,
            template,
            include_client_id: false,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn include_client_id(&self) -> bool {
        self.include_client_id
    }

    /// Substitutes `{0}`, `{1}`, ... with `args`, each encoded as a single
    /// path segment.
    ///
    /// The template is scanned once from left to right, so placeholder-like
    /// text inside an argument is never substituted again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] when a placeholder is left unresolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use mangopay::endpoint::CLIENT_WALLET_TRANSACTIONS;
    ///
    /// let path = CLIENT_WALLET_TRANSACTIONS.resolve(&["FEES", "EUR"]).unwrap();
    /// assert_eq!(path, "/clients/wallets/FEES/EUR/transactions");
    /// assert!(CLIENT_WALLET_TRANSACTIONS.resolve(&["FEES"]).is_err());
    /// ```
    pub fn resolve(&self, args: &[&str]) -> Result<String> {
        let mut path = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| self.unresolved(args))?;
            let arg = after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .ok_or_else(|| self.unresolved(args))?;
            path.push_str(&encode_segment(arg)?);
            rest = &after[close + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }

    fn unresolved(&self, args: &[&str]) -> Error {
        Error::ConfigurationError(format!(
            "Unresolved placeholder in endpoint {} {} (got {} argument(s))",
            self.method,
            self.template,
            args.len()
        ))
    }
}

/// Percent-encodes `arg` so that it stays one path segment.
fn encode_segment(arg: &str) -> Result<String> {
    let mut url = Url::parse("http://segment.invalid/")?;
    url.path_segments_mut()
        .map_err(|_| Error::ConfigurationError("Cannot encode path segment".to_string()))?
        .pop_if_empty()
        .push(arg);
    Ok(url.path()[1..].to_string())
}

/// `POST /oauth/token`, used by the client-credentials provider.
pub static AUTHENTICATION_OAUTH: Endpoint = Endpoint::unscoped(Method::POST, "/oauth/token");

pub static CLIENT_GET: Endpoint = Endpoint::new(Method::GET, "/clients");
pub static CLIENT_SAVE: Endpoint = Endpoint::new(Method::PUT, "/clients");
pub static CLIENT_UPLOAD_LOGO: Endpoint = Endpoint::new(Method::PUT, "/clients/logo");
pub static CLIENT_WALLETS_DEFAULT: Endpoint = Endpoint::new(Method::GET, "/clients/wallets");
pub static CLIENT_WALLETS_FEES: Endpoint = Endpoint::new(Method::GET, "/clients/wallets/fees");
pub static CLIENT_WALLETS_CREDIT: Endpoint = Endpoint::new(Method::GET, "/clients/wallets/credit");
pub static CLIENT_WALLET_DEFAULT_WITH_CURRENCY: Endpoint =
    Endpoint::new(Method::GET, "/clients/wallets/{0}");
pub static CLIENT_WALLET_FEES_WITH_CURRENCY: Endpoint =
    Endpoint::new(Method::GET, "/clients/wallets/fees/{0}");
pub static CLIENT_WALLET_CREDIT_WITH_CURRENCY: Endpoint =
    Endpoint::new(Method::GET, "/clients/wallets/credit/{0}");
pub static CLIENT_TRANSACTIONS: Endpoint = Endpoint::new(Method::GET, "/clients/transactions");
pub static CLIENT_WALLET_TRANSACTIONS: Endpoint =
    Endpoint::new(Method::GET, "/clients/wallets/{0}/{1}/transactions");
pub static CLIENT_KYC_DOCUMENTS: Endpoint = Endpoint::new(Method::GET, "/KYC/documents");
pub static CLIENT_CREATE_BANKWIRE_DIRECT: Endpoint =
    Endpoint::new(Method::POST, "/clients/payins/bankwire/direct");
