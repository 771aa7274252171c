//! Mapping of successful responses onto typed results.
//!
//! [`RawResponse`] keeps the status, headers and body exactly as received so
//! they can be recorded for diagnostics and reported in errors. The mapping
//! functions turn a successful one into either a single object or a
//! [`ListResult`].

use crate::pagination::{read_pagination_headers, ListResult};
use crate::{Error, Result};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// A response as received from the server.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The raw response body as a string.
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Returns a header value by name, if present and valid ASCII.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mangopay::response::RawResponse;
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = RawResponse::new(StatusCode::OK, headers, "{}");
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Returns `true` for 200 and 204, the only statuses the API answers a
    /// successful call with. Any other code, 2xx included, is a failure.
    pub fn is_success(&self) -> bool {
        matches!(self.status, StatusCode::OK | StatusCode::NO_CONTENT)
    }
}

/// Deserializes a single object. A 204 yields `T::default()`.
///
/// # Errors
///
/// Returns [`Error::DeserializationFailed`] when the body does not match `T`.
pub fn map_object<T>(response: &RawResponse) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if response.status == StatusCode::NO_CONTENT {
        return Ok(T::default());
    }
    deserialize(response)
}

/// Deserializes a JSON array into a [`ListResult`].
///
/// Pagination metadata is read from the headers only for a 200; a 204 yields
/// an empty list with default metadata.
///
/// # Errors
///
/// Returns [`Error::DeserializationFailed`] for a body that is not an array of
/// `T`, or [`Error::InvalidPaginationHeader`] for a non-numeric count header.
pub fn map_list<T>(response: &RawResponse) -> Result<ListResult<T>>
where
    T: DeserializeOwned,
{
    if response.status == StatusCode::NO_CONTENT {
        return Ok(ListResult::default());
    }

    let items: Vec<T> = deserialize(response)?;
    let mut list = ListResult::new(items);

    if response.status == StatusCode::OK {
        read_pagination_headers(&response.headers, &mut list.pagination)?;
    }

    Ok(list)
}

fn deserialize<T>(response: &RawResponse) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(&response.body).map_err(|e| {
        tracing::error!(
            error = %e,
            raw_response = %response.body,
            "Failed to deserialize response"
        );
        Error::DeserializationFailed {
            raw_response: response.body.clone(),
            serde_error: e.to_string(),
            status: response.status,
        }
    })
}
