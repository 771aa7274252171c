//! Per-call request options.

use http::{HeaderMap, HeaderName, HeaderValue};

/// Options for an individual API call.
///
/// Carries the idempotency key, custom headers and query parameters. Custom
/// headers are layered over the client's own headers, so a caller-supplied
/// header wins on a name collision. Setting the same header or query
/// parameter twice keeps the last value.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Key sent in the `Idempotency-Key` header when non-blank.
    pub idempotency_key: Option<String>,

    /// Additional headers for this request.
    pub headers: HeaderMap,

    /// Query parameters, appended after pagination in insertion order.
    pub query_params: Vec<(String, String)>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the idempotency key for a mutating call.
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter, replacing an earlier value under the same name.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.query_params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.query_params.push((key, value)),
        }
        self
    }

    /// Adds multiple query parameters, typically a filter's flat key/value form.
    pub fn with_query_params(
        mut self,
        params: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        for (key, value) in params {
            self = self.with_query_param(key, value);
        }
        self
    }

    /// Adds the `Sort` query parameter.
    pub fn with_sort(self, sort: &Sort) -> Self {
        match sort.to_query_value() {
            Some(value) => self.with_query_param("Sort", value),
            None => self,
        }
    }

    /// The idempotency key, if set and not blank.
    pub fn effective_idempotency_key(&self) -> Option<&str> {
        self.idempotency_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Direction of a sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort order for collection endpoints, sent as `Sort=Field:direction`.
///
/// ```
/// use mangopay::metadata::{Sort, SortDirection};
///
/// let sort = Sort::by("CreationDate", SortDirection::Desc);
/// assert_eq!(sort.to_query_value().as_deref(), Some("CreationDate:desc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sort {
    fields: Vec<(String, SortDirection)>,
}

impl Sort {
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self::default().then_by(field, direction)
    }

    pub fn then_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.fields.push((field.into(), direction));
        self
    }

    /// The query value, or `None` when no field was added.
    pub fn to_query_value(&self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, direction)| format!("{}:{}", field, direction.as_str()))
            .collect();
        Some(parts.join(","))
    }
}
