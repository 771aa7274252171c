//! Pagination request parameters and paginated collection results.

use crate::link::{parse_link_header, PaginationLinks};
use crate::{Error, Result};
use http::HeaderMap;

/// Header carrying the total number of pages of a collection.
pub const NUMBER_OF_PAGES_HEADER: &str = "x-number-of-pages";
/// Header carrying the total number of items of a collection.
pub const NUMBER_OF_ITEMS_HEADER: &str = "x-number-of-items";
/// Header carrying the first/previous/next/last links.
pub const LINK_HEADER: &str = "link";

/// Which page of a collection to request.
///
/// Sent as the `page` and `per_page` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    /// Creates a pagination request. Both values are 1-based and must be positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] when either value is zero.
    pub fn new(page: u32, per_page: u32) -> Result<Self> {
        if page == 0 || per_page == 0 {
            return Err(Error::ConfigurationError(format!(
                "Pagination values must be positive (page={}, per_page={})",
                page, per_page
            )));
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// The same page size, one page further.
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            per_page: self.per_page,
        }
    }
}

impl Default for Pagination {
    /// First page with the API's default page size of 10.
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

/// Pagination metadata read from the headers of a collection response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationResult {
    /// Value of `X-Number-Of-Pages`, or 0 when absent.
    pub total_pages: u64,
    /// Value of `X-Number-Of-Items`, or 0 when absent.
    pub total_items: u64,
    /// Links parsed from the `Link` header.
    pub links: PaginationLinks,
}

/// An ordered page of `T` together with its pagination metadata.
///
/// Items keep the order the server returned them in. The metadata stays at
/// its defaults unless the response was a 200 carrying pagination headers.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub pagination: PaginationResult,
}

impl<T> ListResult<T> {
    /// Wraps `items` with empty pagination metadata.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            pagination: PaginationResult::default(),
        }
    }

    /// Returns `true` when the server advertised a next page.
    pub fn has_next(&self) -> bool {
        self.pagination.links.next().is_some()
    }
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> std::ops::Deref for ListResult<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for ListResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Populates `result` from collection response headers.
///
/// Header names are matched case-insensitively by substring, and the first
/// matching header of each family wins. Link slots that the `Link` header
/// does not mention keep their current value.
///
/// # Errors
///
/// Returns [`Error::InvalidPaginationHeader`] when a page or item count is not
/// a base-10 non-negative integer.
///
/// # Examples
///
/// ```
/// use http::HeaderMap;
/// use mangopay::pagination::{read_pagination_headers, PaginationResult};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-number-of-pages", "5".parse().unwrap());
/// headers.insert("x-number-of-items", "42".parse().unwrap());
///
/// let mut result = PaginationResult::default();
/// read_pagination_headers(&headers, &mut result).unwrap();
/// assert_eq!(result.total_pages, 5);
/// assert_eq!(result.total_items, 42);
/// ```
pub fn read_pagination_headers(headers: &HeaderMap, result: &mut PaginationResult) -> Result<()> {
    let mut pages_seen = false;
    let mut items_seen = false;
    let mut link_seen = false;

    for (name, value) in headers {
        let lowered = name.as_str().to_ascii_lowercase();

        if lowered.contains(NUMBER_OF_PAGES_HEADER) {
            if !pages_seen {
                result.total_pages = parse_count(name.as_str(), value)?;
                pages_seen = true;
            }
            continue;
        }

        if lowered.contains(NUMBER_OF_ITEMS_HEADER) {
            if !items_seen {
                result.total_items = parse_count(name.as_str(), value)?;
                items_seen = true;
            }
            continue;
        }

        if lowered.contains(LINK_HEADER) && !link_seen {
            link_seen = true;
            match value.to_str() {
                Ok(raw) => result.links.merge(parse_link_header(raw)),
                Err(_) => tracing::warn!(header = %name, "Ignoring non-ASCII link header"),
            }
        }
    }

    Ok(())
}

fn parse_count(name: &str, value: &http::HeaderValue) -> Result<u64> {
    let invalid = || Error::InvalidPaginationHeader {
        name: name.to_string(),
        value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
    };
    let raw = value.to_str().map_err(|_| invalid())?;
    raw.trim().parse::<u64>().map_err(|_| invalid())
}
