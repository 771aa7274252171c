//! Last-exchange telemetry and rate-limit counters.
//!
//! Every exchange performed by a [`Client`](crate::Client) overwrites a single
//! [`ExchangeRecord`] slot shared by all clones of that client, whether the
//! call succeeded or failed. It is a diagnostic side channel, not a history:
//! concurrent calls race on the slot and the last writer wins. Callers that
//! need per-call telemetry must not issue concurrent calls through the same
//! client while relying on it.

use crate::request::RequestSnapshot;
use crate::response::RawResponse;
use http::HeaderMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const RATE_LIMIT_LIMIT_HEADER: &str = "X-RateLimit-Limit";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "X-RateLimit-Remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";

/// Raw rate-limit counters reported by the server.
///
/// The API may report several windows in one header as a comma-separated
/// list; the raw values are kept as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Value of `X-RateLimit-Limit`.
    pub limit: Option<String>,

    /// Value of `X-RateLimit-Remaining`.
    pub remaining: Option<String>,

    /// Value of `X-RateLimit-Reset` (Unix timestamp).
    pub reset: Option<String>,
}

impl RateLimitInfo {
    /// Reads the three rate-limit headers by exact name.
    ///
    /// # Examples
    ///
    /// ```
    /// use mangopay::telemetry::RateLimitInfo;
    /// use http::HeaderMap;
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.insert("x-ratelimit-remaining", "2294".parse().unwrap());
    ///
    /// let info = RateLimitInfo::from_headers(&headers);
    /// assert_eq!(info.remaining.as_deref(), Some("2294"));
    /// assert_eq!(info.limit, None);
    /// ```
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        };

        Self {
            limit: read(RATE_LIMIT_LIMIT_HEADER),
            remaining: read(RATE_LIMIT_REMAINING_HEADER),
            reset: read(RATE_LIMIT_RESET_HEADER),
        }
    }

    /// Calls allowed in the first reported window.
    pub fn calls_allowed(&self) -> Option<u64> {
        first_number(self.limit.as_deref())
    }

    /// Calls remaining in the first reported window.
    pub fn remaining_calls(&self) -> Option<u64> {
        first_number(self.remaining.as_deref())
    }

    /// When the first reported window resets.
    pub fn reset_at(&self) -> Option<SystemTime> {
        first_number(self.reset.as_deref()).map(|secs| UNIX_EPOCH + Duration::from_secs(secs))
    }

    /// Returns `true` if the server reported no calls left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_calls() == Some(0)
    }
}

fn first_number(raw: Option<&str>) -> Option<u64> {
    raw?.split(',').next()?.trim().parse().ok()
}

/// The most recent request/response pair.
#[derive(Debug, Clone)]
pub struct ExchangeRecord {
    pub request: RequestSnapshot,

    /// `None` when the transport failed before any response arrived.
    pub response: Option<RawResponse>,

    pub rate_limit: RateLimitInfo,

    /// Time from sending the request to reading the full body.
    pub latency: Duration,
}

impl ExchangeRecord {
    pub fn new(request: RequestSnapshot, response: Option<RawResponse>, latency: Duration) -> Self {
        let rate_limit = response
            .as_ref()
            .map(|r| RateLimitInfo::from_headers(&r.headers))
            .unwrap_or_default();

        Self {
            request,
            response,
            rate_limit,
            latency,
        }
    }
}

/// Single-slot holder of the latest [`ExchangeRecord`].
#[derive(Debug, Clone, Default)]
pub struct ExchangeRecorder {
    slot: Arc<RwLock<Option<ExchangeRecord>>>,
}

impl ExchangeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored record.
    pub fn record(&self, record: ExchangeRecord) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(record);
    }

    /// A copy of the stored record, if any exchange happened yet.
    pub fn last(&self) -> Option<ExchangeRecord> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
