//! Shared data-fetch client.
//!
//! A reqwest-backed JSON client with a per-path response cache. Cached
//! results stay fresh for a fixed window, and identical concurrent
//! requests are serialized per path so only one network fetch is in
//! flight for a given key at a time.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Default API base URL.
const DEFAULT_API_URL: &str = "http://127.0.0.1:3030";

/// How long a cached result is considered fresh after retrieval.
pub const STALE_AFTER: Duration = Duration::from_secs(60);

/// Request timeout. Failures are terminal; callers re-request on user
/// action, never automatically.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch error types.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

struct CacheEntry {
    value: serde_json::Value,
    fetched_at: Instant,
}

#[derive(Default)]
struct Slot {
    entry: tokio::sync::Mutex<Option<CacheEntry>>,
}

/// Query-execution client with an internal request cache.
///
/// Constructed by the client registry (`context::get_context`); screens
/// receive a shared handle and never build their own instance.
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
    stale_after: Duration,
    token: Option<String>,
    slots: Mutex<HashMap<String, Arc<Slot>>>,
}

impl FetchClient {
    /// Create a client against the configured API base URL.
    ///
    /// Uses the `SPROUT_API_URL` environment variable if set, otherwise
    /// defaults to the local server. `SPROUT_TOKEN`, when present, becomes
    /// the bearer token for authenticated calls.
    pub fn new() -> Self {
        let base_url =
            std::env::var("SPROUT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut client = Self::with_base_url(&base_url);
        client.token = std::env::var("SPROUT_TOKEN").ok();
        client
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            stale_after: STALE_AFTER,
            token: None,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch a JSON resource, serving it from cache while fresh.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let slot = {
            let mut slots = self.slots.lock().unwrap();
            Arc::clone(slots.entry(path.to_string()).or_default())
        };

        // Followers of an in-flight identical request queue here and then
        // observe the freshly cached result.
        let mut entry = slot.entry.lock().await;
        if let Some(cached) = entry.as_ref() {
            if cached.fetched_at.elapsed() < self.stale_after {
                tracing::trace!(path = path, "cache hit");
                return Ok(serde_json::from_value(cached.value.clone())?);
            }
        }

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "fetching");
        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let value: serde_json::Value = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        *entry = Some(CacheEntry {
            value: value.clone(),
            fetched_at: Instant::now(),
        });
        Ok(serde_json::from_value(value)?)
    }

    /// Drop every cached entry. The next fetch per path goes to the network.
    pub fn invalidate_all(&self) {
        self.slots.lock().unwrap().clear();
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}
