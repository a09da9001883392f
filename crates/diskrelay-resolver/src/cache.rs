use crate::error::ResolverError;
use moka::future::Cache;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Type alias for cache results.
pub type Result<T> = std::result::Result<T, ResolverError>;

const DEFAULT_CAPACITY: u64 = 10_000;
const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// An in-memory response cache backed by Moka.
///
/// Entries are keyed by the full upstream request URL and hold the raw
/// response body. Every entry expires after a fixed time-to-live; expired
/// entries are evicted lazily on lookup.
#[derive(Debug, Clone)]
pub struct MokaResponseCache {
    cache: Cache<String, String>,
}

impl MokaResponseCache {
    /// Creates a cache with default settings: 10,000 entries, 60 second TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    /// Creates a cache with a custom capacity and time-to-live.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries the cache can hold
    /// * `ttl` - Freshness window for cached responses
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    /// Returns a builder for creating a custom cache configuration.
    pub fn builder() -> CacheConfigBuilder {
        CacheConfig::builder()
    }

    /// Returns the cached body for a request URL, if still fresh.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.cache.get(key).await {
            Some(body) => {
                debug!(key = %key, "response cache hit");
                Some(body)
            }
            None => {
                trace!(key = %key, "response cache miss");
                None
            }
        }
    }

    /// Stores a response body for a request URL.
    pub async fn insert(&self, key: &str, body: String) {
        trace!(key = %key, "storing response body");
        self.cache.insert(key.to_string(), body).await;
    }

    /// Returns the cached body, fetching it with `fetch` on a miss.
    ///
    /// Concurrent misses for the same key coalesce into a single fetch.
    /// An `Err` from the fetch is shared with all coalesced waiters and is
    /// never stored, so the next lookup fetches again.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        trace!(key = %key, "fetching response with single-flight");

        self.cache
            .try_get_with(key.to_string(), fetch())
            .await
            .map_err(|e| e.as_ref().clone())
    }
}

impl Default for MokaResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for creating a [`MokaResponseCache`] with custom settings.
#[derive(Debug, TypedBuilder)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold.
    #[builder(default = DEFAULT_CAPACITY)]
    max_capacity: u64,
    /// Time-to-live for cached responses.
    #[builder(default = DEFAULT_TTL)]
    ttl: Duration,
}

impl From<CacheConfig> for MokaResponseCache {
    fn from(config: CacheConfig) -> Self {
        Self::with_ttl(config.max_capacity, config.ttl)
    }
}
