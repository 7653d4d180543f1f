//! Shared query cache
//!
//! [`QueryClient`] stores the last result of every query under its
//! [`QueryKey`] and decides, on each read, whether the backend must be asked
//! again:
//!
//! - fresh (younger than the stale time, not invalidated): served from cache,
//!   no request;
//! - stale by age: served from cache immediately and refreshed by a
//!   background task (at most one per key);
//! - missing or invalidated: fetched before returning, with read retries.
//!
//! A failed fetch never touches the cached data; it only records the error.
//! Every write stamps the entry with a new version, and a fetch only stores
//! its result when the entry still carries the version it started from, so a
//! slow refresh can never overwrite data written after it began.
//! Entries nobody reads for the retention window are dropped by `moka`.
//!
//! Values are stored as JSON so one cache can hold every resource type.

use std::collections::HashSet;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use metrics::increment_counter;
use moka::future::Cache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::time::{Duration, Instant};

use crate::config::QueryConfig;
use crate::error::{CollabError, Result};

use super::{QueryKey, QueryState, RetryPolicy};

const MAX_ENTRIES: u64 = 10_000;

#[derive(Debug, Clone)]
struct CacheEntry {
    data: Option<Value>,
    error: Option<CollabError>,
    updated_at: Option<Instant>,
    invalidated: bool,
    version: u64,
}

impl CacheEntry {
    fn empty() -> Self {
        Self {
            data: None,
            error: None,
            updated_at: None,
            invalidated: false,
            version: 0,
        }
    }

    fn with_data(data: Value, version: u64) -> Self {
        Self {
            data: Some(data),
            error: None,
            updated_at: Some(Instant::now()),
            invalidated: false,
            version,
        }
    }
}

struct Inner {
    entries: Cache<QueryKey, CacheEntry>,
    in_flight: Mutex<HashSet<QueryKey>>,
    next_version: AtomicU64,
    stale_time: Duration,
    query_retry: RetryPolicy,
    mutation_retry: RetryPolicy,
}

/// Handle to the query cache; clones share the same entries
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("entries", &self.inner.entries.entry_count())
            .field("stale_time", &self.inner.stale_time)
            .finish()
    }
}

/// Removes a key from the in-flight set when the fetch ends, even on panic
struct InFlightGuard {
    inner: Arc<Inner>,
    key: QueryKey,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Ok(mut set) = self.inner.in_flight.lock() {
            set.remove(&self.key);
        }
    }
}

impl QueryClient {
    pub fn new(config: &QueryConfig) -> Self {
        let entries = Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_idle(config.gc_time())
            .build();

        Self {
            inner: Arc::new(Inner {
                entries,
                in_flight: Mutex::new(HashSet::new()),
                next_version: AtomicU64::new(1),
                stale_time: config.stale_time(),
                query_retry: RetryPolicy::for_queries(config),
                mutation_retry: RetryPolicy::for_mutations(config),
            }),
        }
    }

    /// Retry policy applied to mutations
    pub fn mutation_retry(&self) -> RetryPolicy {
        self.inner.mutation_retry
    }

    pub fn stale_time(&self) -> Duration {
        self.inner.stale_time
    }

    fn bump_version(&self) -> u64 {
        self.inner.next_version.fetch_add(1, Ordering::Relaxed)
    }

    async fn version_of(&self, key: &QueryKey) -> Option<u64> {
        self.inner.entries.get(key).await.map(|e| e.version)
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        match entry.updated_at {
            Some(at) => entry.invalidated || at.elapsed() >= self.inner.stale_time,
            None => true,
        }
    }

    fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.inner
            .in_flight
            .lock()
            .map(|set| set.contains(key))
            .unwrap_or(false)
    }

    /// Mark `key` in flight; `None` if another fetch already holds it
    fn begin_fetch(&self, key: &QueryKey) -> Option<InFlightGuard> {
        let mut set = self.inner.in_flight.lock().ok()?;
        if !set.insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard {
            inner: Arc::clone(&self.inner),
            key: key.clone(),
        })
    }

    /// Read `key`, fetching through `fetcher` when the cache cannot answer
    pub async fn fetch_query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let entry = self.inner.entries.get(&key).await;

        if let Some(entry) = entry.as_ref().filter(|e| !e.invalidated) {
            if let Some(data) = entry.data.clone().and_then(|v| decode_cached::<T>(&key, v)) {
                if !self.is_expired(entry) {
                    increment_counter!("query_cache_hits_total");
                    tracing::debug!(%key, "Query cache hit");
                    return QueryState {
                        data: Some(data),
                        is_fetching: self.is_in_flight(&key),
                        error: entry.error.clone(),
                        ..Default::default()
                    };
                }

                increment_counter!("query_cache_stale_reads_total");
                tracing::debug!(%key, "Serving stale data, refreshing in background");
                let refreshing = self.spawn_refetch(key.clone(), fetcher, entry.version);
                return QueryState {
                    data: Some(data),
                    is_fetching: refreshing || self.is_in_flight(&key),
                    is_stale: true,
                    error: entry.error.clone(),
                    ..Default::default()
                };
            }
        }

        increment_counter!("query_cache_misses_total");
        tracing::debug!(%key, "Query cache miss");
        self.fetch_and_store(&key, &fetcher).await
    }

    /// Drop freshness for `key` and fetch it again
    pub async fn refetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.mark_invalidated(&key).await;
        self.fetch_query(key, fetcher).await
    }

    /// Snapshot of `key` without any network activity
    pub async fn peek<T: DeserializeOwned>(&self, key: &QueryKey) -> QueryState<T> {
        let fetching = self.is_in_flight(key);
        match self.inner.entries.get(key).await {
            Some(entry) => {
                let data = entry.data.clone().and_then(|v| decode_cached::<T>(key, v));
                QueryState {
                    is_loading: data.is_none() && fetching,
                    is_fetching: fetching,
                    is_stale: self.is_expired(&entry),
                    error: entry.error.clone(),
                    data,
                }
            }
            None => QueryState {
                is_loading: fetching,
                is_fetching: fetching,
                ..Default::default()
            },
        }
    }

    async fn fetch_and_store<T, F, Fut>(&self, key: &QueryKey, fetcher: &F) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let _guard = self.begin_fetch(key);
        let started_from = self.version_of(key).await;
        self.store_fetch(key, fetcher, started_from).await
    }

    /// Run `fetcher` and store its outcome if the entry is still at `started_from`
    async fn store_fetch<T, F, Fut>(
        &self,
        key: &QueryKey,
        fetcher: &F,
        started_from: Option<u64>,
    ) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let label = key.to_string();
        let result = self.inner.query_retry.run(&label, fetcher).await;
        let previous = self.inner.entries.get(key).await;
        let unchanged = previous.as_ref().map(|e| e.version) == started_from;

        match result {
            Ok(data) if !unchanged => {
                tracing::debug!(%key, "Entry changed during fetch; discarding result");
                QueryState {
                    data: Some(data),
                    ..Default::default()
                }
            }
            Ok(data) => match serde_json::to_value(&data) {
                Ok(value) => {
                    let version = self.bump_version();
                    self.inner
                        .entries
                        .insert(key.clone(), CacheEntry::with_data(value, version))
                        .await;
                    QueryState {
                        data: Some(data),
                        ..Default::default()
                    }
                }
                Err(e) => {
                    tracing::warn!(%key, "Fetched data could not be cached: {}", e);
                    QueryState {
                        data: Some(data),
                        ..Default::default()
                    }
                }
            },
            Err(error) => {
                increment_counter!("query_fetch_errors_total");
                tracing::warn!(%key, "Query failed: {}", error);
                let mut entry = previous.unwrap_or_else(CacheEntry::empty);
                let data = entry.data.clone().and_then(|v| decode_cached::<T>(key, v));
                if unchanged {
                    entry.error = Some(error.clone());
                    self.inner.entries.insert(key.clone(), entry).await;
                }
                QueryState {
                    data,
                    error: Some(error),
                    ..Default::default()
                }
            }
        }
    }

    /// Start a background refresh unless one is already running
    fn spawn_refetch<T, F, Fut>(&self, key: QueryKey, fetcher: F, started_from: u64) -> bool
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let Some(guard) = self.begin_fetch(&key) else {
            return false;
        };
        let client = self.clone();
        tokio::spawn(async move {
            let _guard = guard;
            let _state: QueryState<T> = client
                .store_fetch(&key, &fetcher, Some(started_from))
                .await;
        });
        true
    }

    /// Cached data for `key`, regardless of freshness
    pub async fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entry = self.inner.entries.get(key).await?;
        entry.data.and_then(|v| decode_cached(key, v))
    }

    /// Raw cached JSON for `key`
    pub async fn get_raw(&self, key: &QueryKey) -> Option<Value> {
        self.inner.entries.get(key).await.and_then(|e| e.data)
    }

    /// Overwrite the cached value for `key`; the entry becomes fresh
    pub async fn set_query_data<T: Serialize>(&self, key: &QueryKey, data: &T) -> Result<()> {
        let value = serde_json::to_value(data)?;
        let version = self.bump_version();
        self.inner
            .entries
            .insert(key.clone(), CacheEntry::with_data(value, version))
            .await;
        Ok(())
    }

    async fn mark_invalidated(&self, key: &QueryKey) {
        if let Some(mut entry) = self.inner.entries.get(key).await {
            entry.invalidated = true;
            entry.version = self.bump_version();
            self.inner.entries.insert(key.clone(), entry).await;
        }
    }

    fn keys_with_prefix(&self, prefix: &QueryKey) -> Vec<QueryKey> {
        self.inner
            .entries
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| (*k).clone())
            .collect()
    }

    /// Mark every key under `prefix` so the next read fetches fresh data
    ///
    /// Cached data stays readable through [`QueryClient::get_query_data`]
    /// until the refetch succeeds.
    pub async fn invalidate_queries(&self, prefix: &QueryKey) {
        let keys = self.keys_with_prefix(prefix);
        tracing::debug!(%prefix, count = keys.len(), "Invalidating queries");
        for key in keys {
            self.mark_invalidated(&key).await;
        }
    }

    /// Drop every key under `prefix`
    pub async fn remove_queries(&self, prefix: &QueryKey) {
        for key in self.keys_with_prefix(prefix) {
            self.inner.entries.invalidate(&key).await;
        }
    }

    /// Drop everything
    pub async fn clear(&self) {
        self.inner.entries.invalidate_all();
        self.inner.entries.run_pending_tasks().await;
    }
}

fn decode_cached<T: DeserializeOwned>(key: &QueryKey, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!(%key, "Cached value has an unexpected shape: {}", e);
            None
        }
    }
}
