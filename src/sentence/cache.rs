/*!
 * Corpus caching functionality.
 *
 * Segmented sentence lists are cached per subtitle file so repeat requests
 * skip ingestion, cleaning and segmentation. Entries expire after a
 * time-to-live; a background sweep evicts them, and reads treat an expired
 * entry as a miss even before the sweep runs.
 */

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use parking_lot::RwLock;
use log::debug;
use tokio::task::JoinHandle;

use crate::app_config::CacheConfig;

/// Prefix of every corpus cache key
pub const CACHE_KEY_PREFIX: &str = "sentences:";

/// Upper bound applied to any time-to-live
const MAX_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// Cache key for the sentence list of a subtitle file, shared by every tier
pub fn corpus_cache_key<P: AsRef<Path>>(path: P) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, path.as_ref().display())
}

/// Key-value store for segmented corpora
pub trait CorpusStore: Send + Sync {
    /// Get the sentences stored under `key`, if present and not expired
    fn get(&self, key: &str) -> Option<Arc<Vec<String>>>;

    /// Store sentences under `key` with the default time-to-live
    fn set(&self, key: &str, sentences: Arc<Vec<String>>);
}

/// Cached sentence list with its expiry
#[derive(Debug, Clone)]
struct CacheEntry {
    sentences: Arc<Vec<String>>,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory corpus cache with time-to-live expiry
pub struct CorpusCache {
    /// Internal cache storage
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Default time-to-live of new entries
    ttl: Duration,

    /// Interval of the background eviction sweep
    check_period: Duration,

    /// Whether caching is enabled
    enabled: bool,
}

impl CorpusCache {
    /// Create a cache from configuration
    pub fn new(config: &CacheConfig) -> Self {
        let mut cache = Self::with_ttl(
            Duration::from_secs(config.ttl_secs),
            Duration::from_secs(config.check_period_secs),
        );
        cache.enabled = config.enabled;
        cache
    }

    /// Create an enabled cache with explicit timings
    pub fn with_ttl(ttl: Duration, check_period: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            ttl,
            check_period,
            enabled: true,
        }
    }

    /// Get a sentence list from the cache
    pub fn get(&self, key: &str) -> Option<Arc<Vec<String>>> {
        if !self.enabled {
            return None;
        }

        let now = Instant::now();
        let found = self
            .entries
            .read()
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.sentences.clone());

        match found {
            Some(sentences) => {
                *self.hits.write() += 1;
                debug!("Cache hit for '{}' ({} sentences)", key, sentences.len());
                Some(sentences)
            }
            None => {
                *self.misses.write() += 1;
                debug!("Cache miss for '{}'", key);
                None
            }
        }
    }

    /// Store a sentence list with the default time-to-live
    pub fn set(&self, key: &str, sentences: Arc<Vec<String>>) {
        self.set_with_ttl(key, sentences, self.ttl);
    }

    /// Store a sentence list, replacing any previous entry for the key
    pub fn set_with_ttl(&self, key: &str, sentences: Arc<Vec<String>>, ttl: Duration) {
        if !self.enabled {
            return;
        }

        debug!("Cached {} sentences for '{}' (ttl {:?})", sentences.len(), key, ttl);
        let entry = CacheEntry {
            sentences,
            expires_at: Instant::now() + ttl.min(MAX_TTL),
        };
        self.entries.write().insert(key.to_string(), entry);
    }

    /// Remove expired entries, returning how many were evicted
    pub fn purge_expired(&self) -> usize {
        purge_expired_entries(&self.entries)
    }

    /// Spawn the periodic eviction sweep on the current tokio runtime.
    ///
    /// The task holds only a weak reference and ends once every clone of
    /// this cache has been dropped.
    pub fn start_sweeper(&self) -> JoinHandle<()> {
        let entries = Arc::downgrade(&self.entries);
        let period = self.check_period.max(Duration::from_millis(1));

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                let Some(entries) = entries.upgrade() else {
                    debug!("Corpus cache dropped, stopping sweeper");
                    break;
                };
                purge_expired_entries(&entries);
            }
        })
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Number of stored entries, including expired ones not yet swept
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn check_period(&self) -> Duration {
        self.check_period
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

fn purge_expired_entries(entries: &RwLock<HashMap<String, CacheEntry>>) -> usize {
    let now = Instant::now();
    let mut entries = entries.write();
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_expired(now));
    let evicted = before - entries.len();

    if evicted > 0 {
        debug!("Evicted {} expired corpus entries", evicted);
    }
    evicted
}

impl CorpusStore for CorpusCache {
    fn get(&self, key: &str) -> Option<Arc<Vec<String>>> {
        CorpusCache::get(self, key)
    }

    fn set(&self, key: &str, sentences: Arc<Vec<String>>) {
        CorpusCache::set(self, key, sentences)
    }
}

impl Default for CorpusCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl Clone for CorpusCache {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            ttl: self.ttl,
            check_period: self.check_period,
            enabled: self.enabled,
        }
    }
}
