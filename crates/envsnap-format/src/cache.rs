//! Process-wide memoizing cache for formatter objects.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::debug;

use crate::formatter::DateFormatter;

/// Key separator between pattern and locale. `'\u{1f}'` (ASCII unit
/// separator) cannot appear in a locale identifier, so distinct
/// (pattern, locale) pairs never produce colliding keys.
const KEY_SEPARATOR: char = '\u{1f}';

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Arc<DateFormatter>>,
    hits: usize,
    misses: usize,
}

/// Memoizing store for [`DateFormatter`] instances keyed by
/// (pattern, locale).
///
/// The lookup and, on a miss, the construction both happen inside one
/// critical section, so concurrent first-accesses for a key resolve to a
/// single construction and every caller holds the same instance.
///
/// Entries are never evicted: an application uses a small, bounded set of
/// distinct format patterns, so the cache grows once and then stays flat
/// for the process lifetime. That trade-off is deliberate; do not put
/// unbounded user input into the key.
#[derive(Debug, Default)]
pub struct FormatterCache {
    inner: Mutex<Inner>,
}

impl FormatterCache {
    /// Create an independent, empty cache.
    ///
    /// Production code normally goes through [`FormatterCache::global`];
    /// independent instances keep tests from sharing process-wide state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared cache.
    pub fn global() -> &'static FormatterCache {
        static GLOBAL: Lazy<FormatterCache> = Lazy::new(FormatterCache::new);
        &GLOBAL
    }

    /// Returns the cached formatter for `(pattern, locale)`, constructing
    /// and inserting it on first access.
    ///
    /// Total: a bad pattern or locale degrades inside the formatter (see
    /// [`DateFormatter`]) rather than failing here. The returned instance
    /// is safe for concurrent formatting from any number of threads.
    pub fn cached(&self, pattern: &str, locale: &str) -> Arc<DateFormatter> {
        let key = format!("{pattern}{KEY_SEPARATOR}{locale}");

        let mut inner = self.inner.lock();
        if inner.entries.contains_key(&key) {
            inner.hits += 1;
            return Arc::clone(&inner.entries[&key]);
        }

        inner.misses += 1;
        debug!(pattern, locale, "constructing date formatter");
        let formatter = Arc::new(DateFormatter::lenient(pattern, locale));
        inner.entries.insert(key, Arc::clone(&formatter));
        formatter
    }

    /// Return cache usage statistics.
    pub fn statistics(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.entries.len(),
        }
    }
}
