use std::{
    collections::HashMap,
    future::Future,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, Instant},
};

use fractic_server_error::ServerError;
use parking_lot::RwLock;
use tracing::debug;

struct CacheEntry<T> {
    records: Arc<Vec<T>>,
    loaded_at: Instant,
}

/// Loaded tables keyed by source path, each valid for `ttl` after loading.
///
/// Readers get immutable `Arc` snapshots. A reload builds a fresh table
/// outside the lock and swaps it in, so sessions holding the old snapshot
/// are unaffected. Failed loads are not cached.
pub(crate) struct TtlCache<T> {
    ttl: Duration,
    entries: RwLock<HashMap<PathBuf, CacheEntry<T>>>,
}

impl<T: Send + Sync> TtlCache<T> {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fresh entry for `path`, if any.
    pub(crate) fn get(&self, path: &Path) -> Option<Arc<Vec<T>>> {
        let entries = self.entries.read();
        let entry = entries.get(path)?;
        if entry.loaded_at.elapsed() < self.ttl {
            Some(Arc::clone(&entry.records))
        } else {
            None
        }
    }

    pub(crate) fn insert(&self, path: &Path, records: Vec<T>) -> Arc<Vec<T>> {
        let records = Arc::new(records);
        self.entries.write().insert(
            path.to_path_buf(),
            CacheEntry {
                records: Arc::clone(&records),
                loaded_at: Instant::now(),
            },
        );
        records
    }

    pub(crate) async fn get_or_load<F, Fut>(
        &self,
        path: &Path,
        load: F,
    ) -> Result<Arc<Vec<T>>, ServerError>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<Vec<T>, ServerError>> + Send,
    {
        if let Some(records) = self.get(path) {
            debug!(path = %path.display(), "load cache hit");
            return Ok(records);
        }
        debug!(path = %path.display(), "load cache miss or expired entry");
        let records = load().await?;
        Ok(self.insert(path, records))
    }

    pub(crate) fn invalidate(&self, path: &Path) {
        self.entries.write().remove(path);
    }

    pub(crate) fn clear(&self) {
        self.entries.write().clear();
    }
}
