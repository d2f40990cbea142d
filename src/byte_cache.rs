// src/byte_cache.rs

use bytes::Bytes;
use log::debug;
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Source of video contents for the render pass.
pub trait VideoLoader: Send + Sync {
    /// Returns the full contents of the file at `path`.
    fn get_or_load(&self, path: &Path) -> io::Result<Bytes>;
}

/// Memoizes file contents by path.
///
/// Entries are never refreshed: once a path is loaded, later edits to the
/// file are not seen until the process restarts.
/// Failed reads are not cached.
#[derive(Debug, Default)]
pub struct CachedLoader {
    entries: Mutex<HashMap<PathBuf, Bytes>>,
}

impl CachedLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached files.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub fn invalidate_all(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Bytes>> {
        // A poisoned map still holds complete entries; keep using it.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl VideoLoader for CachedLoader {
    fn get_or_load(&self, path: &Path) -> io::Result<Bytes> {
        if let Some(content) = self.lock().get(path) {
            debug!("Cache hit for '{}'", path.display());
            return Ok(content.clone());
        }

        // Read without holding the lock. Two first accesses may both read the
        // file; the first insert is kept and both results are identical.
        debug!("Cache miss for '{}', reading from disk", path.display());
        let content = Bytes::from(fs::read(path)?);
        self.lock()
            .entry(path.to_path_buf())
            .or_insert_with(|| content.clone());
        Ok(content)
    }
}
