use crate::adapters::outbound::time::SystemClock;
use crate::ports::outbound::{CacheStore, Clock};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Directory name used under the platform cache directory
const CACHE_DIR_NAME: &str = "eol-check";

/// File extension of cache entries; `clear()` only touches these
const ENTRY_EXTENSION: &str = "json";

/// On-disk layout of one entry
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    value: Value,
    expires_at: DateTime<Utc>,
}

/// FileTtlCache adapter: one JSON file per key under a cache root directory
///
/// Keys are percent-encoded into file names, so the mapping is deterministic
/// and distinct keys never share a file. Entries are written to a temporary
/// file in the same directory and renamed into place, so a concurrent reader
/// sees either the previous or the new complete entry. Expired entries are
/// left on disk and simply read as misses.
pub struct FileTtlCache<C: Clock = SystemClock> {
    root: PathBuf,
    clock: C,
}

impl FileTtlCache<SystemClock> {
    /// Creates a cache rooted at `root` using wall-clock time
    pub fn new(root: PathBuf) -> Self {
        Self::with_clock(root, SystemClock::new())
    }

    /// Per-user cache location: the platform cache dir (e.g.
    /// `$XDG_CACHE_HOME` or `~/.cache`) joined with `eol-check`
    pub fn default_root() -> PathBuf {
        dirs::cache_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".cache")))
            .unwrap_or_else(std::env::temp_dir)
            .join(CACHE_DIR_NAME)
    }
}

impl<C: Clock> FileTtlCache<C> {
    pub fn with_clock(root: PathBuf, clock: C) -> Self {
        Self { root, clock }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Storage locator for `key`
    fn entry_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", urlencoding::encode(key), ENTRY_EXTENSION))
    }

    fn read_entry(path: &Path) -> io::Result<CacheEntry> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write_entry(&self, path: &Path, entry: &CacheEntry) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let mut temp = tempfile::NamedTempFile::new_in(&self.root)?;
        serde_json::to_writer(&mut temp, entry)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        temp.flush()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl<C: Clock> CacheStore for FileTtlCache<C> {
    fn get(&self, key: &str) -> Option<Value> {
        let path = self.entry_path(key);
        let entry = match Self::read_entry(&path) {
            Ok(entry) => entry,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(key, "cache miss (no entry)");
                return None;
            }
            Err(e) => {
                debug!(key, error = %e, "cache miss (unreadable entry)");
                return None;
            }
        };

        if entry.expires_at <= self.clock.now() {
            debug!(key, expired_at = %entry.expires_at, "cache miss (expired)");
            return None;
        }

        debug!(key, expires_at = %entry.expires_at, "cache hit");
        Some(entry.value)
    }

    fn set(&self, key: &str, value: &Value, ttl: Duration) {
        let now = self.clock.now();
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let entry = CacheEntry {
            value: value.clone(),
            expires_at,
        };
        let path = self.entry_path(key);
        match self.write_entry(&path, &entry) {
            Ok(()) => debug!(key, expires_at = %expires_at, "cache updated"),
            Err(e) => debug!(key, error = %e, "cache write failed; continuing without it"),
        }
    }

    fn clear(&self) -> usize {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(root = %self.root.display(), error = %e, "nothing to clear");
                return 0;
            }
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(ENTRY_EXTENSION) {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) => debug!(path = %path.display(), error = %e, "could not remove cache entry"),
            }
        }
        removed
    }
}
