use serde_json::Value;
use std::time::Duration;

/// CacheStore port for durable key-value storage with per-entry expiry
///
/// Caching is strictly best-effort: none of these operations can fail from
/// the caller's point of view. Unreadable, corrupt or expired entries are
/// misses; failed writes are dropped.
///
/// Implementations must be `Send + Sync`; entries for distinct keys are
/// written concurrently by parallel resolutions.
pub trait CacheStore: Send + Sync {
    /// Returns the stored value for `key` if it exists and has not expired
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous entry, to expire
    /// after `ttl`
    fn set(&self, key: &str, value: &Value, ttl: Duration);

    /// Removes every entry this cache owns and returns how many were removed
    fn clear(&self) -> usize;
}
