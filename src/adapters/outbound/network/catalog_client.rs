use crate::lifecycle::domain::ReleaseCycle;
use crate::lifecycle::services::{CycleMatcher, ProductAliases};
use crate::ports::outbound::{CacheStore, LifecycleCatalog, ReleaseCatalog};
use crate::shared::error::CatalogError;
use crate::shared::CancellationToken;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Default lifetime of a cached catalog response (24 hours)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(86_400);

/// How the catalog client trades freshness against network access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Never touch the network; a cache miss is an error
    pub offline: bool,
    /// Skip cache reads and always refetch, rewriting the cache entry
    pub force_update: bool,
    /// Lifetime of cache entries written by this client
    pub ttl: Duration,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            offline: false,
            force_update: false,
            ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// Cache key of a product's release cycles
///
/// The `eol_api_` namespace keeps catalog entries apart from any other
/// consumer of the same cache root.
fn cache_key(product_id: &str) -> String {
    format!("eol_api_{}", product_id)
}

/// CatalogClient layers the cache policy, the availability memo and
/// version matching over a raw [`ReleaseCatalog`].
///
/// The availability memo lives for as long as the client (one run). Each
/// product id owns a [`OnceCell`], so concurrent workers asking about the
/// same product wait on a single probe instead of racing their own.
pub struct CatalogClient<S: ReleaseCatalog, K: CacheStore> {
    source: S,
    cache: K,
    policy: FetchPolicy,
    availability: DashMap<String, Arc<OnceCell<bool>>>,
}

impl<S: ReleaseCatalog, K: CacheStore> CatalogClient<S, K> {
    pub fn new(source: S, cache: K, policy: FetchPolicy) -> Self {
        Self {
            source,
            cache,
            policy,
            availability: DashMap::new(),
        }
    }

    /// Catalog product id for a package name
    pub fn product_id_for(&self, package_name: &str) -> String {
        ProductAliases::product_id_for(package_name)
    }

    /// Whether the catalog lists `product_id`, probing it at most once
    ///
    /// A failed probe (not found, network, malformed payload) is remembered
    /// as "unavailable" for the rest of the run.
    ///
    /// # Errors
    /// Offline misses and cancellation are returned instead of being
    /// remembered, so the dependency is reported rather than skipped.
    pub async fn is_available(
        &self,
        product_id: &str,
        cancel: &CancellationToken,
    ) -> Result<bool, CatalogError> {
        let cell = self
            .availability
            .entry(product_id.to_string())
            .or_default()
            .clone();

        let available = cell
            .get_or_try_init(|| async {
                match self.fetch_release_cycles(product_id, cancel).await {
                    Ok(_) => Ok(true),
                    Err(e) if e.is_fatal() => Err(e),
                    Err(e) => {
                        debug!(product = product_id, error = %e, "product marked unavailable");
                        Ok(false)
                    }
                }
            })
            .await?;

        Ok(*available)
    }

    /// Release cycles of `product_id`, newest first
    ///
    /// Policy order: force-update refetches and rewrites the entry; otherwise
    /// a live cache entry is returned; otherwise offline mode fails with
    /// [`CatalogError::NoCachedData`]; otherwise the catalog is fetched and
    /// the result cached for the configured TTL.
    pub async fn fetch_release_cycles(
        &self,
        product_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ReleaseCycle>, CatalogError> {
        let key = cache_key(product_id);

        if !self.policy.force_update {
            if let Some(cached) = self.cache.get(&key) {
                match serde_json::from_value::<Vec<ReleaseCycle>>(cached) {
                    Ok(cycles) => return Ok(cycles),
                    Err(e) => debug!(key = %key, error = %e, "ignoring unusable cache entry"),
                }
            }

            if self.policy.offline {
                return Err(CatalogError::NoCachedData {
                    product: product_id.to_string(),
                });
            }
        }

        if cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }

        let cycles = self.source.fetch_release_cycles(product_id).await?;
        match serde_json::to_value(&cycles) {
            Ok(value) => self.cache.set(&key, &value, self.policy.ttl),
            Err(e) => debug!(key = %key, error = %e, "release cycles not cacheable"),
        }
        Ok(cycles)
    }
}

#[async_trait]
impl<S: ReleaseCatalog, K: CacheStore> LifecycleCatalog for CatalogClient<S, K> {
    async fn resolve(
        &self,
        package_name: &str,
        version: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<ReleaseCycle>, CatalogError> {
        let product_id = self.product_id_for(package_name);
        if !self.is_available(&product_id, cancel).await? {
            return Ok(None);
        }

        let cycles = match self.fetch_release_cycles(&product_id, cancel).await {
            Ok(cycles) => cycles,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!(package = package_name, product = %product_id, error = %e, "treating catalog failure as no match");
                return Ok(None);
            }
        };

        let found = CycleMatcher::find(&cycles, version);
        match &found {
            Some(m) => debug!(package = package_name, version, cycle = %m.cycle.cycle, kind = ?m.kind, "matched release cycle"),
            None => debug!(package = package_name, version, "no release cycle matched"),
        }
        Ok(found.map(|m| m.cycle.clone()))
    }

    async fn release_cycles(
        &self,
        package_name: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ReleaseCycle>, CatalogError> {
        let product_id = self.product_id_for(package_name);
        self.fetch_release_cycles(&product_id, cancel).await
    }
}
