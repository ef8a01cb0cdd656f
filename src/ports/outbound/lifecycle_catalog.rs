use crate::lifecycle::domain::ReleaseCycle;
use crate::shared::error::CatalogError;
use crate::shared::CancellationToken;
use async_trait::async_trait;

/// LifecycleCatalog port consumed by the resolution orchestrator
///
/// Hides product-id mapping, caching policy and availability probing behind
/// package-name based lookups.
#[async_trait]
pub trait LifecycleCatalog: Send + Sync {
    /// Finds the release cycle matching `version` of `package_name`
    ///
    /// `Ok(None)` means no match: the product is unknown to the catalog, no
    /// cycle matches, or a network/parse failure occurred while matching.
    ///
    /// # Errors
    /// Only failures that must be reported against the dependency are
    /// returned: missing cache data in offline mode, or cancellation.
    async fn resolve(
        &self,
        package_name: &str,
        version: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<ReleaseCycle>, CatalogError>;

    /// All release cycles of the product behind `package_name`, in catalog
    /// (newest-first) order
    async fn release_cycles(
        &self,
        package_name: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ReleaseCycle>, CatalogError>;
}
