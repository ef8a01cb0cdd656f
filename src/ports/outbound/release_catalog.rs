use crate::lifecycle::domain::ReleaseCycle;
use crate::shared::error::CatalogError;
use async_trait::async_trait;

/// ReleaseCatalog port for the raw release-lifecycle catalog
///
/// Implementations always go to the source (typically the network); caching
/// is layered on top by the catalog client.
#[async_trait]
pub trait ReleaseCatalog: Send + Sync {
    /// Fetches every release cycle of `product_id`, newest first
    ///
    /// # Errors
    /// - [`CatalogError::ProductNotFound`] if the catalog has no such product
    /// - [`CatalogError::Network`] / [`CatalogError::HttpStatus`] on transport failures
    /// - [`CatalogError::MalformedResponse`] if the payload cannot be parsed
    async fn fetch_release_cycles(&self, product_id: &str)
        -> Result<Vec<ReleaseCycle>, CatalogError>;
}
