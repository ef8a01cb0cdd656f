use async_trait::async_trait;
use eol_check::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock LifecycleCatalog for testing, keyed by package name
#[derive(Default, Clone)]
pub struct MockLifecycleCatalog {
    products: HashMap<String, Vec<ReleaseCycle>>,
    offline_misses: HashSet<String>,
    calls: Arc<AtomicUsize>,
}

impl MockLifecycleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, name: &str, cycles: Vec<ReleaseCycle>) -> Self {
        self.products.insert(name.to_string(), cycles);
        self
    }

    /// Behaves like an offline run with nothing cached for `name`
    pub fn with_offline_miss(mut self, name: &str) -> Self {
        self.offline_misses.insert(name.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, name: &str, cancel: &CancellationToken) -> Result<(), CatalogError> {
        if cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }
        if self.offline_misses.contains(name) {
            return Err(CatalogError::NoCachedData {
                product: name.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LifecycleCatalog for MockLifecycleCatalog {
    async fn resolve(
        &self,
        package_name: &str,
        version: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<ReleaseCycle>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check(package_name, cancel)?;
        Ok(self
            .products
            .get(package_name)
            .and_then(|cycles| CycleMatcher::find(cycles, version))
            .map(|m| m.cycle.clone()))
    }

    async fn release_cycles(
        &self,
        package_name: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ReleaseCycle>, CatalogError> {
        self.check(package_name, cancel)?;
        Ok(self.products.get(package_name).cloned().unwrap_or_default())
    }
}
