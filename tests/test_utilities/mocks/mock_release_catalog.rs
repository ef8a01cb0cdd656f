use async_trait::async_trait;
use eol_check::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock ReleaseCatalog standing in for the HTTP catalog
#[derive(Default, Clone)]
pub struct MockReleaseCatalog {
    products: HashMap<String, Vec<ReleaseCycle>>,
    fetches: Arc<AtomicUsize>,
}

impl MockReleaseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product_id: &str, cycles: Vec<ReleaseCycle>) -> Self {
        self.products.insert(product_id.to_string(), cycles);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReleaseCatalog for MockReleaseCatalog {
    async fn fetch_release_cycles(
        &self,
        product_id: &str,
    ) -> Result<Vec<ReleaseCycle>, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.products
            .get(product_id)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound {
                product: product_id.to_string(),
            })
    }
}
