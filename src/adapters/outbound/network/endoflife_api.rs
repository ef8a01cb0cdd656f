use crate::lifecycle::domain::ReleaseCycle;
use crate::ports::outbound::ReleaseCatalog;
use crate::shared::error::CatalogError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const DEFAULT_CATALOG_URL: &str = "https://endoflife.date/api";

/// EndOfLifeApi adapter for the endoflife.date release catalog
///
/// Serves `GET {base}/{product}.json`, which returns the product's release
/// cycles newest first. Transient failures are retried with a linear
/// backoff; a 404 is answered immediately as [`CatalogError::ProductNotFound`].
pub struct EndOfLifeApi {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl EndOfLifeApi {
    /// Creates a client for the public catalog
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_CATALOG_URL)
    }

    /// Creates a client against another catalog root (mirrors, tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("eol-check/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    async fn fetch_with_retry(&self, product_id: &str) -> Result<Vec<ReleaseCycle>, CatalogError> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(product_id).await {
                Ok(cycles) => return Ok(cycles),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    debug!(product = product_id, attempt, error = %e, "retrying catalog fetch");
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, product_id: &str) -> Result<Vec<ReleaseCycle>, CatalogError> {
        let url = format!("{}/{}.json", self.base_url, urlencoding::encode(product_id));
        debug!("Fetching release cycles: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::ProductNotFound {
                product: product_id.to_string(),
            });
        }

        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                product: product_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let cycles: Vec<ReleaseCycle> =
            serde_json::from_str(&body).map_err(|e| CatalogError::MalformedResponse {
                product: product_id.to_string(),
                details: e.to_string(),
            })?;

        debug!(product = product_id, cycles = cycles.len(), "release cycles fetched");
        Ok(cycles)
    }
}

#[async_trait]
impl ReleaseCatalog for EndOfLifeApi {
    async fn fetch_release_cycles(
        &self,
        product_id: &str,
    ) -> Result<Vec<ReleaseCycle>, CatalogError> {
        if product_id.trim().is_empty() {
            return Err(CatalogError::ProductNotFound {
                product: product_id.to_string(),
            });
        }
        self.fetch_with_retry(product_id).await
    }
}
