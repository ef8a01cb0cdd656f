/// Network adapters for the release catalog
mod catalog_client;
mod endoflife_api;

pub use catalog_client::{CatalogClient, FetchPolicy, DEFAULT_CACHE_TTL};
pub use endoflife_api::EndOfLifeApi;
