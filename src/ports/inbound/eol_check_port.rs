use crate::application::dto::{CheckRequest, CheckResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// EolCheckPort - Inbound port for the lifecycle check use case
///
/// Driving adapters hand over the full dependency list of a project and get
/// back every per-dependency resolution plus the aggregate summary.
#[async_trait(?Send)]
pub trait EolCheckPort {
    /// Resolves every dependency in `request` against the release catalog
    ///
    /// # Errors
    /// Only run-level failures are returned (e.g. an invalid request).
    /// Failures of individual dependencies are reported as ERROR resolutions.
    async fn check(&self, request: CheckRequest) -> Result<CheckResponse>;
}
