use crate::application::dto::{CheckRequest, CheckResponse, RunMetadata};
use crate::lifecycle::domain::{DependencyRecord, Resolution, Summary};
use crate::lifecycle::services::{EolClassifier, UpgradeAdvisor};
use crate::ports::inbound::EolCheckPort;
use crate::ports::outbound::{Clock, LifecycleCatalog, ProgressReporter};
use crate::shared::error::CatalogError;
use crate::shared::{CancellationToken, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Worker pool size: the configured value, or twice the available
/// parallelism; never less than one
pub fn effective_workers(max_workers: Option<usize>) -> usize {
    max_workers
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get() * 2)
                .unwrap_or(2)
        })
        .max(1)
}

/// CheckEolUseCase - the resolution orchestrator
///
/// Fans every dependency out to the lifecycle catalog with at most
/// `max_workers` resolutions in flight, classifies each result and folds the
/// summary as results arrive. Resolutions are independent: a failure is
/// recorded as an ERROR resolution for that dependency only.
///
/// # Type Parameters
/// * `L` - LifecycleCatalog implementation
/// * `P` - ProgressReporter implementation
/// * `K` - Clock implementation supplying "today"
pub struct CheckEolUseCase<L, P, K> {
    catalog: L,
    progress_reporter: P,
    clock: K,
    cancel: CancellationToken,
}

impl<L, P, K> CheckEolUseCase<L, P, K>
where
    L: LifecycleCatalog,
    P: ProgressReporter,
    K: Clock,
{
    pub fn new(catalog: L, progress_reporter: P, clock: K) -> Self {
        Self {
            catalog,
            progress_reporter,
            clock,
            cancel: CancellationToken::new(),
        }
    }

    /// Uses `cancel` to stop dispatching new resolutions and network calls
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Executes the check for one project
    ///
    /// # Errors
    /// Returns an error only for an invalid request; dependency-level
    /// failures end up in the response.
    pub async fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        if request.threshold_days < 0 {
            anyhow::bail!(
                "Warning threshold must not be negative (got {} days)",
                request.threshold_days
            );
        }

        let started = Instant::now();
        let scanned_at = self.clock.now();

        let (dependencies, ignored): (Vec<DependencyRecord>, Vec<DependencyRecord>) = request
            .dependencies
            .iter()
            .cloned()
            .partition(|dep| !request.is_ignored(dep.name()));
        if !ignored.is_empty() {
            debug!(count = ignored.len(), "skipping ignored dependencies");
        }

        let workers = effective_workers(request.max_workers);
        self.progress_reporter.report(&format!(
            "🔍 Checking {} dependencies against the release catalog ({} workers)...",
            dependencies.len(),
            workers
        ));

        let (resolutions, summary) = self
            .resolve_all(&dependencies, request.threshold_days, workers)
            .await;

        if summary.error > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} dependencies could not be resolved; see the report for details",
                summary.error
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Check complete: {} critical, {} warning, {} ok, {} unknown, {} error",
            summary.critical, summary.warning, summary.ok, summary.unknown, summary.error
        ));

        let metadata = RunMetadata {
            run_id: Uuid::new_v4(),
            project_path: request.project_path.clone(),
            project_name: request.resolved_project_name(),
            scanned_at,
            execution_time_seconds: started.elapsed().as_secs_f64(),
            threshold_days: request.threshold_days,
            ignored: ignored.len(),
        };
        info!(run_id = %metadata.run_id, total = summary.total(), "check finished");

        Ok(CheckResponse::new(resolutions, summary, metadata))
    }

    /// Resolves every dependency and aggregates the summary
    ///
    /// Resolutions come back in input order; the summary is a commutative
    /// fold, so neither depends on completion order or on `workers`.
    pub async fn resolve_all(
        &self,
        dependencies: &[DependencyRecord],
        threshold_days: i64,
        workers: usize,
    ) -> (Vec<Resolution>, Summary) {
        let total = dependencies.len();
        let today = self.clock.today();
        let mut summary = Summary::default();
        let mut indexed: Vec<(usize, Resolution)> = Vec::with_capacity(total);

        let mut completions = stream::iter(dependencies.iter().enumerate())
            .map(|(index, dependency)| async move {
                let resolution = self.resolve_one(dependency, threshold_days, today).await;
                (index, resolution)
            })
            .buffer_unordered(workers.max(1));

        while let Some((index, resolution)) = completions.next().await {
            summary.record(resolution.status());
            self.progress_reporter.report_progress(
                indexed.len() + 1,
                total,
                Some(resolution.dependency().name()),
            );
            indexed.push((index, resolution));
        }

        indexed.sort_unstable_by_key(|(index, _)| *index);
        let resolutions = indexed.into_iter().map(|(_, resolution)| resolution).collect();
        (resolutions, summary)
    }

    async fn resolve_one(
        &self,
        dependency: &DependencyRecord,
        threshold_days: i64,
        today: NaiveDate,
    ) -> Resolution {
        match self.try_resolve(dependency, threshold_days, today).await {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!(
                    dependency = dependency.name(),
                    version = dependency.version(),
                    error = %e,
                    "dependency could not be resolved"
                );
                Resolution::error(dependency.clone(), e.to_string())
            }
        }
    }

    async fn try_resolve(
        &self,
        dependency: &DependencyRecord,
        threshold_days: i64,
        today: NaiveDate,
    ) -> std::result::Result<Resolution, CatalogError> {
        if self.cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }

        let name = dependency.name();
        let version = dependency.version();

        let Some(cycle) = self.catalog.resolve(name, version, &self.cancel).await? else {
            return Ok(Resolution::unknown(dependency.clone()));
        };

        let classification = EolClassifier::classify(cycle.eol.as_ref(), today, threshold_days);
        let (Some(eol_date), Some(days_remaining)) =
            (classification.eol_date, classification.days_remaining)
        else {
            return Ok(Resolution::unknown(dependency.clone()));
        };

        let resolution = Resolution::dated(
            dependency.clone(),
            classification.status,
            eol_date,
            days_remaining,
        );
        if !classification.status.needs_upgrade() {
            return Ok(resolution);
        }

        // The classification stands even when the recommendation lookup fails
        let cycles = match self.catalog.release_cycles(name, &self.cancel).await {
            Ok(cycles) => cycles,
            Err(e) => {
                warn!(
                    dependency = name,
                    version,
                    error = %e,
                    "upgrade recommendation unavailable"
                );
                return Ok(resolution);
            }
        };
        Ok(
            match UpgradeAdvisor::recommend(&cycles, &cycle, version, today) {
                Some(recommendation) => {
                    resolution.with_recommendation(recommendation.version, recommendation.breaking)
                }
                None => resolution,
            },
        )
    }
}

#[async_trait(?Send)]
impl<L, P, K> EolCheckPort for CheckEolUseCase<L, P, K>
where
    L: LifecycleCatalog,
    P: ProgressReporter,
    K: Clock,
{
    async fn check(&self, request: CheckRequest) -> Result<CheckResponse> {
        self.execute(request).await
    }
}
