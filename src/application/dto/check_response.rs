use crate::lifecycle::domain::{Resolution, Summary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

/// Facts about a single run, reported next to the resolutions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetadata {
    pub run_id: Uuid,
    pub project_path: PathBuf,
    pub project_name: String,
    pub scanned_at: DateTime<Utc>,
    pub execution_time_seconds: f64,
    pub threshold_days: i64,
    /// Dependencies skipped because of the ignore list
    pub ignored: usize,
}

/// CheckResponse - Internal response DTO from the EOL check use case
///
/// `resolutions` keep the input order of the dependency list, whatever order
/// the workers finished in.
#[derive(Debug, Clone)]
pub struct CheckResponse {
    pub resolutions: Vec<Resolution>,
    pub summary: Summary,
    pub metadata: RunMetadata,
}

impl CheckResponse {
    pub fn new(resolutions: Vec<Resolution>, summary: Summary, metadata: RunMetadata) -> Self {
        Self {
            resolutions,
            summary,
            metadata,
        }
    }

    /// Whether any dependency is past its end-of-life date
    pub fn has_critical(&self) -> bool {
        self.summary.has_critical()
    }
}
