use super::DependencyRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Lifecycle classification of one dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// End of life is further away than the warning threshold
    Ok,
    /// End of life falls within the warning threshold
    Warning,
    /// End of life has already passed
    Critical,
    /// No catalog entry or no concrete end-of-life date
    Unknown,
    /// Resolution of this dependency failed
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
            Status::Error => "ERROR",
        }
    }

    /// WARNING and CRITICAL dependencies get an upgrade recommendation
    pub fn needs_upgrade(&self) -> bool {
        matches!(self, Status::Warning | Status::Critical)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving one dependency against the catalog
///
/// Built once per dependency per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    #[serde(flatten)]
    dependency: DependencyRecord,
    status: Status,
    eol_date: Option<NaiveDate>,
    days_remaining: Option<i64>,
    recommended_version: Option<String>,
    has_breaking_change: bool,
    error: Option<String>,
}

impl Resolution {
    /// A dependency with no catalog match or no concrete EOL date
    pub fn unknown(dependency: DependencyRecord) -> Self {
        Self {
            dependency,
            status: Status::Unknown,
            eol_date: None,
            days_remaining: None,
            recommended_version: None,
            has_breaking_change: false,
            error: None,
        }
    }

    /// A dependency whose resolution failed
    pub fn error(dependency: DependencyRecord, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            status: Status::Error,
            ..Self::unknown(dependency)
        }
    }

    /// A dependency matched to a cycle with a concrete EOL date
    pub fn dated(
        dependency: DependencyRecord,
        status: Status,
        eol_date: NaiveDate,
        days_remaining: i64,
    ) -> Self {
        Self {
            status,
            eol_date: Some(eol_date),
            days_remaining: Some(days_remaining),
            ..Self::unknown(dependency)
        }
    }

    /// Attaches an upgrade recommendation
    pub fn with_recommendation(mut self, version: String, breaking: bool) -> Self {
        self.recommended_version = Some(version);
        self.has_breaking_change = breaking;
        self
    }

    pub fn dependency(&self) -> &DependencyRecord {
        &self.dependency
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn eol_date(&self) -> Option<NaiveDate> {
        self.eol_date
    }

    pub fn days_remaining(&self) -> Option<i64> {
        self.days_remaining
    }

    pub fn recommended_version(&self) -> Option<&str> {
        self.recommended_version.as_deref()
    }

    pub fn has_breaking_change(&self) -> bool {
        self.has_breaking_change
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Aggregate counts over a run's resolutions
///
/// ERROR is counted in its own bucket; reporting layers that want the
/// combined "nothing actionable" figure use [`Summary::unknown_or_error`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub critical: usize,
    pub warning: usize,
    pub ok: usize,
    pub unknown: usize,
    pub error: usize,
}

impl Summary {
    /// Counts resolutions; the result does not depend on iteration order
    pub fn from_resolutions<'a>(resolutions: impl IntoIterator<Item = &'a Resolution>) -> Self {
        resolutions
            .into_iter()
            .fold(Self::default(), |mut summary, resolution| {
                summary.record(resolution.status());
                summary
            })
    }

    pub fn record(&mut self, status: Status) {
        match status {
            Status::Critical => self.critical += 1,
            Status::Warning => self.warning += 1,
            Status::Ok => self.ok += 1,
            Status::Unknown => self.unknown += 1,
            Status::Error => self.error += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.warning + self.ok + self.unknown + self.error
    }

    pub fn unknown_or_error(&self) -> usize {
        self.unknown + self.error
    }

    pub fn has_critical(&self) -> bool {
        self.critical > 0
    }
}
