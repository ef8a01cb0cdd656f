use crate::lifecycle::domain::DependencyRecord;
use std::path::PathBuf;

/// Default warning window before an end-of-life date
pub const DEFAULT_THRESHOLD_DAYS: i64 = 90;

/// CheckRequest - Internal request DTO for the EOL check use case
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Project directory the dependencies were collected from
    pub project_path: PathBuf,
    /// Display name; defaults to the project directory's name
    pub project_name: Option<String>,
    /// Dependencies in the order the parser produced them
    pub dependencies: Vec<DependencyRecord>,
    /// Days before EOL at which a dependency becomes WARNING
    pub threshold_days: i64,
    /// Worker pool size; `None` picks twice the available parallelism
    pub max_workers: Option<usize>,
    /// Dependency names (case-insensitive) left out of the run
    pub ignored: Vec<String>,
}

impl CheckRequest {
    pub fn new(project_path: PathBuf, dependencies: Vec<DependencyRecord>) -> Self {
        Self {
            project_path,
            project_name: None,
            dependencies,
            threshold_days: DEFAULT_THRESHOLD_DAYS,
            max_workers: None,
            ignored: Vec::new(),
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn with_threshold_days(mut self, threshold_days: i64) -> Self {
        self.threshold_days = threshold_days;
        self
    }

    pub fn with_max_workers(mut self, max_workers: Option<usize>) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_ignored(mut self, ignored: Vec<String>) -> Self {
        self.ignored = ignored;
        self
    }

    /// The project name to report
    pub fn resolved_project_name(&self) -> String {
        self.project_name.clone().unwrap_or_else(|| {
            self.project_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.project_path.display().to_string())
        })
    }

    /// Whether `name` is on the ignore list
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(name))
    }
}
