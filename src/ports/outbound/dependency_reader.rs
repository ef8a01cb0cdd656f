use crate::lifecycle::domain::DependencyRecord;
use crate::shared::Result;
use std::path::Path;

/// DependencyReader port for obtaining a project's dependency list
///
/// Manifest parsing lives outside the engine; this port reads the ordered
/// list of records those parsers produce.
pub trait DependencyReader {
    /// Reads the dependency records stored at `path`
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or malformed.
    /// This is the only run-level fatal input condition.
    fn read_dependencies(&self, path: &Path) -> Result<Vec<DependencyRecord>>;
}

/// IgnoreListReader port for loading dependency names to skip
pub trait IgnoreListReader {
    /// Reads one dependency name per line, skipping blanks and `#` comments
    fn read_ignore_list(&self, path: &Path) -> Result<Vec<String>>;
}
