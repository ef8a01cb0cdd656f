use crate::lifecycle::domain::DependencyRecord;
use crate::ports::outbound::{DependencyReader, IgnoreListReader};
use crate::shared::error::EolError;
use crate::shared::security::{read_regular_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// Accepted top-level shapes of a dependency file
#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyDocument {
    List(Vec<DependencyRecord>),
    Wrapped { dependencies: Vec<DependencyRecord> },
}

impl DependencyDocument {
    fn into_records(self) -> Vec<DependencyRecord> {
        match self {
            DependencyDocument::List(records) => records,
            DependencyDocument::Wrapped { dependencies } => dependencies,
        }
    }
}

/// FileSystemReader adapter for dependency lists and ignore files
///
/// Dependency files are JSON, either a bare array of records or an object
/// with a `dependencies` array. Record order in the file is preserved.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyReader for FileSystemReader {
    fn read_dependencies(&self, path: &Path) -> Result<Vec<DependencyRecord>> {
        if !path.exists() {
            return Err(EolError::DependencyFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the path of a JSON dependency list produced by a manifest parser"
                    .to_string(),
            }
            .into());
        }

        let content = read_regular_file(path, "dependency file", MAX_INPUT_FILE_SIZE).map_err(
            |e| EolError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            },
        )?;

        let document: DependencyDocument =
            serde_json::from_str(&content).map_err(|e| EolError::DependencyFileParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let records = document.into_records();
        for (index, record) in records.iter().enumerate() {
            record.validate().map_err(|e| EolError::DependencyFileParseError {
                path: path.to_path_buf(),
                details: format!("record #{}: {}", index + 1, e),
            })?;
        }

        Ok(records)
    }
}

impl IgnoreListReader for FileSystemReader {
    fn read_ignore_list(&self, path: &Path) -> Result<Vec<String>> {
        let content = read_regular_file(path, "ignore file", MAX_INPUT_FILE_SIZE).map_err(|e| {
            EolError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::domain::Ecosystem;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_bare_array_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "deps.json",
            r#"[
                {"name": "django", "version": "3.2.1", "ecosystem": "python"},
                {"name": "react", "version": "17.0.2", "ecosystem": "nodejs", "direct": false, "dev": true}
            ]"#,
        );

        let records = FileSystemReader::new().read_dependencies(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "django");
        assert!(records[0].is_direct());
        assert!(!records[0].is_dev());
        assert_eq!(records[1].ecosystem(), Ecosystem::Nodejs);
        assert!(!records[1].is_direct());
        assert!(records[1].is_dev());
    }

    #[test]
    fn test_read_wrapped_document() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "deps.json",
            r#"{"dependencies": [{"name": "spring-core", "version": "5.3.0", "ecosystem": "java"}]}"#,
        );

        let records = FileSystemReader::new().read_dependencies(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "spring-core");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = FileSystemReader::new()
            .read_dependencies(&dir.path().join("absent.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Dependency file not found"));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "deps.json", "[{\"name\": ");
        let err = FileSystemReader::new().read_dependencies(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse dependency file"));
    }

    #[test]
    fn test_unknown_ecosystem_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "deps.json",
            r#"[{"name": "rails", "version": "7.0", "ecosystem": "ruby"}]"#,
        );
        assert!(FileSystemReader::new().read_dependencies(&path).is_err());
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "deps.json",
            r#"[{"name": "", "version": "1.0", "ecosystem": "python"}]"#,
        );
        let err = FileSystemReader::new().read_dependencies(&path).unwrap_err();
        assert!(err.to_string().contains("record #1"));
    }

    #[test]
    fn test_read_ignore_list_skips_comments_and_blanks() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, ".eolignore", "# legacy pins\ndjango\n\n  react  \n#vue\n");

        let names = FileSystemReader::new().read_ignore_list(&path).unwrap();
        assert_eq!(names, vec!["django", "react"]);
    }

    #[test]
    fn test_read_ignore_list_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(FileSystemReader::new()
            .read_ignore_list(&dir.path().join("missing"))
            .is_err());
    }
}
