use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for dependency names (security limit)
const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for declared versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Package ecosystem a dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Python,
    Nodejs,
    Java,
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Python => write!(f, "python"),
            Ecosystem::Nodejs => write!(f, "nodejs"),
            Ecosystem::Java => write!(f, "java"),
        }
    }
}

fn default_direct() -> bool {
    true
}

/// A dependency declared by a project, as produced by a manifest parser
///
/// Records are immutable: the engine clones them into each
/// [`Resolution`](super::Resolution) rather than annotating them in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyRecord {
    name: String,
    version: String,
    ecosystem: Ecosystem,
    #[serde(default = "default_direct")]
    direct: bool,
    #[serde(default)]
    dev: bool,
}

impl DependencyRecord {
    /// Creates a direct, non-dev dependency record
    pub fn new(name: impl Into<String>, version: impl Into<String>, ecosystem: Ecosystem) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ecosystem,
            direct: true,
            dev: false,
        }
    }

    /// Marks the record as transitive and/or dev-only
    pub fn with_scope(mut self, direct: bool, dev: bool) -> Self {
        self.direct = direct;
        self.dev = dev;
        self
    }

    /// Rejects records a parser should never have produced
    ///
    /// # Errors
    /// Returns an error when the name or version is empty, oversized, or
    /// contains control characters.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Dependency name cannot be empty");
        }
        if self.name.len() > MAX_NAME_LENGTH {
            anyhow::bail!(
                "Dependency name is too long ({} bytes). Maximum allowed: {} bytes",
                self.name.len(),
                MAX_NAME_LENGTH
            );
        }
        if self.version.trim().is_empty() {
            anyhow::bail!("Version of dependency '{}' cannot be empty", self.name);
        }
        if self.version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Version of dependency '{}' is too long ({} bytes). Maximum allowed: {} bytes",
                self.name,
                self.version.len(),
                MAX_VERSION_LENGTH
            );
        }
        if self
            .name
            .chars()
            .chain(self.version.chars())
            .any(char::is_control)
        {
            anyhow::bail!(
                "Dependency '{}' contains control characters",
                self.name.escape_debug()
            );
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    pub fn is_direct(&self) -> bool {
        self.direct
    }

    pub fn is_dev(&self) -> bool {
        self.dev
    }
}
