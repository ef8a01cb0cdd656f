//! eol-check - dependency lifecycle checks against endoflife.date
//!
//! This library resolves each declared dependency to the release cycle it
//! belongs to, classifies how close that cycle is to end-of-life, and
//! recommends an upgrade target when one is due. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`lifecycle`): Dependency records, release cycles,
//!   version matching, EOL classification and upgrade advice
//! - **Application Layer** (`application`): The resolution orchestrator and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Catalog client, TTL cache, formatters and console output
//! - **Shared** (`shared`): Errors, cancellation and common utilities
//!
//! # Example
//!
//! ```no_run
//! use eol_check::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let catalog = CatalogClient::new(
//!     EndOfLifeApi::new()?,
//!     FileTtlCache::new(FileTtlCache::default_root()),
//!     FetchPolicy::default(),
//! );
//! let use_case = CheckEolUseCase::new(catalog, StderrProgressReporter::new(), SystemClock::new());
//!
//! // Execute
//! let dependencies = FileSystemReader::new().read_dependencies(Path::new("deps.json"))?;
//! let request = CheckRequest::new(PathBuf::from("."), dependencies);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let output = TextFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod lifecycle;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, FileTtlCache, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{
        CatalogClient, EndOfLifeApi, FetchPolicy, DEFAULT_CACHE_TTL,
    };
    pub use crate::adapters::outbound::time::{FixedClock, SystemClock};
    pub use crate::application::dto::{CheckRequest, CheckResponse, ReportFormat, RunMetadata};
    pub use crate::application::use_cases::{effective_workers, CheckEolUseCase};
    pub use crate::ports::inbound::EolCheckPort;
    pub use crate::ports::outbound::{
        CacheStore, Clock, DependencyReader, IgnoreListReader, LifecycleCatalog, OutputPresenter,
        ProgressReporter, ReleaseCatalog, ReportFormatter,
    };
    pub use crate::lifecycle::domain::{
        DependencyRecord, Ecosystem, Eol, ReleaseCycle, Resolution, Status, Summary,
    };
    pub use crate::lifecycle::services::{
        CycleMatcher, EolClassifier, ProductAliases, UpgradeAdvisor,
    };
    pub use crate::shared::error::{CatalogError, EolError, ExitCode};
    pub use crate::shared::{CancellationToken, Result};
}
