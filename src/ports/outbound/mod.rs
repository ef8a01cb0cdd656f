/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, clock).
pub mod cache_store;
pub mod clock;
pub mod dependency_reader;
pub mod formatter;
pub mod lifecycle_catalog;
pub mod output_presenter;
pub mod progress_reporter;
pub mod release_catalog;

pub use cache_store::CacheStore;
pub use clock::Clock;
pub use dependency_reader::{DependencyReader, IgnoreListReader};
pub use formatter::ReportFormatter;
pub use lifecycle_catalog::LifecycleCatalog;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use release_catalog::ReleaseCatalog;
