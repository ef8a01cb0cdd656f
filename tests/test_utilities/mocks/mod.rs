/// Mock implementations for testing
mod mock_lifecycle_catalog;
mod mock_progress_reporter;
mod mock_release_catalog;

pub use mock_lifecycle_catalog::MockLifecycleCatalog;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
pub use mock_release_catalog::MockReleaseCatalog;
