/// Domain model for dependency lifecycle resolution
pub mod dependency;
pub mod release_cycle;
pub mod resolution;
pub mod version;

pub use dependency::{DependencyRecord, Ecosystem};
pub use release_cycle::{Eol, ReleaseCycle};
pub use resolution::{Resolution, Status, Summary};
