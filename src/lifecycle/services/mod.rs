/// Stateless lifecycle services (no I/O)
pub mod classifier;
pub mod cycle_matcher;
pub mod product_alias;
pub mod upgrade_advisor;

pub use classifier::{Classification, EolClassifier};
pub use cycle_matcher::{CycleMatch, CycleMatcher, MatchKind};
pub use product_alias::ProductAliases;
pub use upgrade_advisor::{Recommendation, UpgradeAdvisor};
