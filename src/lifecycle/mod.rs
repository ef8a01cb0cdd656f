/// Lifecycle bounded context: dependency lifecycle data and the pure
/// algorithms that match versions to release cycles and classify them.
pub mod domain;
pub mod services;
