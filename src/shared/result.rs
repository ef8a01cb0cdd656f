/// Crate-wide Result alias over `anyhow::Error`.
///
/// Component boundaries with a closed failure set (the catalog client) use
/// their own `thiserror` enums; everything that bubbles up to the CLI goes
/// through this alias.
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;
