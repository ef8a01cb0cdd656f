/// Shared utilities used across every layer
pub mod cancellation;
pub mod duration;
pub mod error;
mod result;
pub mod security;

pub use cancellation::CancellationToken;
pub use result::Result;
