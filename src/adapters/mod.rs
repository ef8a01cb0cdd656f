/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// filesystem cache and input files, the HTTP catalog, console progress,
/// report formatters and the system clock.
pub mod outbound;
