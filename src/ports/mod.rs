/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what the CLI drives; outbound ports are what the
/// application core needs from storage, the network, the console and the clock.
pub mod inbound;
pub mod outbound;
