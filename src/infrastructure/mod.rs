//! Infrastructure layer with external service adapters.

/// Backend API adapters.
pub mod api;
/// Application configuration.
pub mod config;
/// Device snapshot collection.
pub mod device;
/// Network reachability and address discovery.
pub mod net;
/// Token storage adapters.
pub mod storage;

pub use api::{ApiTransport, HttpAuthClient, HttpProfileClient};
pub use config::{ApiConfig, CliArgs, Command, ConfigError, LogLevel};
pub use device::device_snapshot;
pub use net::{NetProbeMonitor, local_ip};
pub use storage::KeyringTokenStorage;
