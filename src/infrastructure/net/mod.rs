//! Network reachability and address discovery.

mod local_ip;
mod monitor;

pub use local_ip::local_ip;
pub use monitor::NetProbeMonitor;
