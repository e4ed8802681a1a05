//! Connectivity port definition.

/// Port for network reachability. Queried synchronously before issuing
/// requests that would otherwise fail ambiguously.
#[cfg_attr(test, mockall::automock)]
pub trait ConnectivityPort: Send + Sync {
    /// Returns the last observed reachability state.
    fn is_connected(&self) -> bool;
}
