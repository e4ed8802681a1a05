//! TCP-probe connectivity monitor.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::Url;
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::domain::ports::ConnectivityPort;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Background connectivity monitor. Probes a TCP connect to the backend
/// host on an interval and records the result; `is_connected` reads the
/// last observation. Starts optimistic so a cold start never spuriously
/// blocks a login.
pub struct NetProbeMonitor {
    target: String,
    interval: Duration,
    connected: Arc<AtomicBool>,
    running: Arc<AtomicBool>,
}

impl NetProbeMonitor {
    /// Creates a monitor probing `target` (a `host:port` pair).
    #[must_use]
    pub fn new(target: impl Into<String>, interval: Duration) -> Self {
        Self {
            target: target.into(),
            interval,
            connected: Arc::new(AtomicBool::new(true)),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates a monitor probing the host of `base_url` on its scheme's
    /// default port.
    ///
    /// # Errors
    /// Returns the parse error message if `base_url` has no usable host.
    pub fn for_base_url(base_url: &str, interval: Duration) -> Result<Self, String> {
        let url = Url::parse(base_url).map_err(|e| e.to_string())?;
        let host = url.host_str().ok_or_else(|| "base URL has no host".to_string())?;
        let port = url.port_or_known_default().unwrap_or(443);

        Ok(Self::new(format!("{host}:{port}"), interval))
    }

    /// Starts the probe loop. The loop runs until [`Self::stop`].
    pub fn start(&self) -> tokio::task::JoinHandle<()> {
        let target = self.target.clone();
        let interval = self.interval;
        let connected = self.connected.clone();
        let running = self.running.clone();

        running.store(true, Ordering::SeqCst);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            while running.load(Ordering::SeqCst) {
                ticker.tick().await;

                if !running.load(Ordering::SeqCst) {
                    break;
                }

                let reachable = probe(&target).await;
                let was_reachable = connected.swap(reachable, Ordering::SeqCst);

                if reachable != was_reachable {
                    if reachable {
                        debug!(%target, "backend reachable again");
                    } else {
                        warn!(%target, "backend unreachable");
                    }
                }
            }

            debug!("connectivity probe loop stopped");
        })
    }

    /// Stops the probe loop after its current iteration.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl ConnectivityPort for NetProbeMonitor {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

async fn probe(target: &str) -> bool {
    matches!(
        tokio::time::timeout(PROBE_TIMEOUT, TcpStream::connect(target)).await,
        Ok(Ok(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_optimistic() {
        let monitor = NetProbeMonitor::new("127.0.0.1:1", Duration::from_secs(60));
        assert!(monitor.is_connected());
    }

    #[test]
    fn test_for_base_url_derives_host_and_port() {
        let monitor =
            NetProbeMonitor::for_base_url("https://gate.test.example/api/v1", Duration::from_secs(60))
                .unwrap();
        assert_eq!(monitor.target, "gate.test.example:443");

        let monitor =
            NetProbeMonitor::for_base_url("http://localhost:8080/api/v1", Duration::from_secs(60))
                .unwrap();
        assert_eq!(monitor.target, "localhost:8080");
    }

    #[test]
    fn test_for_base_url_rejects_garbage() {
        assert!(NetProbeMonitor::for_base_url("not a url", Duration::from_secs(60)).is_err());
    }

    #[tokio::test]
    async fn test_probe_reaches_local_listener() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        assert!(probe(&addr.to_string()).await);
    }

    #[tokio::test]
    async fn test_probe_fails_on_closed_port() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert!(!probe(&addr.to_string()).await);
    }
}
