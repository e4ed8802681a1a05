//! Local interface address discovery.

use std::net::{IpAddr, UdpSocket};

/// Returns the local interface address the OS would route external traffic
/// through, or `None` when no route exists. Connecting a UDP socket sends
/// no packets; it only resolves the route.
#[must_use]
pub fn local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}
