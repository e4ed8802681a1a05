//! Device snapshot collection.

use std::net::IpAddr;

use uuid::Uuid;

use crate::domain::entities::DeviceInfo;

/// Collects a fresh device snapshot for a login attempt. `ip` comes from
/// [`crate::infrastructure::net::local_ip`]; the caller decides how to
/// handle its absence before ever building a snapshot.
#[must_use]
pub fn device_snapshot(ip: IpAddr) -> DeviceInfo {
    DeviceInfo {
        os: std::env::consts::OS.to_string(),
        ip_address: ip.to_string(),
        instance_id: Uuid::new_v4().to_string(),
        device_model: whoami::devicename(),
        locale: locale(),
        push_permission: "denied".to_string(),
        os_version: whoami::distro(),
        app_version: crate::VERSION.to_string(),
    }
}

fn locale() -> String {
    std::env::var("LANG")
        .ok()
        .and_then(|lang| lang.split(['.', '_']).next().map(str::to_string))
        .filter(|tag| !tag.is_empty() && tag != "C")
        .unwrap_or_else(|| "en".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_complete() {
        let info = device_snapshot("192.168.1.10".parse().unwrap());

        assert_eq!(info.ip_address, "192.168.1.10");
        assert!(!info.os.is_empty());
        assert!(!info.instance_id.is_empty());
        assert!(!info.locale.is_empty());
        assert_eq!(info.app_version, crate::VERSION);
    }

    #[test]
    fn test_instance_id_is_fresh_per_attempt() {
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        let a = device_snapshot(ip);
        let b = device_snapshot(ip);

        assert_ne!(a.instance_id, b.instance_id);
    }
}
