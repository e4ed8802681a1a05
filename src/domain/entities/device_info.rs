//! Device snapshot attached to login requests.

use serde::Serialize;

/// Immutable device snapshot sent with every login attempt. Constructed
/// fresh per attempt and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    /// Operating system name.
    pub os: String,
    /// Local interface IP address.
    pub ip_address: String,
    /// Per-attempt installation identifier.
    pub instance_id: String,
    /// Device model or host name.
    pub device_model: String,
    /// BCP-47-ish language tag.
    pub locale: String,
    /// Push notification permission state.
    pub push_permission: String,
    /// Operating system version string.
    pub os_version: String,
    /// Client application version.
    pub app_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_snake_case_keys() {
        let info = DeviceInfo {
            os: "linux".to_string(),
            ip_address: "192.168.1.10".to_string(),
            instance_id: "abc-123".to_string(),
            device_model: "workstation".to_string(),
            locale: "en".to_string(),
            push_permission: "denied".to_string(),
            os_version: "6.1".to_string(),
            app_version: "0.1.0".to_string(),
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["ip_address"], "192.168.1.10");
        assert_eq!(value["instance_id"], "abc-123");
        assert_eq!(value["device_model"], "workstation");
        assert_eq!(value["push_permission"], "denied");
        assert_eq!(value["os_version"], "6.1");
        assert_eq!(value["app_version"], "0.1.0");
    }
}
