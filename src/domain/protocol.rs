//! Wire protocol types shared by the port definitions and their adapters.
//!
//! Every backend response carries the same envelope:
//! `{response_code, response_message, data?}`. A `response_code` of zero is
//! the sole success sentinel; any other value is a business failure
//! regardless of HTTP status. Payload records decode leniently: a partial or
//! malformed payload degrades field values instead of failing the decode.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Credentials, DeviceInfo};

/// The success sentinel for `response_code`.
pub const RESPONSE_OK: i32 = 0;

/// Response envelope for endpoints that return a data payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Business status code; zero means success.
    pub response_code: i32,
    /// Human-readable status message.
    #[serde(default)]
    pub response_message: String,
    /// Payload, present on success for data-bearing endpoints.
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Returns whether the envelope reports success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response_code == RESPONSE_OK
    }
}

/// Response envelope for endpoints whose payload the client ignores
/// (`/authByToken`, `/logout`).
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    /// Business status code; zero means success.
    pub response_code: i32,
    /// Human-readable status message.
    #[serde(default)]
    pub response_message: String,
}

impl Ack {
    /// Returns whether the envelope reports success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response_code == RESPONSE_OK
    }
}

/// `POST /login` request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    /// Login name.
    pub login: String,
    /// Password.
    pub password: String,
    /// Device snapshot for this attempt.
    pub device_info: DeviceInfo,
}

impl LoginPayload {
    /// Builds the login body from credentials and a device snapshot.
    #[must_use]
    pub fn new(credentials: &Credentials, device_info: DeviceInfo) -> Self {
        Self {
            login: credentials.login().to_string(),
            password: credentials.password().to_string(),
            device_info,
        }
    }
}

/// `POST /login` success payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginData {
    /// The issued auth token. Its absence on a success envelope is a
    /// protocol violation surfaced as `AuthError::NoToken`.
    #[serde(default)]
    pub token: Option<String>,
}

/// `GET /profile` success payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileData {
    /// Profile record, absent on degraded payloads.
    #[serde(default)]
    pub profile: Option<ProfileRecord>,
}

/// Wire profile record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRecord {
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Operator group display name.
    #[serde(default)]
    pub group_name: String,
    /// Operator group tag.
    #[serde(default)]
    pub group_tag: String,
    /// Administrator flag.
    #[serde(default)]
    pub is_admin: bool,
    /// Preferred language code.
    #[serde(default)]
    pub language_code: String,
    /// Login name.
    #[serde(default)]
    pub login: String,
    /// Service points assigned to the operator.
    #[serde(default)]
    pub points: Option<Vec<ServicePointRecord>>,
    /// Service type tags.
    #[serde(default)]
    pub service_type: Vec<String>,
    /// Terminal-mode flag.
    #[serde(default)]
    pub terminal: bool,
}

/// Wire service point record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServicePointRecord {
    /// Airport code.
    #[serde(default)]
    pub airport: String,
    /// Clear flag, transmitted as an integer; true iff non-zero.
    #[serde(default)]
    pub clear: i64,
    /// Short description.
    #[serde(default)]
    pub description_short: String,
    /// Multiple-session flag, transmitted as a string; true iff its
    /// lowercase form equals `"true"`.
    #[serde(default)]
    pub multiple_session_enable: Option<String>,
    /// Photo URLs.
    #[serde(default)]
    pub photo_path: Vec<String>,
    /// Numeric point id.
    #[serde(default)]
    pub point_id: i64,
    /// Accounting-system point id.
    #[serde(default)]
    pub point_id_1c: String,
    /// Display name, possibly with a comma-delimited location suffix.
    #[serde(default)]
    pub point_name: String,
    /// Products sold at the point.
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    /// Point type tag.
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Wire product record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRecord {
    /// Whether the product is active.
    #[serde(default)]
    pub active: bool,
    /// Product locale.
    #[serde(default)]
    pub locale: String,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Offline price in minor units.
    #[serde(default)]
    pub offline_price: i64,
    /// Online price in minor units.
    #[serde(default)]
    pub online_price: i64,
    /// Numeric product id.
    #[serde(default)]
    pub product_id: i64,
}

/// Backend response-code policy. The session-expiry band and the
/// credential-rejection code are protocol inputs, injectable for tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPolicy {
    /// Lowest response code of the session-expiry band, inclusive.
    pub session_expired_min: i32,
    /// Highest response code of the session-expiry band, inclusive.
    pub session_expired_max: i32,
    /// Response code denoting credential rejection during login.
    pub invalid_credentials_code: i32,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            session_expired_min: 20,
            session_expired_max: 22,
            invalid_credentials_code: 22,
        }
    }
}

impl SessionPolicy {
    /// Returns whether `code` falls inside the session-expiry band.
    #[must_use]
    pub fn is_session_expired(&self, code: i32) -> bool {
        (self.session_expired_min..=self.session_expired_max).contains(&code)
    }

    /// Returns whether `code` denotes credential rejection.
    #[must_use]
    pub fn is_invalid_credentials(&self, code: i32) -> bool {
        code == self.invalid_credentials_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_band() {
        let policy = SessionPolicy::default();

        assert!(policy.is_session_expired(20));
        assert!(policy.is_session_expired(21));
        assert!(policy.is_session_expired(22));
        assert!(!policy.is_session_expired(19));
        assert!(!policy.is_session_expired(23));
        assert!(!policy.is_session_expired(0));
        assert!(policy.is_invalid_credentials(22));
    }

    #[test]
    fn test_envelope_decodes_without_message_or_data() {
        let envelope: Envelope<LoginData> =
            serde_json::from_str(r#"{"response_code": 0}"#).unwrap();

        assert!(envelope.is_success());
        assert!(envelope.response_message.is_empty());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_envelope_requires_response_code() {
        let result: Result<Envelope<LoginData>, _> =
            serde_json::from_str(r#"{"response_message": "ok"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_partial_profile_payload_decodes_with_defaults() {
        let raw = r#"{
            "response_code": 0,
            "response_message": "",
            "data": {"profile": {"first_name": "Dana", "points": [{"point_name": "Lounge"}]}}
        }"#;

        let envelope: Envelope<ProfileData> = serde_json::from_str(raw).unwrap();
        let record = envelope.data.unwrap().profile.unwrap();

        assert_eq!(record.first_name, "Dana");
        assert_eq!(record.email, "");
        assert!(!record.is_admin);
        assert!(record.service_type.is_empty());

        let point = &record.points.unwrap()[0];
        assert_eq!(point.point_name, "Lounge");
        assert_eq!(point.clear, 0);
        assert!(point.multiple_session_enable.is_none());
        assert!(point.products.is_empty());
    }

    #[test]
    fn test_login_payload_wire_shape() {
        let credentials = Credentials::new("operator", "s3cret");
        let device_info = DeviceInfo {
            os: "linux".to_string(),
            ip_address: "10.0.0.2".to_string(),
            instance_id: "i-1".to_string(),
            device_model: "box".to_string(),
            locale: "en".to_string(),
            push_permission: "denied".to_string(),
            os_version: "6.1".to_string(),
            app_version: "0.1.0".to_string(),
        };

        let value = serde_json::to_value(LoginPayload::new(&credentials, device_info)).unwrap();

        assert_eq!(value["login"], "operator");
        assert_eq!(value["password"], "s3cret");
        assert_eq!(value["device_info"]["os"], "linux");
    }
}
