//! Operator profile value objects.

use crate::domain::protocol::{ProductRecord, ProfileData, ProfileRecord, ServicePointRecord};

/// Placeholder used when a profile has no service points to derive a
/// service name from.
pub const UNKNOWN_SERVICE_NAME: &str = "unknown";

/// Read-only snapshot of the operator profile. Replaced wholesale on each
/// successful fetch, never partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Operator group display name.
    pub group_name: String,
    /// Operator group tag.
    pub group_tag: String,
    /// Contact email.
    pub email: String,
    /// Login name.
    pub login: String,
    /// Administrator flag.
    pub is_admin: bool,
    /// Preferred language code.
    pub language_code: String,
    /// Service type tags.
    pub service_types: Vec<String>,
    /// Terminal-mode flag.
    pub is_terminal: bool,
    /// Derived from the first point's display name; see
    /// [`ServicePoint::short_point_name`].
    pub service_name: String,
    /// Service points assigned to the operator.
    pub points: Vec<ServicePoint>,
}

/// A service point (lounge, hall, desk) the operator works at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePoint {
    /// Airport code.
    pub airport: String,
    /// Whether the point is clear.
    pub is_clear: bool,
    /// Short description.
    pub description_short: String,
    /// Whether multiple concurrent sessions are allowed.
    pub is_multiple_session_enabled: bool,
    /// Photo URLs.
    pub photo_paths: Vec<String>,
    /// Numeric point id.
    pub point_id: i64,
    /// Accounting-system point id.
    pub point_id_1c: String,
    /// Full display name.
    pub point_name: String,
    /// Products sold at the point.
    pub products: Vec<Product>,
    /// Point type tag.
    pub kind: String,
}

/// A product sold at a service point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Whether the product is active.
    pub is_active: bool,
    /// Product locale.
    pub locale: String,
    /// Product name.
    pub name: String,
    /// Offline price in minor units.
    pub offline_price: i64,
    /// Online price in minor units.
    pub online_price: i64,
    /// Numeric product id.
    pub product_id: i64,
}

impl Profile {
    /// Maps a decoded profile payload into the immutable snapshot. A missing
    /// or partial payload degrades to default field values; it never fails.
    #[must_use]
    pub fn from_payload(data: Option<ProfileData>) -> Self {
        let record = data.and_then(|d| d.profile).unwrap_or_default();
        Self::from_record(record)
    }

    fn from_record(record: ProfileRecord) -> Self {
        let points: Vec<ServicePoint> = record
            .points
            .unwrap_or_default()
            .into_iter()
            .map(ServicePoint::from_record)
            .collect();

        let service_name = points
            .first()
            .map_or_else(|| UNKNOWN_SERVICE_NAME.to_string(), ServicePoint::short_point_name);

        Self {
            first_name: record.first_name,
            last_name: record.last_name,
            group_name: record.group_name,
            group_tag: record.group_tag,
            email: record.email,
            login: record.login,
            is_admin: record.is_admin,
            language_code: record.language_code,
            service_types: record.service_type,
            is_terminal: record.terminal,
            service_name,
            points,
        }
    }
}

impl ServicePoint {
    fn from_record(record: ServicePointRecord) -> Self {
        Self {
            airport: record.airport,
            is_clear: record.clear != 0,
            description_short: record.description_short,
            is_multiple_session_enabled: record
                .multiple_session_enable
                .is_some_and(|flag| flag.to_lowercase() == "true"),
            photo_paths: record.photo_path,
            point_id: record.point_id,
            point_id_1c: record.point_id_1c,
            point_name: record.point_name,
            products: record.products.into_iter().map(Product::from_record).collect(),
            kind: record.kind,
        }
    }

    /// Returns the display name with any trailing comma-delimited location
    /// suffix stripped and whitespace trimmed.
    #[must_use]
    pub fn short_point_name(&self) -> String {
        match self.point_name.split(',').next() {
            Some(first) => first.trim().to_string(),
            None => self.point_name.clone(),
        }
    }
}

impl Product {
    fn from_record(record: ProductRecord) -> Self {
        Self {
            is_active: record.active,
            locale: record.locale,
            name: record.name,
            offline_price: record.offline_price,
            online_price: record.online_price,
            product_id: record.product_id,
        }
    }
}
