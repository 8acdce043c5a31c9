use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by a service-account token.
///
/// Standard RFC 7519 claims plus custom fields via the `extra` map. Every
/// minted token gets a fresh `jti` so the service can de-duplicate them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceClaims {
    /// Issuer (the deployment this token is minted for)
    pub iss: String,

    /// Subject (service-user principal id)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// JWT ID (unique per minted token)
    pub jti: String,

    /// Additional custom fields (flattened into the token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ServiceClaims {
    /// Create claims for a service principal with automatic expiration.
    ///
    /// # Arguments
    /// * `issuer` - Issuer string the deployment expects
    /// * `principal_id` - Service-user id the token acts as
    /// * `validity_hours` - Hours until the token expires
    pub fn for_principal(
        issuer: impl Into<String>,
        principal_id: impl Into<String>,
        validity_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(validity_hours);

        Self {
            iss: issuer.into(),
            sub: principal_id.into(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            extra: HashMap::new(),
        }
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
