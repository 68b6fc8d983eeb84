use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};

use super::TokenSet;

/// Device-code grant details returned by the provider's device endpoint.
///
/// Fields missing from the response fall back to their empty values; the
/// provider payload is not otherwise validated. Both `verification_uri` and
/// `verification_URI` spellings are accepted, and negative durations read as 0.
///
/// # Example
/// ```
/// use zoraauth::auth::DeviceAuthorization;
///
/// let device: DeviceAuthorization = serde_json::from_str(
///     r#"{"device_code":"dev-1","user_code":"ABCD-EFGH","interval":5,"expires_in":900}"#,
/// )?;
/// assert_eq!(device.user_code, "ABCD-EFGH");
/// assert!(device.verification_uri.is_empty());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceAuthorization {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri: String,
    pub verification_uri_complete: String,
    pub expires_in: u64,
    pub interval: u64,
}

/// Raw device endpoint payload; each URI spelling decodes on its own so a
/// body carrying both is not rejected as a duplicate field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeviceCodeResponse {
    device_code: String,
    user_code: String,
    verification_uri: Option<String>,
    #[serde(rename = "verification_URI")]
    verification_uri_upper: Option<String>,
    verification_uri_complete: Option<String>,
    #[serde(rename = "verification_URI_complete")]
    verification_uri_complete_upper: Option<String>,
    expires_in: i64,
    interval: i64,
}

impl<'de> Deserialize<'de> for DeviceAuthorization {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        DeviceCodeResponse::deserialize(deserializer).map(DeviceCodeResponse::into_authorization)
    }
}

impl DeviceCodeResponse {
    fn into_authorization(self) -> DeviceAuthorization {
        DeviceAuthorization {
            device_code: self.device_code,
            user_code: self.user_code,
            verification_uri: self
                .verification_uri_upper
                .or(self.verification_uri)
                .unwrap_or_default(),
            verification_uri_complete: self
                .verification_uri_complete_upper
                .or(self.verification_uri_complete)
                .unwrap_or_default(),
            expires_in: u64::try_from(self.expires_in).unwrap_or(0),
            interval: u64::try_from(self.interval).unwrap_or(0),
        }
    }
}

impl DeviceAuthorization {
    /// Wall-clock deadline for this grant, measured from `issued_at`.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> DateTime<Utc> {
        let secs = i64::try_from(self.expires_in).unwrap_or(i64::MAX);
        Duration::try_seconds(secs)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Text shown to the user so they can approve the grant in a browser.
    pub fn instructions(&self) -> String {
        format!(
            "Please visit {} and enter code: {}, or visit: {}",
            self.verification_uri, self.user_code, self.verification_uri_complete
        )
    }
}

/// Outcome of a single token-endpoint poll.
#[derive(Debug, Clone)]
pub enum DeviceCodePoll {
    Authorized { token: TokenSet },
    Pending,
    SlowDown,
    AccessDenied,
    Expired,
}
