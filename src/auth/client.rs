use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::debug;

use crate::auth::device_code::{DeviceAuthorization, DeviceCodePoll};
use crate::auth::error::AuthError;
use crate::auth::token::{TokenErrorResponse, TokenResponse};

const DEVICE_CODE_PATH: &str = "/oauth/device/code";
const TOKEN_PATH: &str = "/oauth/token";
const DEVICE_CODE_SCOPE: &str = "profile%20email%20offline_access%20openid";
const DEVICE_CODE_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:device_code";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for a provider's device authorization and token endpoints.
///
/// Request bodies are assembled verbatim: `client_id`, `audience` and the
/// device code are inserted as given, so callers pre-encode them if needed.
///
/// # Example
/// ```no_run
/// use zoraauth::auth::DeviceFlowClient;
///
/// # async fn example() -> Result<(), zoraauth::auth::AuthError> {
/// let client = DeviceFlowClient::new("login.example.com", "client-123")?;
/// let device = client.request_device_code("https://api.example.com").await?;
/// println!("{}", device.instructions());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DeviceFlowClient {
    client: reqwest::Client,
    domain: String,
    client_id: String,
    base_url: String,
}

impl DeviceFlowClient {
    pub fn new(domain: impl Into<String>, client_id: impl Into<String>) -> Result<Self, AuthError> {
        let domain = domain.into();
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: format!("https://{domain}"),
            domain,
            client_id: client_id.into(),
        })
    }

    /// Send requests to `url` instead of `https://{domain}`.
    ///
    /// The domain recorded in issued token sets is left unchanged.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub async fn request_device_code(
        &self,
        audience: &str,
    ) -> Result<DeviceAuthorization, AuthError> {
        let url = format!("{}{DEVICE_CODE_PATH}", self.base_url);
        let body = format!(
            "client_id={}&scope={DEVICE_CODE_SCOPE}&audience={audience}",
            self.client_id
        );
        debug!(url = %url, "requesting device code");
        let resp = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        let status = resp.status();
        if status != StatusCode::OK {
            // drain the body; the status is the reported failure either way
            let _ = resp.bytes().await;
            return Err(AuthError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        let payload = resp.text().await?;
        let device: DeviceAuthorization = serde_json::from_str(&payload)?;
        debug!(
            interval = device.interval,
            expires_in = device.expires_in,
            "device code issued"
        );
        Ok(device)
    }

    /// Make one token request for `device_code`.
    ///
    /// Only HTTP 200 yields [`DeviceCodePoll::Authorized`]. Any other status is
    /// classified by the standard `error` field of its body, and anything
    /// unrecognized is reported as [`DeviceCodePoll::Pending`].
    pub async fn poll_device_code(&self, device_code: &str) -> Result<DeviceCodePoll, AuthError> {
        let url = format!("{}{TOKEN_PATH}", self.base_url);
        let body = format!(
            "client_id={}&grant_type={DEVICE_CODE_GRANT_TYPE}&device_code={device_code}",
            self.client_id
        );
        let resp = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        let status = resp.status();
        let payload = resp.text().await?;
        debug!(url = %url, status = status.as_u16(), "token endpoint responded");

        if status == StatusCode::OK {
            let token: TokenResponse = serde_json::from_str(&payload)?;
            return Ok(DeviceCodePoll::Authorized {
                token: token.into_token_set(&self.domain, &self.client_id),
            });
        }

        let error = serde_json::from_str::<TokenErrorResponse>(&payload)
            .ok()
            .and_then(|body| body.error);
        Ok(match error.as_deref() {
            Some("slow_down") => DeviceCodePoll::SlowDown,
            Some("access_denied") => DeviceCodePoll::AccessDenied,
            Some("expired_token") => DeviceCodePoll::Expired,
            _ => DeviceCodePoll::Pending,
        })
    }
}
