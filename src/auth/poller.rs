use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::auth::client::DeviceFlowClient;
use crate::auth::device_code::DeviceCodePoll;
use crate::auth::error::AuthError;
use crate::auth::token::TokenSet;

/// Interval used when the provider reports none (RFC 8628 §3.2).
pub const DEFAULT_INTERVAL_SECS: u64 = 5;
/// Extra delay added per `slow_down` under [`PollPolicy::Rfc8628`].
pub const SLOW_DOWN_STEP_SECS: u64 = 5;

/// Delay between token requests.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// How non-200 token responses are treated while polling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PollPolicy {
    /// Every non-200 response means "not yet authorized"; the interval never changes.
    #[default]
    Lenient,
    /// Stop on `access_denied`/`expired_token` and back off on `slow_down`.
    Rfc8628,
}

/// Fixed-interval poller for the device-code token endpoint.
///
/// Elapsed time is the sum of the intervals slept, in whole seconds; request
/// latency is not counted, so the last attempt may land after `expires_in`.
pub struct TokenPoller<'a> {
    client: &'a DeviceFlowClient,
    sleeper: Arc<dyn Sleeper>,
    policy: PollPolicy,
}

impl<'a> TokenPoller<'a> {
    pub fn new(client: &'a DeviceFlowClient) -> Self {
        Self {
            client,
            sleeper: Arc::new(TokioSleeper),
            policy: PollPolicy::default(),
        }
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Poll until the grant is authorized or `expires_in` seconds have been slept.
    ///
    /// Transport and decode failures abort immediately.
    pub async fn poll_for_token(
        &self,
        device_code: &str,
        interval: u64,
        expires_in: u64,
    ) -> Result<TokenSet, AuthError> {
        let mut interval = if interval == 0 {
            DEFAULT_INTERVAL_SECS
        } else {
            interval
        };
        let mut elapsed: u64 = 0;
        let mut attempt: u32 = 0;

        while elapsed < expires_in {
            self.sleeper.sleep(Duration::from_secs(interval)).await;
            elapsed = elapsed.saturating_add(interval);
            attempt += 1;

            let outcome = self.client.poll_device_code(device_code).await?;
            match (self.policy, outcome) {
                (_, DeviceCodePoll::Authorized { token }) => {
                    info!(attempt, elapsed, "device authorization completed");
                    return Ok(token);
                }
                (PollPolicy::Rfc8628, DeviceCodePoll::AccessDenied) => {
                    warn!(attempt, "provider reported access_denied");
                    return Err(AuthError::AccessDenied);
                }
                (PollPolicy::Rfc8628, DeviceCodePoll::Expired) => {
                    warn!(attempt, "provider reported expired_token");
                    return Err(AuthError::Expired);
                }
                (PollPolicy::Rfc8628, DeviceCodePoll::SlowDown) => {
                    interval = interval.saturating_add(SLOW_DOWN_STEP_SECS);
                    debug!(attempt, elapsed, interval, "provider asked to slow down");
                }
                (_, other) => {
                    debug!(attempt, elapsed, outcome = ?other, "authorization pending");
                }
            }
        }

        Err(AuthError::Expired)
    }
}
