//! The login pipeline: device code, user instructions, polling, persistence.

use std::io::Write;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::auth::{store, DeviceFlowClient, Sleeper, TokenPoller, TokenSet};
use crate::config::LoginConfig;
use crate::error::{LoginError, Result};

/// Run one device authorization login and write the tokens to `config.output`.
///
/// User-facing progress goes to `out`; failures are tagged with their stage.
pub async fn handle_login<W: Write>(
    config: &LoginConfig,
    sleeper: Arc<dyn Sleeper>,
    out: &mut W,
) -> Result<TokenSet> {
    let _ = writeln!(out, "Initiating Device Authorization Flow...");

    let mut client = DeviceFlowClient::new(&config.domain, &config.client_id)
        .map_err(LoginError::DeviceCode)?;
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url);
    }

    let device = client
        .request_device_code(&config.audience)
        .await
        .map_err(LoginError::DeviceCode)?;

    let _ = writeln!(out, "{}", device.instructions());
    let _ = writeln!(
        out,
        "Waiting for authorization (code expires at {})...",
        device.expires_at(Utc::now()).format("%H:%M:%S UTC")
    );
    let _ = out.flush();

    let tokens = TokenPoller::new(&client)
        .with_sleeper(sleeper)
        .with_policy(config.policy)
        .poll_for_token(&device.device_code, device.interval, device.expires_in)
        .await
        .map_err(LoginError::Poll)?;

    store::write_tokens(&config.output, &tokens).map_err(LoginError::Persist)?;
    info!(path = %config.output.display(), "tokens saved");
    let _ = writeln!(out, "Tokens saved to {}", config.output.display());

    Ok(tokens)
}
