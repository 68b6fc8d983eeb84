//! zoraauth — OAuth 2.0 device authorization grant login.
//!
//! Requests a device code from `https://{domain}/oauth/device/code`, asks the
//! user to approve it in a browser, polls `https://{domain}/oauth/token` at a
//! fixed interval, and writes the resulting tokens to a YAML credential file.
//!
//! # Quick Start
//!
//! ```no_run
//! use zoraauth::auth::{store, DeviceFlowClient, TokenPoller};
//!
//! # async fn example() -> Result<(), zoraauth::auth::AuthError> {
//! let client = DeviceFlowClient::new("login.example.com", "client-123")?;
//! let device = client.request_device_code("https://api.example.com").await?;
//! println!("{}", device.instructions());
//! let tokens = TokenPoller::new(&client)
//!     .poll_for_token(&device.device_code, device.interval, device.expires_in)
//!     .await?;
//! store::write_tokens("tokens.yaml", &tokens)?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
