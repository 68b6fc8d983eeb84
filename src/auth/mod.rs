//! OAuth device authorization grant and token persistence.

pub mod client;
pub mod device_code;
pub mod error;
pub mod poller;
pub mod store;
pub mod token;

pub use client::DeviceFlowClient;
pub use device_code::{DeviceAuthorization, DeviceCodePoll};
pub use error::AuthError;
pub use poller::{PollPolicy, Sleeper, TokenPoller, TokioSleeper};
pub use store::{read_tokens, write_tokens, CredentialFile};
pub use token::TokenSet;
