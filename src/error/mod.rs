//! Stage-level errors for a login run.

use thiserror::Error;

use crate::auth::AuthError;

/// Terminal failure of a login run, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("{} must be provided", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("failed to request device code: {0}")]
    DeviceCode(#[source] AuthError),

    #[error("failed to poll for token: {0}")]
    Poll(#[source] AuthError),

    #[error("failed to write tokens to file: {0}")]
    Persist(#[source] AuthError),
}

impl LoginError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } | Self::DeviceCode(_) => 1,
            Self::Poll(_) => 2,
            Self::Persist(_) => 3,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LoginError>;
