use thiserror::Error;

/// Errors raised by the device flow components.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("unexpected response status: {status}")]
    UnexpectedStatus { status: u16 },
    #[error("failed to parse JSON response: {0}")]
    Decode(String),
    #[error("failed to encode tokens: {0}")]
    Encode(String),
    #[error("failed to retrieve tokens within the expiration time")]
    Expired,
    #[error("authorization was denied by the user")]
    AccessDenied,
    #[error("IO error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<std::io::Error> for AuthError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

impl From<serde_yaml::Error> for AuthError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Encode(error.to_string())
    }
}
