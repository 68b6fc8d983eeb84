use serde::{Deserialize, Serialize};

/// Credentials obtained from a completed device authorization.
///
/// Serialized field names follow the credential file layout consumed by
/// downstream tools (`clientId`, `accessToken`, ...).
///
/// # Example
/// ```
/// use zoraauth::auth::TokenSet;
///
/// let tokens = TokenSet {
///     domain: "login.example.com".to_string(),
///     client_id: "client-123".to_string(),
///     access_token: "access".to_string(),
///     refresh_token: "refresh".to_string(),
///     token_type: "Bearer".to_string(),
/// };
/// assert_eq!(tokens.token_type, "Bearer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    pub domain: String,
    pub client_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Successful token-endpoint payload.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub(crate) fn into_token_set(self, domain: &str, client_id: &str) -> TokenSet {
        TokenSet {
            domain: domain.to_string(),
            client_id: client_id.to_string(),
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type,
        }
    }
}

/// Error payload of a non-200 token-endpoint response (RFC 8628 §3.5).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TokenErrorResponse {
    pub error: Option<String>,
}
