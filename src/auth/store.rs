use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::AuthError;
use super::token::TokenSet;

/// Key wrapping the token set in the credential file.
pub const CREDENTIAL_KEY: &str = "zoraauth";

#[cfg(unix)]
const CREDENTIAL_FILE_MODE: u32 = 0o600;

/// On-disk layout of the credential file: one [`TokenSet`] under [`CREDENTIAL_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialFile {
    pub zoraauth: TokenSet,
}

/// Write `tokens` as YAML to `path`, replacing any existing file.
///
/// On Unix the file is restricted to its owner. Parent directories are not
/// created.
///
/// # Example
/// ```no_run
/// use zoraauth::auth::{store, TokenSet};
///
/// let tokens = TokenSet {
///     domain: "login.example.com".to_string(),
///     client_id: "client-123".to_string(),
///     access_token: "access".to_string(),
///     refresh_token: "refresh".to_string(),
///     token_type: "Bearer".to_string(),
/// };
/// store::write_tokens("tokens.yaml", &tokens)?;
/// # Ok::<(), zoraauth::auth::AuthError>(())
/// ```
pub fn write_tokens(path: impl AsRef<Path>, tokens: &TokenSet) -> Result<(), AuthError> {
    let path = path.as_ref();
    let file = CredentialFile {
        zoraauth: tokens.clone(),
    };
    let serialized = serde_yaml::to_string(&file)?;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(CREDENTIAL_FILE_MODE);
    }
    let mut handle = options.open(path)?;
    #[cfg(unix)]
    {
        // mode() only applies on creation; an existing file is narrowed before writing
        use std::os::unix::fs::PermissionsExt;
        handle.set_permissions(fs::Permissions::from_mode(CREDENTIAL_FILE_MODE))?;
    }
    handle.write_all(serialized.as_bytes())?;
    handle.flush()?;
    debug!(path = %path.display(), "credential file written");
    Ok(())
}

/// Read the token set back from a credential file written by [`write_tokens`].
pub fn read_tokens(path: impl AsRef<Path>) -> Result<TokenSet, AuthError> {
    let raw = fs::read_to_string(path)?;
    let file: CredentialFile =
        serde_yaml::from_str(&raw).map_err(|err| AuthError::Decode(err.to_string()))?;
    Ok(file.zoraauth)
}
