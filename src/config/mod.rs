//! Run configuration (layered: flags > environment > defaults).

use std::path::PathBuf;

use crate::auth::PollPolicy;
use crate::cli::Cli;
use crate::error::{LoginError, Result};

/// Output path used when neither `--output` nor `ZORAAUTH_OUTPUT` is set.
pub const DEFAULT_OUTPUT: &str = "tokens.yaml";

pub const ENV_DOMAIN: &str = "ZORAAUTH_DOMAIN";
pub const ENV_CLIENT_ID: &str = "ZORAAUTH_CLIENT_ID";
pub const ENV_AUDIENCE: &str = "ZORAAUTH_AUDIENCE";
pub const ENV_OUTPUT: &str = "ZORAAUTH_OUTPUT";

/// Fully resolved settings for one login run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    pub domain: String,
    pub client_id: String,
    pub audience: String,
    pub output: PathBuf,
    pub policy: PollPolicy,
    pub base_url: Option<String>,
}

impl LoginConfig {
    /// Resolve flags against `env`, failing if domain, client id or audience is missing.
    ///
    /// Empty values count as missing.
    pub fn resolve<F>(cli: &Cli, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |flag: &Option<String>, key: &str| {
            flag.clone()
                .filter(|value| !value.is_empty())
                .or_else(|| env(key).filter(|value| !value.is_empty()))
        };

        let domain = pick(&cli.domain, ENV_DOMAIN);
        let client_id = pick(&cli.client_id, ENV_CLIENT_ID);
        let audience = pick(&cli.audience, ENV_AUDIENCE);

        let mut missing = Vec::new();
        if domain.is_none() {
            missing.push("--domain");
        }
        if client_id.is_none() {
            missing.push("--client-id");
        }
        if audience.is_none() {
            missing.push("--audience");
        }
        let (Some(domain), Some(client_id), Some(audience)) = (domain, client_id, audience) else {
            return Err(LoginError::Validation { missing });
        };

        let output = cli
            .output
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| env(ENV_OUTPUT).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let policy = if cli.honor_provider_errors {
            PollPolicy::Rfc8628
        } else {
            PollPolicy::Lenient
        };

        Ok(Self {
            domain,
            client_id,
            audience,
            output,
            policy,
            base_url: cli.base_url.clone().filter(|url| !url.is_empty()),
        })
    }
}
