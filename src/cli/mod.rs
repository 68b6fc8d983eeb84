//! Command-line surface for zoraauth.

pub mod login;

use std::path::PathBuf;

use clap::Parser;

/// Log in through the OAuth 2.0 device authorization grant and save the tokens.
#[derive(Parser, Debug, Default)]
#[command(
    name = "zoraauth",
    version,
    about = "Obtain OAuth tokens with the device authorization flow"
)]
pub struct Cli {
    /// OAuth domain (e.g. Auth0 domain) [env: ZORAAUTH_DOMAIN]
    #[arg(long)]
    pub domain: Option<String>,

    /// OAuth client ID [env: ZORAAUTH_CLIENT_ID]
    #[arg(long = "client-id")]
    pub client_id: Option<String>,

    /// OAuth audience [env: ZORAAUTH_AUDIENCE]
    #[arg(long)]
    pub audience: Option<String>,

    /// Output file for tokens in YAML format, readable by the owner only
    /// [env: ZORAAUTH_OUTPUT] [default: tokens.yaml]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Stop on access_denied/expired_token and back off on slow_down
    #[arg(long)]
    pub honor_provider_errors: bool,

    /// Send requests to this base URL instead of https://<domain>
    #[arg(long, hide = true)]
    pub base_url: Option<String>,

    /// Log HTTP activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
