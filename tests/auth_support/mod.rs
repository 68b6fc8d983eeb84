#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use wiremock::MockServer;
use zoraauth::auth::{DeviceFlowClient, Sleeper, TokenSet};

pub const DOMAIN: &str = "login.example.com";
pub const CLIENT_ID: &str = "client-123";
pub const AUDIENCE: &str = "https://api.example.com";

/// Sleeper that records requested delays without waiting.
#[derive(Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().expect("sleeper lock poisoned").clone()
    }

    pub fn total(&self) -> Duration {
        self.sleeps().iter().sum()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps
            .lock()
            .expect("sleeper lock poisoned")
            .push(duration);
    }
}

pub fn client_for(server: &MockServer) -> DeviceFlowClient {
    DeviceFlowClient::new(DOMAIN, CLIENT_ID)
        .expect("build client")
        .with_base_url(server.uri())
}

/// Base URL of a local port with nothing listening on it.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn device_code_body(interval: u64, expires_in: u64) -> Value {
    json!({
        "device_code": "device-abc",
        "user_code": "ABCD-EFGH",
        "verification_uri": "https://login.example.com/activate",
        "verification_uri_complete": "https://login.example.com/activate?user_code=ABCD-EFGH",
        "expires_in": expires_in,
        "interval": interval
    })
}

pub fn token_body() -> Value {
    json!({
        "access_token": "access-1",
        "refresh_token": "refresh-1",
        "token_type": "Bearer",
        "expires_in": 86400,
        "scope": "openid profile email offline_access"
    })
}

pub fn token_set() -> TokenSet {
    TokenSet {
        domain: DOMAIN.to_string(),
        client_id: CLIENT_ID.to_string(),
        access_token: "access-1".to_string(),
        refresh_token: "refresh-1".to_string(),
        token_type: "Bearer".to_string(),
    }
}

pub fn token_body_string(device_code: &str) -> String {
    format!(
        "client_id={CLIENT_ID}&grant_type=urn:ietf:params:oauth:grant-type:device_code&device_code={device_code}"
    )
}
