use pretty_assertions::assert_eq;
use tempfile::TempDir;
use zoraauth::auth::store::{read_tokens, write_tokens, CredentialFile, CREDENTIAL_KEY};
use zoraauth::auth::{AuthError, TokenSet};

fn sample() -> TokenSet {
    TokenSet {
        domain: "x.com".to_string(),
        client_id: "abc".to_string(),
        access_token: "t1".to_string(),
        refresh_token: "r1".to_string(),
        token_type: "Bearer".to_string(),
    }
}

#[test]
fn token_round_trip_works() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens.yaml");

    write_tokens(&path, &sample()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let file: CredentialFile = serde_yaml::from_str(&raw).unwrap();
    assert_eq!(file.zoraauth, sample());
    assert_eq!(read_tokens(&path).unwrap(), sample());

    let value: serde_yaml::Value = serde_yaml::from_str(&raw).unwrap();
    let inner = value.get(CREDENTIAL_KEY).expect("container key");
    assert_eq!(inner.get("clientId").and_then(|v| v.as_str()), Some("abc"));
    assert_eq!(inner.get("refreshToken").and_then(|v| v.as_str()), Some("r1"));
}

#[test]
fn write_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens.yaml");
    std::fs::write(&path, "x".repeat(4096)).unwrap();

    write_tokens(&path, &sample()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("zoraauth:\n"));
    assert!(!raw.contains("xxxx"));
    assert_eq!(read_tokens(&path).unwrap(), sample());
}

#[cfg(unix)]
#[test]
fn credential_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens.yaml");
    std::fs::write(&path, "old").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    write_tokens(&path, &sample()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn missing_parent_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("tokens.yaml");

    let err = write_tokens(&path, &sample()).unwrap_err();

    assert!(matches!(err, AuthError::Io(_)), "got {err:?}");
    assert!(!path.exists());
}

#[test]
fn read_rejects_file_without_container_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens.yaml");
    std::fs::write(&path, "other:\n  domain: x.com\n").unwrap();

    let err = read_tokens(&path).unwrap_err();

    assert!(matches!(err, AuthError::Decode(_)), "got {err:?}");
}

#[cfg(unix)]
#[test]
fn world_readable_file_is_narrowed_and_rewritten() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens.yaml");
    std::fs::write(&path, "zoraauth: stale\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o666)).unwrap();

    write_tokens(&path, &sample()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0, "group/other bits left: {mode:o}");
    assert_eq!(read_tokens(&path).unwrap(), sample());
}
