//! Request/response payload handling for the helper protocol
//!
//! `store` receives a JSON credentials object on stdin; `get` and `erase`
//! receive a bare server URL line. Responses for `get` and `list` are JSON on
//! stdout. Hosts match on error text, so the display strings of the store
//! errors are part of the protocol surface.

use std::collections::HashMap;
use std::io::Read;

use credfile_core::{Credentials, StoreError, StoreResult};

/// Decode the `store` payload.
///
/// An empty or unparseable payload is reported as missing credentials rather
/// than a serialization fault: from the store's point of view the host sent
/// no usable record.
pub fn read_credentials(mut input: impl Read) -> StoreResult<Credentials> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .map_err(|_| StoreError::MissingCredentials)?;
    serde_json::from_str(raw.trim()).map_err(|_| StoreError::MissingCredentials)
}

/// Read the bare server URL payload for `get`/`erase`.
///
/// Hosts terminate the payload with a newline; surrounding whitespace is not
/// part of the URL. Emptiness is validated by the store engine, not here.
pub fn read_server_url(mut input: impl Read) -> StoreResult<String> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .map_err(|_| StoreError::MissingServerUrl)?;
    Ok(raw.trim().to_string())
}

/// Encode the `get` response.
pub fn format_credentials(
    server_url: &str,
    username: &str,
    secret: &str,
) -> StoreResult<String> {
    let credentials = Credentials {
        server_url: server_url.to_string(),
        username: username.to_string(),
        secret: secret.to_string(),
    };
    serde_json::to_string(&credentials).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Encode the `list` response.
pub fn format_list(list: &HashMap<String, String>) -> StoreResult<String> {
    serde_json::to_string(list).map_err(|e| StoreError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn read_credentials_decodes_protocol_payload() {
        let payload = r#"{"ServerURL":"https://x.io","Username":"alice","Secret":"s3cr3t"}"#;
        let creds = read_credentials(payload.as_bytes()).unwrap();
        assert_eq!(creds.server_url, "https://x.io");
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.secret, "s3cr3t");
    }

    #[test]
    fn read_credentials_rejects_empty_and_garbage_payloads() {
        for payload in ["", "   \n", "not json at all"] {
            let err = read_credentials(payload.as_bytes()).unwrap_err();
            assert!(matches!(err, StoreError::MissingCredentials));
        }
    }

    #[test]
    fn read_server_url_strips_trailing_newline() {
        let url = read_server_url("https://x.io\n".as_bytes()).unwrap();
        assert_eq!(url, "https://x.io");
    }

    #[test]
    fn format_credentials_uses_protocol_field_names() {
        let out = format_credentials("https://x.io", "alice", "s3cr3t").unwrap();
        let decoded: Credentials = serde_json::from_str(&out).unwrap();
        assert_eq!(decoded.username, "alice");
        assert!(out.contains("\"ServerURL\""));
        assert!(out.contains("\"Secret\""));
    }

    #[test]
    fn format_list_encodes_plain_object() {
        let mut list = HashMap::new();
        list.insert("https://x.io".to_string(), "alice".to_string());
        let out = format_list(&list).unwrap();
        assert_eq!(out, r#"{"https://x.io":"alice"}"#);
    }
}
