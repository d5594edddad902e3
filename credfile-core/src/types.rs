//! Credential record types shared between the store engine and the helper protocol

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One server-URL credential entry.
///
/// Field names on the wire are `ServerURL`/`Username`/`Secret`, matching the
/// payload shape hosts exchange with credential helpers. The secret is opaque:
/// never validated or transformed by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "ServerURL")]
    pub server_url: String,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Secret", default)]
    pub secret: String,
}

/// Mapping of server URL -> credential entry. At most one entry per server URL.
pub type CredentialsMap = HashMap<String, Credentials>;

/// On-disk shape of the backing file: a single object with one `store` field.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct StoreFile {
    #[serde(default)]
    pub(crate) store: CredentialsMap,
}
