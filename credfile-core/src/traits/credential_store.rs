//! Credential store abstraction trait

use std::collections::HashMap;

use crate::error::StoreResult;
use crate::types::Credentials;

/// Credential store trait.
///
/// The four operations map 1:1 onto the helper protocol commands
/// (`store`, `get`, `erase`, `list`). Implementations must be safe under
/// concurrent invocation by independent OS processes; within a process each
/// call is a single synchronous sequence with no state shared between calls.
pub trait CredentialStore {
    /// Insert or overwrite the entry for `credentials.server_url`.
    ///
    /// Fails with [`StoreError::MissingServerUrl`](crate::StoreError::MissingServerUrl)
    /// when the server URL is empty. An existing entry is replaced whole, no
    /// field merging.
    fn store(&self, credentials: &Credentials) -> StoreResult<()>;

    /// Look up the entry for `server_url`.
    ///
    /// # Returns
    /// * `Ok((username, secret))` - entry exists
    /// * `Err(NotFound)` - no entry for this server URL
    fn get(&self, server_url: &str) -> StoreResult<(String, String)>;

    /// Remove the entry for `server_url`.
    ///
    /// Removing an absent entry is a no-op success, not an error.
    fn erase(&self, server_url: &str) -> StoreResult<()>;

    /// Project every stored entry to `server_url -> username`.
    ///
    /// An empty store yields an empty mapping, never an error.
    fn list(&self) -> StoreResult<HashMap<String, String>>;
}
