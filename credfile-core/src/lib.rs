//! Credfile Core Library
//!
//! Store engine for a file-backed credential helper:
//! - a single JSON backing file under the user's home directory
//! - an advisory sibling lock file serializing access across processes
//! - four operations (`store`, `get`, `erase`, `list`) mapping 1:1 onto the
//!   helper protocol commands
//!
//! Each invocation is one synchronous lock -> read -> mutate -> write ->
//! unlock sequence; no state survives between operations within a process.

pub mod error;
pub mod store;
pub mod traits;
pub mod types;

// Re-export common types
pub use error::{StoreError, StoreResult};
pub use store::{FlatfileStore, STORE_FILENAME};
pub use traits::CredentialStore;
pub use types::{Credentials, CredentialsMap};
