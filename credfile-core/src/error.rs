//! Unified error type definition

use std::path::PathBuf;

use thiserror::Error;

/// Store layer error type
#[derive(Error, Debug)]
pub enum StoreError {
    /// A get/erase call was made with an empty server URL
    #[error("missing server url")]
    MissingServerUrl,

    /// A store call was made without a usable credentials payload
    #[error("missing credentials")]
    MissingCredentials,

    /// No record exists for the requested server URL
    #[error("credentials not found in the store")]
    NotFound,

    /// The inter-process lock could not be acquired within the bound
    #[error("timed out waiting for lock on {}", path.display())]
    LockTimeout { path: PathBuf },

    /// The inter-process lock could not be opened or acquired at all
    #[error("unable to lock {}: {source}", path.display())]
    LockFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file could not be read or written
    #[error("unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store could not be encoded for persistence
    #[error("unable to encode store: {0}")]
    Serialization(String),

    /// The user home directory could not be resolved
    #[error("unable to resolve home directory")]
    NoHomeDir,
}

impl StoreError {
    /// Whether this is expected behavior (user input, resource does not exist, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when
    /// returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingServerUrl | Self::MissingCredentials | Self::NotFound
        )
    }
}

/// Store layer Result type alias
pub type StoreResult<T> = std::result::Result<T, StoreError>;
