//! Flat-file credential store engine
//!
//! Persists every record in a single JSON file guarded by a sibling advisory
//! lock file. Each operation reconstructs the store from disk under the lock,
//! applies one read or mutation, and (for mutations) rewrites the file as a
//! complete snapshot. Nothing is cached between operations; the file is the
//! only shared state, arbitrated by the lock.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{StoreError, StoreResult};
use crate::traits::CredentialStore;
use crate::types::{Credentials, CredentialsMap, StoreFile};

use super::home;
use super::lock::{StoreLock, DEFAULT_LOCK_TIMEOUT};

/// Backing file name under the user home directory.
pub const STORE_FILENAME: &str = ".credfile.json";

/// Flat-file credential store.
///
/// Safe under concurrent invocation by independent OS processes: reads take
/// the same exclusive lock as writes, so every operation observes the last
/// committed snapshot.
pub struct FlatfileStore {
    path: PathBuf,
    lock_path: PathBuf,
    lock_timeout: Duration,
}

impl FlatfileStore {
    /// Open the store at the default location (home directory + fixed filename).
    pub fn open_default() -> StoreResult<Self> {
        let home = home::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(Self::with_path(home.join(STORE_FILENAME)))
    }

    /// Open the store against an explicit backing file path.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock_path = sibling_path(&path, ".lock");
        Self {
            path,
            lock_path,
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Override the lock acquisition bound. Tests use a short bound to keep
    /// contention failures fast.
    #[must_use]
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// Backing file path this store operates on.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling lock file path guarding the backing file.
    #[must_use]
    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    fn acquire_lock(&self) -> StoreResult<StoreLock> {
        StoreLock::acquire(&self.lock_path, self.lock_timeout)
    }

    /// Read and decode the backing file. A missing, empty or malformed file
    /// is treated as an empty store rather than surfaced as an error.
    fn read_all(&self) -> StoreResult<CredentialsMap> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_slice::<StoreFile>(&raw) {
            Ok(file) => Ok(file.store),
            Err(e) => {
                if !raw.iter().all(u8::is_ascii_whitespace) {
                    log::warn!(
                        "store file {} is not valid JSON ({e}), treating as empty",
                        self.path.display()
                    );
                }
                Ok(HashMap::new())
            }
        }
    }

    /// Replace the backing file with a complete snapshot of `store`.
    ///
    /// Writes a private sibling temp file and renames it over the target so
    /// no partial write is ever observable under the backing path.
    fn write_all(&self, store: CredentialsMap) -> StoreResult<()> {
        let data = serde_json::to_vec(&StoreFile { store })
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let tmp_path = sibling_path(&self.path, ".tmp");
        let mut file = create_private(&tmp_path).map_err(io_err)?;
        file.write_all(&data).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(io_err)
    }
}

impl CredentialStore for FlatfileStore {
    fn store(&self, credentials: &Credentials) -> StoreResult<()> {
        if credentials.server_url.is_empty() {
            return Err(StoreError::MissingServerUrl);
        }

        let _lock = self.acquire_lock()?;
        let mut all = self.read_all()?;
        all.insert(credentials.server_url.clone(), credentials.clone());
        self.write_all(all)?;

        log::debug!("stored credentials for {}", credentials.server_url);
        Ok(())
    }

    fn get(&self, server_url: &str) -> StoreResult<(String, String)> {
        if server_url.is_empty() {
            return Err(StoreError::MissingServerUrl);
        }

        let _lock = self.acquire_lock()?;
        let all = self.read_all()?;
        all.get(server_url)
            .map(|c| (c.username.clone(), c.secret.clone()))
            .ok_or(StoreError::NotFound)
    }

    fn erase(&self, server_url: &str) -> StoreResult<()> {
        if server_url.is_empty() {
            return Err(StoreError::MissingServerUrl);
        }

        let _lock = self.acquire_lock()?;
        let mut all = self.read_all()?;
        // Absent key is a no-op success; the snapshot is rewritten either way.
        all.remove(server_url);
        self.write_all(all)?;

        log::debug!("erased credentials for {server_url}");
        Ok(())
    }

    fn list(&self) -> StoreResult<HashMap<String, String>> {
        let _lock = self.acquire_lock()?;
        let all = self.read_all()?;
        Ok(all.into_iter().map(|(url, c)| (url, c.username)).collect())
    }
}

/// Append `suffix` to the file name of `path`, keeping the directory.
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Create (or truncate) a file readable and writable by the owner only.
fn create_private(path: &Path) -> io::Result<fs::File> {
    let mut opts = fs::OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    opts.open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_path_appends_suffix_next_to_file() {
        let path = Path::new("/home/user/.credfile.json");
        assert_eq!(
            sibling_path(path, ".lock"),
            Path::new("/home/user/.credfile.json.lock")
        );
        assert_eq!(
            sibling_path(path, ".tmp"),
            Path::new("/home/user/.credfile.json.tmp")
        );
    }

    #[test]
    fn store_derives_lock_path_from_backing_path() {
        let store = FlatfileStore::with_path("/tmp/creds.json");
        assert_eq!(store.path(), Path::new("/tmp/creds.json"));
        assert_eq!(store.lock_path(), Path::new("/tmp/creds.json.lock"));
    }
}
