//! Bounded-timeout inter-process lock on the backing file

use std::path::Path;
use std::time::{Duration, Instant};

use fslock::LockFile;

use crate::error::{StoreError, StoreResult};

/// Default bound on lock acquisition.
pub(crate) const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(10);

/// Polling interval while another process holds the lock.
const RETRY_INTERVAL: Duration = Duration::from_millis(50);

/// RAII guard over the advisory lock file.
///
/// The lock is released when the guard drops, which covers every exit path
/// out of an operation, early error returns included. No fairness among
/// waiters: acquisition polls until the bound elapses.
#[derive(Debug)]
pub(crate) struct StoreLock {
    _file: LockFile,
}

impl StoreLock {
    /// Acquire the lock at `path`, waiting at most `timeout`.
    pub(crate) fn acquire(path: &Path, timeout: Duration) -> StoreResult<Self> {
        let mut file = LockFile::open(path.as_os_str()).map_err(|source| StoreError::LockFailure {
            path: path.to_path_buf(),
            source,
        })?;

        let deadline = Instant::now() + timeout;
        loop {
            let locked = file.try_lock().map_err(|source| StoreError::LockFailure {
                path: path.to_path_buf(),
                source,
            })?;
            if locked {
                return Ok(Self { _file: file });
            }
            if Instant::now() >= deadline {
                log::warn!(
                    "gave up waiting for lock on {} after {timeout:?}",
                    path.display()
                );
                return Err(StoreError::LockTimeout {
                    path: path.to_path_buf(),
                });
            }
            std::thread::sleep(RETRY_INTERVAL);
        }
    }
}
