//! Home directory resolution
//!
//! Single capability behind which the platform strategies live: `dirs`
//! handles the prevailing convention, the environment fallbacks cover
//! stripped-down environments where it comes back empty.

use std::path::PathBuf;

/// Resolve the user's home directory, if any.
pub(crate) fn home_dir() -> Option<PathBuf> {
    if let Some(dir) = dirs::home_dir() {
        if !dir.as_os_str().is_empty() {
            return Some(dir);
        }
    }
    env_home()
}

#[cfg(windows)]
fn env_home() -> Option<PathBuf> {
    use std::env;

    let drive = env::var("HOMEDRIVE").unwrap_or_default();
    let path = env::var("HOMEPATH").unwrap_or_default();
    let joined = format!("{drive}{path}");
    if !joined.is_empty() {
        return Some(PathBuf::from(joined));
    }

    env::var("USERPROFILE")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(not(windows))]
fn env_home() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
