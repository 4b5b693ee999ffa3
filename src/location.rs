// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Location of the running installer.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{FsError, InstallerResult};

/// Returns the absolute directory containing the running installer executable.
///
/// Resolved once per process; later calls return the same path.
///
/// # Errors
///
/// Returns `FsError::LocationUnavailable` if the executable path cannot be
/// determined or canonicalized. Callers treat this as fatal.
pub fn current_directory() -> InstallerResult<&'static Path> {
    static CURRENT_DIR: OnceLock<PathBuf> = OnceLock::new();

    if let Some(dir) = CURRENT_DIR.get() {
        return Ok(dir.as_path());
    }
    let dir = resolve_directory().map_err(FsError::LocationUnavailable)?;
    Ok(CURRENT_DIR.get_or_init(|| dir).as_path())
}

fn resolve_directory() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::current_directory;

    #[test]
    fn test_current_directory_is_absolute() {
        let dir = current_directory().unwrap();
        assert!(dir.is_absolute(), "{} is not absolute", dir.display());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_current_directory_is_stable() {
        let first = current_directory().unwrap();
        let second = current_directory().unwrap();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_current_directory_contains_executable() {
        let exe = std::env::current_exe().unwrap().canonicalize().unwrap();
        assert_eq!(exe.parent(), Some(current_directory().unwrap()));
    }
}
