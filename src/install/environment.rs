// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment configuration installer.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::paths::PathsConfig;
use crate::env::EnvSnapshot;
use crate::error::{FsError, Result};

/// Writes `env` as a JSON object to the environment file of `paths`.
///
/// Any existing file is overwritten. Missing parent directories are not
/// created; they surface as a write failure.
///
/// # Errors
///
/// Returns `FsError::WriteFailed` if the file cannot be written.
pub async fn install_environment_configs(env: &EnvSnapshot, paths: &PathsConfig) -> Result<PathBuf> {
    info!("Installing project environment file");

    let path = paths.environment_file();
    let json = env.to_json()?;

    tokio::fs::write(&path, json.as_bytes())
        .await
        .map_err(|e| FsError::write_failed(&path, e))?;

    debug!(
        path = %path.display(),
        vars = env.len(),
        bytes = json.len(),
        "wrote environment file"
    );
    Ok(path)
}
