// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Data directory layout.
//!
//! ```text
//! [root/]            (unset: current working directory)
//!   Data/
//!     Configs/
//!       Environment.json
//! ```
//!
//! With no `root`, every path stays relative so the installer writes to
//! `Data/Configs/Environment.json` under whatever directory it runs from.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::error::ConfigError;

/// Where installed configuration files land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root. Relative data paths are joined onto it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Data directory, relative to `root`.
    pub data: PathBuf,
    /// Config directory, relative to `data`.
    pub configs: PathBuf,
    /// File name of the environment snapshot inside `configs`.
    pub environment_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: None,
            data: PathBuf::from("Data"),
            configs: PathBuf::from("Configs"),
            environment_file: "Environment.json".to_string(),
        }
    }
}

impl PathsConfig {
    /// Layout rooted at `root`, other settings left at their defaults.
    #[must_use]
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    /// `[root/]data`.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        match &self.root {
            Some(root) => root.join(&self.data),
            None => self.data.clone(),
        }
    }

    /// `[root/]data/configs`.
    #[must_use]
    pub fn configs_dir(&self) -> PathBuf {
        self.data_dir().join(&self.configs)
    }

    /// Target path of the environment installer.
    #[must_use]
    pub fn environment_file(&self) -> PathBuf {
        self.configs_dir().join(&self.environment_file)
    }

    /// Check that the layout describes a usable file location.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a directory entry is empty or the
    /// environment file name is not a single plain path component.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
            section: "paths".to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.data.as_os_str().is_empty() {
            return Err(invalid("data", "must not be empty"));
        }
        if self.configs.as_os_str().is_empty() {
            return Err(invalid("configs", "must not be empty"));
        }

        let mut components = Path::new(&self.environment_file).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(invalid(
                "environment_file",
                &format!("expected a plain file name, got '{}'", self.environment_file),
            )),
        }
    }
}
