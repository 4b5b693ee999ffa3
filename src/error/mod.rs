// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!    InstallerError (~16 bytes)
//!            |
//!   +------+-+---+------+
//!   |      |     |      |
//!   v      v     v      v
//! Config  Fs   Json    Io
//!  Box    Box  Box     Box
//!
//! Sub-errors:
//!   Config  InvalidValue
//!   Fs      WriteFailed, LocationUnavailable
//!   Json    Read, Parse
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`InstallerError`].
pub type InstallerResult<T> = std::result::Result<T, InstallerError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// JSON file could not be read or decoded.
    #[error("json error: {0}")]
    Json(#[from] Box<JsonFileError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for InstallerError {
                fn from(err: $error) -> Self {
                    InstallerError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    FsError => Fs,
    JsonFileError => Json,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// A configuration file could not be written.
    #[error("failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The location of the running executable could not be determined.
    #[error("cannot resolve installer location: {0}")]
    LocationUnavailable(#[source] std::io::Error),
}

impl FsError {
    pub(crate) fn write_failed(path: &Path, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.display().to_string(),
            source,
        }
    }
}

// --- JSON File Errors ---

/// Errors from reading a JSON document off disk.
#[derive(Debug, Error)]
pub enum JsonFileError {
    /// The file is missing or unreadable.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid JSON.
    #[error("failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl JsonFileError {
    /// Path of the offending file.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// Whether the read failed because the file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// Whether the file was read but did not decode as JSON.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
