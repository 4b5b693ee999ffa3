// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Installer logging.
//!
//! Installer intent lines ("Installing project environment file") are INFO,
//! target paths and byte counts are DEBUG. Everything goes to stderr so that
//! `read-json` and `location` keep stdout clean for their output.
//!
//! ```text
//!            LogConfig
//!                |
//!           init_logging
//!          /            \
//!   stderr layer      file layer (--log-file)
//!   console_level     file_level, non-blocking, no ANSI
//!   ANSI if a tty
//!          \            /
//!            LogGuard   (drains the file writer on drop)
//! ```

use std::io::IsTerminal;
use std::path::Path;

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ConfigError, Result};

/// Verbosity tier, `0..=6`, as given by `-l`/`--file-log-level` or the
/// `[global]` section of `installer.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    /// No output at all, not even failed writes.
    pub const SILENT: Self = Self(0);
    /// Only failures such as an unwritable `Data/Configs`.
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    /// One line per installer that runs. Console default.
    pub const INFO: Self = Self(3);
    /// Adds target paths, variable counts and byte counts.
    pub const DEBUG: Self = Self(4);
    /// Everything the installer emits. File default.
    pub const TRACE: Self = Self(5);
    /// Like TRACE, but dependency crates are no longer capped at `warn`.
    pub const DUMP: Self = Self(6);

    /// # Errors
    ///
    /// `ConfigError::InvalidValue` when `level > 6`.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-6, got {level}"),
        })
    }

    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= Self::DUMP.0 { Some(Self(level)) } else { None }
    }

    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// `EnvFilter` directives for this tier.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "warn,engine_installer=info,installer=info",
            4 => "warn,engine_installer=debug,installer=debug",
            5 => "warn,engine_installer=trace,installer=trace",
            _ => "trace",
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Self::new(u8::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

/// Where installer logs go and how verbose each sink is.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
    /// Colour the stderr output. Defaults to whether stderr is a terminal.
    #[builder(setters(name = with_ansi), default = std::io::stderr().is_terminal())]
    ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }

    #[must_use]
    pub const fn ansi(&self) -> bool {
        self.ansi
    }
}

/// Keep alive until exit, or the tail of the log file may be lost.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if the log file (or its parent directory) cannot be created, or if
/// a subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use engine_installer::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::DEBUG)
///     .with_log_file("installer.log".to_string())
///     .build();
///
/// let _guard = init_logging(&config).expect("logging");
/// tracing::info!("Installing project environment file");
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_ansi(config.ansi())
        .with_filter(EnvFilter::new(config.console_level().to_filter_string()));

    let mut file_guard = None;
    let file_layer = match config.log_file().map(Path::new) {
        Some(log_path) => {
            if let Some(parent) = log_path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }
            let file = std::fs::File::create(log_path)
                .with_context(|| format!("failed to create log file {}", log_path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            file_guard = Some(guard);

            Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(EnvFilter::new(config.file_level().to_filter_string())),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
