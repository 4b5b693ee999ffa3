// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project configuration installers.
//!
//! # Architecture
//!
//! ```text
//! run_installers(targets, &InstallContext)
//!        |
//!        v
//!   InstallTarget
//!   Environment --> environment::install_environment_configs()
//!                     EnvSnapshot --> [root/]Data/Configs/Environment.json
//!   Prebuild    --> placeholder::install_prebuild_configs()  \
//!   Engine      --> placeholder::install_engine_configs()     > log only
//!   Vulkan      --> placeholder::install_vulkan_configs()    /
//! ```
//!
//! Only the environment installer touches the filesystem. The other three
//! report [`InstallOutcome::NotImplemented`] and write nothing.

pub mod environment;
pub mod placeholder;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::Context;
use clap::ValueEnum;

use crate::config::paths::PathsConfig;
use crate::env::EnvSnapshot;
use crate::error::Result;

pub use environment::install_environment_configs;
pub use placeholder::{install_engine_configs, install_prebuild_configs, install_vulkan_configs};

/// A configuration file the installer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum InstallTarget {
    /// Process environment snapshot.
    Environment,
    /// Pre-build configuration (not implemented).
    Prebuild,
    /// Engine configuration (not implemented).
    Engine,
    /// Vulkan configuration (not implemented).
    Vulkan,
}

impl InstallTarget {
    /// All targets in installation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Environment, Self::Prebuild, Self::Engine, Self::Vulkan]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Prebuild => "prebuild",
            Self::Engine => "engine",
            Self::Vulkan => "vulkan",
        }
    }
}

impl std::fmt::Display for InstallTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What an installer did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// A configuration file was written to this path.
    Written(PathBuf),
    /// The installer has no implementation; nothing was written.
    NotImplemented,
}

/// Inputs shared by the installers.
#[derive(Debug, Clone, Default)]
pub struct InstallContext {
    env: EnvSnapshot,
    paths: PathsConfig,
}

impl InstallContext {
    #[must_use]
    pub const fn new(env: EnvSnapshot, paths: PathsConfig) -> Self {
        Self { env, paths }
    }

    #[must_use]
    pub const fn env(&self) -> &EnvSnapshot {
        &self.env
    }

    #[must_use]
    pub const fn paths(&self) -> &PathsConfig {
        &self.paths
    }
}

/// Runs a single installer.
///
/// # Errors
///
/// Returns an error if the environment file cannot be serialized or written.
pub async fn run_installer(target: InstallTarget, ctx: &InstallContext) -> Result<InstallOutcome> {
    match target {
        InstallTarget::Environment => {
            let path = install_environment_configs(ctx.env(), ctx.paths()).await?;
            Ok(InstallOutcome::Written(path))
        }
        InstallTarget::Prebuild => Ok(install_prebuild_configs()),
        InstallTarget::Engine => Ok(install_engine_configs()),
        InstallTarget::Vulkan => Ok(install_vulkan_configs()),
    }
}

/// Runs installers in the given order, stopping at the first failure.
///
/// An empty `targets` slice runs every installer in [`InstallTarget::all`]
/// order. Duplicate targets run once, at their first position.
///
/// # Errors
///
/// Returns the first installer error, annotated with the failing target.
pub async fn run_installers(
    targets: &[InstallTarget],
    ctx: &InstallContext,
) -> Result<Vec<(InstallTarget, InstallOutcome)>> {
    let targets = if targets.is_empty() {
        InstallTarget::all()
    } else {
        targets
    };

    let mut outcomes: Vec<(InstallTarget, InstallOutcome)> = Vec::with_capacity(targets.len());
    for &target in targets {
        if outcomes.iter().any(|(done, _)| *done == target) {
            continue;
        }
        let outcome = run_installer(target, ctx)
            .await
            .with_context(|| format!("{target} installer failed"))?;
        outcomes.push((target, outcome));
    }
    Ok(outcomes)
}
