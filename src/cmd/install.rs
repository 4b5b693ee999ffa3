// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command implementation.

use tracing::{debug, info};

use crate::cli::install::InstallArgs;
use crate::config::Config;
use crate::env::EnvSnapshot;
use crate::error::Result;
use crate::install::{InstallContext, InstallOutcome, run_installers};

/// Main handler for the install command.
///
/// Captures the process environment here, at the edge, and hands it to the
/// installers explicitly.
///
/// # Errors
///
/// Returns the first installer failure. A failed environment write is never
/// downgraded to a warning.
pub async fn run_install_command(args: &InstallArgs, config: &Config) -> Result<()> {
    let ctx = InstallContext::new(EnvSnapshot::capture(), config.paths.clone());
    let outcomes = run_installers(&args.targets, &ctx).await?;

    for (target, outcome) in &outcomes {
        match outcome {
            InstallOutcome::Written(path) => {
                info!(target_config = %target, path = %path.display(), "installed");
            }
            InstallOutcome::NotImplemented => {
                debug!(target_config = %target, "not implemented, nothing written");
            }
        }
    }
    Ok(())
}
