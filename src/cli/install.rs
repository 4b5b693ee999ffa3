// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `install` and `read-json` commands.

use clap::Args;
use std::path::PathBuf;

use crate::install::InstallTarget;

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InstallArgs {
    /// Installers to run, in order. Runs all of them when omitted.
    #[arg(value_name = "TARGET", value_enum)]
    pub targets: Vec<InstallTarget>,
}

/// Arguments for the `read-json` command.
#[derive(Debug, Clone, Args)]
pub struct ReadJsonArgs {
    /// JSON file to read.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Print on a single line instead of pretty-printing.
    #[arg(long)]
    pub compact: bool,
}
