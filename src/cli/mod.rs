// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! installer [global options] <command>
//! version
//! options
//! inis
//! location
//! install [environment|prebuild|engine|vulkan]...
//! read-json <FILE>
//! ```

pub mod global;
pub mod install;


use crate::cli::global::GlobalOptions;
use crate::cli::install::{InstallArgs, ReadJsonArgs};
use clap::{Parser, Subcommand};

/// Project configuration installer.
#[derive(Debug, Parser)]
#[command(
    name = "installer",
    author,
    version,
    about = "Installs project configuration files",
    long_about = "Installs project configuration files into the engine data directory.\n\n\
                  `installer install` writes Data/Configs/Environment.json from the\n\
                  current process environment and runs the remaining configuration\n\
                  installers. See `installer <command> --help` for more information\n\
                  about a command.",
    after_help = "CONFIG FILES:\n\n\
                  The installer reads `installer.toml` from the current directory if\n\
                  it exists, then every file given with --ini, in order. Later files\n\
                  override earlier ones. Use --no-default-inis to skip installer.toml.\n\
                  Environment variables are never read as configuration."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files in use.
    Inis,

    /// Prints the directory the installer runs from.
    Location,

    /// Installs configuration files.
    Install(InstallArgs),

    /// Reads a JSON file and prints it.
    #[command(name = "read-json")]
    ReadJson(ReadJsonArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
