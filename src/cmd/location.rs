// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Location command.

use crate::error::Result;
use crate::location::current_directory;

/// Print the directory the installer executable lives in.
///
/// # Errors
///
/// Returns an error if the executable location cannot be resolved.
pub fn run_location_command() -> Result<()> {
    let dir = current_directory()?;
    println!("{}", dir.display());
    Ok(())
}
