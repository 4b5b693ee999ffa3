// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Installers without an implementation.
//!
//! The pre-build, engine and Vulkan configuration formats are undefined, so
//! these only announce themselves. They all log the same line.

use tracing::{debug, info};

use super::{InstallOutcome, InstallTarget};

const INTENT: &str = "Installing project pre-build configuration file";

fn not_implemented(target: InstallTarget) -> InstallOutcome {
    info!("{INTENT}");
    debug!(target_config = %target, "no configuration format defined, nothing written");
    InstallOutcome::NotImplemented
}

#[must_use]
pub fn install_prebuild_configs() -> InstallOutcome {
    not_implemented(InstallTarget::Prebuild)
}

#[must_use]
pub fn install_engine_configs() -> InstallOutcome {
    not_implemented(InstallTarget::Engine)
}

#[must_use]
pub fn install_vulkan_configs() -> InstallOutcome {
    not_implemented(InstallTarget::Vulkan)
}
