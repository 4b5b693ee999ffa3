// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                     main.rs
//!                        |
//!             +----------+----------+
//!             v                     v
//!          cli (clap)          cmd (handlers)
//!             |        install / read-json / location
//!             +----------+----------+
//!                        v
//!           ,--------------------------,
//!           |          config          |
//!           |  installer.toml, --ini   |
//!           '---+---------+--------+---'
//!               |         |        |
//!               v         v        v
//!            install     json   location
//!           env/stubs   reader  exe dir
//!               |
//!               v
//!              env
//!          EnvSnapshot
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod install;
pub mod json;
pub mod location;
pub mod logging;
