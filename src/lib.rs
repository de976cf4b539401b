// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rigcheck - can this machine run an application, and how well?
//!
//! This crate exposes the diagnostic pipeline used by the `rigcheck` CLI
//! (`src/main.rs`).
//!
//! Architecture highlights:
//! - `hardware`: probe fallback chains and the static `Snapshot` inventory
//! - `benchmark`: synthetic CPU, memory, disk, thermal, network and power tests
//! - `analysis`: compatibility gate, weighted scorer and the `Pipeline` façade
//! - `config`: user settings and the read-only requirement catalog
//! - `cli`, `commands`: argument parsing and subcommand output

pub mod analysis;
pub mod benchmark;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hardware;

pub use error::{Result, RigError};
