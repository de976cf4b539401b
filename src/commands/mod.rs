// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Every `execute` returns the process exit code: [`EXIT_OK`] or
//! [`EXIT_GATE_FAILED`]. Errors bubble up to `main`, which maps them to
//! [`EXIT_ERROR`].

pub mod analyze;
pub mod apps;
pub mod bench;
pub mod check;
mod render;
pub mod system;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{Catalog, Settings};
use crate::error::Result;

pub const EXIT_OK: i32 = 0;
pub const EXIT_GATE_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Resolve the catalog: `--catalog` flag, then settings, then the built-in one.
pub fn load_catalog(flag: Option<&Path>, settings: &Settings) -> Result<Arc<Catalog>> {
    let path = flag.or(settings.catalog_path.as_deref());
    Ok(Arc::new(Catalog::load(path)?))
}

/// Run blocking work on the Tokio blocking pool behind a spinner.
///
/// The spinner is hidden when `show` is false so JSON output stays clean.
pub(crate) async fn with_spinner<T, F>(show: bool, message: &str, work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&ProgressBar) -> Result<T> + Send + 'static,
{
    let spinner = if show {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    } else {
        ProgressBar::hidden()
    };
    spinner.set_message(message.to_string());

    let handle = spinner.clone();
    let outcome = tokio::task::spawn_blocking(move || work(&handle)).await;
    spinner.finish_and_clear();

    outcome?
}
