// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Compatibility gate command

use serde::Serialize;

use super::render::print_compatibility;
use super::{EXIT_GATE_FAILED, EXIT_OK};
use crate::analysis::{CompatibilityReport, Pipeline};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::error::Result;
use crate::hardware::Snapshot;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput<'a> {
    app: &'a str,
    pass: bool,
    blocking_problems: &'a [String],
    info_messages: &'a [String],
}

impl<'a> CheckOutput<'a> {
    fn new(app: &'a str, report: &'a CompatibilityReport) -> Self {
        Self {
            app,
            pass: report.pass,
            blocking_problems: &report.blocking_problems,
            info_messages: &report.info_messages,
        }
    }
}

pub(super) fn exit_code(report: &CompatibilityReport) -> i32 {
    if report.pass {
        EXIT_OK
    } else {
        EXIT_GATE_FAILED
    }
}

/// Execute the check command
pub fn execute(
    args: &CheckArgs,
    pipeline: &Pipeline,
    snapshot: &Snapshot,
    format: &OutputFormat,
) -> Result<i32> {
    let report = pipeline.check_compatibility(&args.app, snapshot);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&CheckOutput::new(&args.app, &report))?);
    } else {
        print_compatibility(&args.app, &report)?;
        println!();
    }

    Ok(exit_code(&report))
}
