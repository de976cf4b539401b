// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Full analysis command: gate, then benchmark and score

use serde::Serialize;

use super::bench::load_result;
use super::check::exit_code;
use super::render::{print_benchmark, print_compatibility, print_score};
use super::with_spinner;
use crate::analysis::{Analysis, Pipeline, Rating};
use crate::benchmark::{BenchmarkResult, BenchmarkSuite};
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::BenchmarkConfig;
use crate::error::Result;
use crate::hardware::Snapshot;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisOutput<'a> {
    app: &'a str,
    pass: bool,
    blocking_problems: &'a [String],
    info_messages: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    benchmark: Option<&'a BenchmarkResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<Rating>,
    warnings: &'a [String],
}

impl<'a> From<&'a Analysis> for AnalysisOutput<'a> {
    fn from(analysis: &'a Analysis) -> Self {
        Self {
            app: &analysis.app,
            pass: analysis.compatibility.pass,
            blocking_problems: &analysis.compatibility.blocking_problems,
            info_messages: &analysis.compatibility.info_messages,
            benchmark: analysis.benchmark.as_ref(),
            score: analysis.score.as_ref().map(|s| s.score),
            rating: analysis.score.as_ref().map(|s| s.rating),
            warnings: analysis
                .score
                .as_ref()
                .map(|s| s.warnings.as_slice())
                .unwrap_or_default(),
        }
    }
}

/// Score a saved result; the gate still runs first.
fn analyze_saved(
    pipeline: &Pipeline,
    app: &str,
    snapshot: &Snapshot,
    bench: BenchmarkResult,
) -> Analysis {
    let compatibility = pipeline.check_compatibility(app, snapshot);
    if !compatibility.pass {
        return Analysis {
            app: app.to_string(),
            compatibility,
            benchmark: None,
            score: None,
        };
    }

    let score = pipeline.score_system(app, snapshot, &bench);
    Analysis {
        app: app.to_string(),
        compatibility,
        benchmark: Some(bench),
        score: Some(score),
    }
}

/// Execute the analyze command
pub async fn execute(
    args: &AnalyzeArgs,
    pipeline: &Pipeline,
    snapshot: Snapshot,
    config: &BenchmarkConfig,
    format: &OutputFormat,
) -> Result<i32> {
    let analysis = match &args.results {
        Some(path) => analyze_saved(pipeline, &args.app, &snapshot, load_result(path)?),
        None => {
            let mut config = config.clone();
            if args.no_network {
                config.network.enabled = false;
            }
            let suite = BenchmarkSuite::new(config);
            let pipeline = pipeline.clone();
            let app = args.app.clone();
            let show_progress = matches!(format, OutputFormat::Text);

            with_spinner(show_progress, "Benchmarking...", move |_| {
                pipeline.analyze(&app, &snapshot, &suite)
            })
            .await?
        }
    };

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&AnalysisOutput::from(&analysis))?);
    } else {
        print_compatibility(&analysis.app, &analysis.compatibility)?;
        if let Some(bench) = &analysis.benchmark {
            print_benchmark(bench);
        }
        if let Some(score) = &analysis.score {
            print_score(score)?;
        }
        println!();
    }

    Ok(exit_code(&analysis.compatibility))
}
