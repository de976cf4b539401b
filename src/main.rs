// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rigcheck - hardware compatibility gate and performance benchmark
//!
//! Entry point for the CLI application.

use clap::Parser;

use rigcheck::analysis::Pipeline;
use rigcheck::cli::{Cli, Commands};
use rigcheck::commands::{self, EXIT_ERROR};
use rigcheck::config::Settings;
use rigcheck::error::Result;
use rigcheck::hardware::Snapshot;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    if cli.verbose > 0 {
        let level = if cli.verbose > 1 { "trace" } else { "debug" };
        for target in [
            "rigcheck.benchmark",
            "rigcheck.probe",
            "rigcheck.gate",
            "rigcheck.scorer",
            "rigcheck.inventory",
            "rigcheck.config",
        ] {
            if let Ok(parsed) = format!("{}={}", target, level).parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    match cli.command {
        Commands::Apps => {
            let catalog = commands::load_catalog(cli.catalog.as_deref(), &settings)?;
            commands::apps::execute(&catalog, &cli.format)
        }
        Commands::System => commands::system::execute(&Snapshot::capture(), &cli.format),
        Commands::Check(args) => {
            let pipeline = Pipeline::new(commands::load_catalog(cli.catalog.as_deref(), &settings)?);
            commands::check::execute(&args, &pipeline, &Snapshot::capture(), &cli.format)
        }
        Commands::Bench(args) => {
            commands::bench::execute(&args, &settings.benchmark, &cli.format).await
        }
        Commands::Analyze(args) => {
            let pipeline = Pipeline::new(commands::load_catalog(cli.catalog.as_deref(), &settings)?);
            commands::analyze::execute(
                &args,
                &pipeline,
                Snapshot::capture(),
                &settings.benchmark,
                &cli.format,
            )
            .await
        }
    }
}
