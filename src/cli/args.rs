// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for rigcheck.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// rigcheck - can this machine run it, and how well?
#[derive(Parser, Debug)]
#[command(name = "rigcheck")]
#[command(version, about = "Hardware compatibility gate and performance benchmark")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to ~/.rigcheck/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Requirement catalog to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List applications in the requirement catalog
    #[command(alias = "list")]
    Apps,

    /// Show the captured hardware snapshot
    #[command(alias = "hw")]
    System,

    /// Run the compatibility gate only
    Check(CheckArgs),

    /// Run the benchmark suite
    Bench(BenchArgs),

    /// Gate, benchmark and score the machine for an application
    Analyze(AnalyzeArgs),
}

/// Arguments for the check subcommand
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Application name as listed by `rigcheck apps`
    pub app: String,
}

/// Arguments for the bench subcommand
#[derive(clap::Args, Debug, Default)]
pub struct BenchArgs {
    /// Count primes below this bound in the CPU stress test
    #[arg(long)]
    pub cpu_limit: Option<u64>,

    /// Number of integers allocated by the memory stress test
    #[arg(long)]
    pub memory_size: Option<usize>,

    /// Skip the network probe
    #[arg(long)]
    pub no_network: bool,

    /// Write the benchmark result as JSON to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments for the analyze subcommand
#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Application name as listed by `rigcheck apps`
    pub app: String,

    /// Skip the network probe
    #[arg(long)]
    pub no_network: bool,

    /// Score a saved benchmark result instead of running the suite
    #[arg(long)]
    pub results: Option<PathBuf>,
}

/// Output format for reports
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ==================== CLI Global Arguments ====================

    #[test]
    fn test_cli_requires_command() {
        assert!(Cli::try_parse_from(["rigcheck"]).is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["rigcheck", "apps"]);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.config.is_none());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_cli_verbose_multiple() {
        let cli = Cli::parse_from(["rigcheck", "-vvv", "system"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "rigcheck",
            "check",
            "Blender 4.1",
            "--format",
            "json",
            "--catalog",
            "/tmp/apps.json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/apps.json")));
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::parse_from(["rigcheck", "--config", "/etc/rigcheck.json", "apps"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/rigcheck.json")));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["rigcheck", "--format", "yaml", "apps"]).is_err());
    }

    // ==================== Subcommands ====================

    #[test]
    fn test_apps_alias() {
        let cli = Cli::parse_from(["rigcheck", "list"]);
        assert!(matches!(cli.command, Commands::Apps));
    }

    #[test]
    fn test_system_alias() {
        let cli = Cli::parse_from(["rigcheck", "hw"]);
        assert!(matches!(cli.command, Commands::System));
    }

    #[test]
    fn test_check_app_name() {
        let cli = Cli::parse_from(["rigcheck", "check", "AutoCAD 2024"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.app, "AutoCAD 2024");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_check_requires_app() {
        assert!(Cli::try_parse_from(["rigcheck", "check"]).is_err());
    }

    #[test]
    fn test_bench_defaults() {
        let cli = Cli::parse_from(["rigcheck", "bench"]);
        if let Commands::Bench(args) = cli.command {
            assert!(args.cpu_limit.is_none());
            assert!(args.memory_size.is_none());
            assert!(!args.no_network);
            assert!(args.save.is_none());
        } else {
            panic!("Expected Bench command");
        }
    }

    #[test]
    fn test_bench_bounds() {
        let cli = Cli::parse_from([
            "rigcheck",
            "bench",
            "--cpu-limit",
            "200000",
            "--memory-size",
            "5000",
            "--no-network",
            "--save",
            "out.json",
        ]);
        if let Commands::Bench(args) = cli.command {
            assert_eq!(args.cpu_limit, Some(200_000));
            assert_eq!(args.memory_size, Some(5000));
            assert!(args.no_network);
            assert_eq!(args.save, Some(PathBuf::from("out.json")));
        } else {
            panic!("Expected Bench command");
        }
    }

    #[test]
    fn test_bench_rejects_negative_limit() {
        assert!(Cli::try_parse_from(["rigcheck", "bench", "--cpu-limit", "-5"]).is_err());
    }

    #[test]
    fn test_analyze_with_results() {
        let cli = Cli::parse_from(["rigcheck", "analyze", "KiCad 8", "--results", "bench.json"]);
        if let Commands::Analyze(args) = cli.command {
            assert_eq!(args.app, "KiCad 8");
            assert_eq!(args.results, Some(PathBuf::from("bench.json")));
            assert!(!args.no_network);
        } else {
            panic!("Expected Analyze command");
        }
    }
}
