// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Text rendering shared by the check, bench and analyze commands

use std::io::{self, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::analysis::{CompatibilityReport, Rating, ScoreReport};
use crate::benchmark::BenchmarkResult;
use crate::error::Result;

fn rating_color(rating: Rating) -> Color {
    match rating {
        Rating::Excellent => Color::Green,
        Rating::Good => Color::Yellow,
        Rating::Weak => Color::Red,
    }
}

fn colored_line(color: Color, text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(color))?;
    print!("{}", text);
    stdout.execute(ResetColor)?;
    println!();
    stdout.flush()?;
    Ok(())
}

pub(super) fn print_compatibility(app: &str, report: &CompatibilityReport) -> Result<()> {
    println!("\n=== Compatibility: {} ===\n", app);
    if report.pass {
        colored_line(Color::Green, "✓ Meets minimum requirements")?;
    } else {
        colored_line(Color::Red, "✗ Does not meet minimum requirements")?;
        for problem in &report.blocking_problems {
            println!("  ✗ {}", problem);
        }
    }
    for message in &report.info_messages {
        println!("  • {}", message);
    }
    Ok(())
}

pub(super) fn print_benchmark(bench: &BenchmarkResult) {
    println!("\n=== Benchmark ===\n");
    println!("CPU stress:     {:.4}s", bench.cpu_stress_seconds);
    println!("Memory stress:  {:.4}s", bench.ram_stress_seconds);
    println!("Disk write:     {:.4}s", bench.disk_write_seconds);
    match bench.thermal_stability_pct {
        Some(pct) => println!("Thermal:        {:.2}% of initial clock", pct),
        None => println!("Thermal:        unknown (clock not readable)"),
    }
    if bench.network_ping_ms > 0.0 || bench.network_download_mbps > 0.0 {
        println!(
            "Network:        {:.1}ms ping, {:.2} Mbps",
            bench.network_ping_ms, bench.network_download_mbps
        );
    } else {
        println!("Network:        unavailable");
    }
    match bench.battery_percent {
        Some(pct) => {
            let source = if bench.is_plugged { "plugged in" } else { "on battery" };
            print!("Power:          {:.0}% ({})", pct, source);
            if let Some(secs) = bench.battery_seconds_left {
                print!(", ~{}h{:02}m left", secs / 3600, (secs % 3600) / 60);
            }
            println!();
        }
        None => println!("Power:          no battery"),
    }
}

pub(super) fn print_score(report: &ScoreReport) -> Result<()> {
    println!("\n=== Performance Score ===\n");
    colored_line(
        rating_color(report.rating),
        &format!("{}/100  {}", report.score, report.rating),
    )?;
    if !report.warnings.is_empty() {
        println!();
        for warning in &report.warnings {
            println!("  ⚠️  {}", warning);
        }
    }
    Ok(())
}
