use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "multigraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion suites and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also run every suite with the `tracing` feature enabled
        #[arg(long, default_value_t = false)]
        with_tracing: bool,
    },
}

const SUITES: &[&str] = &["graph_benchmark", "priority_queue_benchmark"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            with_tracing,
        } => {
            if !report_only {
                run_benchmarks(quick, false)?;
                if with_tracing {
                    run_benchmarks(quick, true)?;
                }
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, tracing: bool) -> Result<()> {
    let baseline = if tracing { "tracing" } else { "default" };
    println!("Running benchmarks (baseline: {baseline})...");

    for suite in SUITES {
        println!("\n>>> {suite}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(suite);
        if tracing {
            cmd.arg("--features").arg("tracing");
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run bench suite {suite}"))?;

        if status.success() {
            println!("Finished {suite} in {:.2?}", start.elapsed());
        } else {
            anyhow::bail!("bench suite {suite} failed");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | default (ns/iter) | tracing (ns/iter) |")?;
    writeln!(file, "|---|---|---|")?;

    for (workload, baselines) in &results {
        let cell = |name: &str| {
            baselines
                .get(name)
                .map_or_else(|| "N/A".to_string(), |ns| format!("{ns:.0}"))
        };
        writeln!(file, "| {workload} | {} | {} |", cell("default"), cell("tracing"))?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

// Layout: target/criterion/<group>/<bench>/<baseline>/estimates.json
fn collect_results(
    dir: &Path,
    results: &mut BTreeMap<String, BTreeMap<String, f64>>,
) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let baseline = name_of(baseline_dir);
        if !matches!(baseline.as_str(), "default" | "tracing") {
            continue;
        }
        let workload = workload_dir
            .strip_prefix("target/criterion")
            .unwrap_or(workload_dir)
            .display()
            .to_string();

        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("malformed {}", path.display()))?;
        if let Some(mean) = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
        {
            results.entry(workload).or_default().insert(baseline, mean);
        }
    }
    Ok(())
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
