use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "segdeque workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the deque benchmarks and render a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "deque_benchmark";
const BASELINE: &str = "vecdeque";
const REPORT: &str = "benchmark_results/report.md";

/// workload -> implementation -> elements per second
type Results = BTreeMap<String, BTreeMap<String, f64>>;

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct BenchmarkInfo {
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to launch cargo bench for {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("benchmark {BENCH} failed");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new(REPORT);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;
    write_report(&mut file, &results)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn write_report(out: &mut impl Write, results: &Results) -> Result<()> {
    let implementations: BTreeSet<&String> = results.values().flat_map(BTreeMap::keys).collect();

    writeln!(out, "# Deque Benchmark Report")?;
    writeln!(out)?;
    writeln!(out, "Throughput in elements per second; ratios are against `{BASELINE}`.")?;
    writeln!(out)?;

    write!(out, "| Workload |")?;
    for name in &implementations {
        write!(out, " {name} (Ops/s) | vs {BASELINE} |")?;
    }
    writeln!(out)?;

    write!(out, "|---|")?;
    for _ in &implementations {
        write!(out, "---|---|")?;
    }
    writeln!(out)?;

    for (workload, row) in results {
        write!(out, "| {workload} |")?;
        let baseline = row.get(BASELINE).copied();
        for name in &implementations {
            match (row.get(*name), baseline) {
                (Some(ops), Some(base)) if base > 0.0 => {
                    write!(out, " {} | **{:.2}x** |", format_ops(*ops), ops / base)?;
                }
                (Some(ops), _) => write!(out, " {} | - |", format_ops(*ops))?,
                (None, _) => write!(out, " N/A | - |")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `target/criterion/<workload>/<implementation>/new/`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(impl_dir) = run_dir.parent() else { continue };
        let Some(workload_dir) = impl_dir.parent() else { continue };
        let (Some(implementation), Some(workload)) = (dir_name(impl_dir), dir_name(workload_dir))
        else {
            continue;
        };

        let estimates: Estimates = read_json(&path)?;
        let elements = read_json::<BenchmarkInfo>(&run_dir.join("benchmark.json"))
            .ok()
            .and_then(|info| info.throughput)
            .map_or(1.0, |t| match t {
                Throughput::Elements(n) | Throughput::Bytes(n) => n as f64,
            });

        let time_ns = estimates.mean.point_estimate;
        if time_ns > 0.0 {
            results
                .entry(workload)
                .or_default()
                .insert(implementation, elements * 1e9 / time_ns);
        }
    }
    Ok(())
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_owned)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
}
