//! Command-line interface for `sbox-analysis-rs`.

#![forbid(unsafe_code)]

mod input;
mod spreadsheet;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sbox_core::{aes_sbox, SBox};
use sbox_metrics::{Engine, EngineConfig, MetricKind, Report};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// S-box strength analyzer.
#[derive(Parser)]
#[command(
    name = "sbox",
    version,
    author,
    about = "Cryptanalytic strength metrics for 8-bit S-boxes (NL, SAC, BIC, LAP, DAP)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an S-box given as text.
    Analyze {
        /// 256 comma-separated integers in 0..=255.
        #[arg(long, value_name = "LIST", conflicts_with_all = ["file", "hex"])]
        values: Option<String>,
        /// Text file with 256 integers separated by commas, semicolons or
        /// whitespace, or a workbook (.xlsx, .xlsm, .xls, .ods) whose first sheet
        /// holds the 256 cells.
        #[arg(long, value_name = "FILE", conflicts_with = "hex")]
        file: Option<PathBuf>,
        /// The table as 512 hex digits.
        #[arg(long, value_name = "HEX")]
        hex: Option<String>,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Analyze the built-in AES S-box.
    Reference {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Generate a random bijective S-box.
    Random {
        /// Optional RNG seed for reproducible tables.
        #[arg(long)]
        seed: Option<u64>,
        /// Also analyze the generated table.
        #[arg(long, default_value_t = false)]
        analyze: bool,
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Metric to compute (repeatable); defaults to all six.
    #[arg(long = "metric", value_name = "NAME")]
    metrics: Vec<String>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Write the report to a file instead of stdout (required for xlsx).
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Run every metric on the current thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,
    /// Abort if computing all requested metrics takes longer than this many
    /// milliseconds.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,
    /// Analyze the inverse permutation instead of the table itself.
    #[arg(long, default_value_t = false)]
    inverse: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
    Xlsx,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            values,
            file,
            hex,
            run,
        } => cmd_analyze(values, file, hex, &run),
        Commands::Reference { run } => cmd_reference(&run),
        Commands::Random { seed, analyze, run } => {
            cmd_random(seed, analyze, &run, &mut std::io::stdout().lock())
        }
    }
}

fn cmd_analyze(
    values: Option<String>,
    file: Option<PathBuf>,
    hex: Option<String>,
    run: &RunArgs,
) -> Result<()> {
    let sbox = match (values, file, hex) {
        (Some(text), None, None) => input::parse_values(&text)?,
        (None, Some(path), None) if spreadsheet::is_spreadsheet(&path) => {
            spreadsheet::read_sbox(&path)?
        }
        (None, Some(path), None) => {
            let text =
                fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
            input::parse_values(&text).with_context(|| format!("parse {}", path.display()))?
        }
        (None, None, Some(text)) => input::parse_hex(&text)?,
        _ => bail!("provide exactly one of --values, --file or --hex"),
    };
    analyze(&sbox, run, &mut std::io::stdout().lock())
}

fn cmd_reference(run: &RunArgs) -> Result<()> {
    info!("analyzing the AES S-box");
    analyze(&aes_sbox(), run, &mut std::io::stdout().lock())
}

fn cmd_random(
    seed: Option<u64>,
    analyze_table: bool,
    run: &RunArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut table: [u8; 256] = std::array::from_fn(|x| x as u8);
    table.shuffle(&mut rng);
    let sbox = SBox::new(table);
    let listing = input::format_values(&sbox);
    if analyze_table {
        // stdout carries the report; keep the table out of it.
        info!("generated S-box:\n{listing}");
        analyze(&sbox, run, out)?;
    } else {
        writeln!(out, "{listing}").context("write S-box")?;
    }
    Ok(())
}

fn analyze(sbox: &SBox, run: &RunArgs, out: &mut dyn Write) -> Result<()> {
    let metrics = selected_metrics(&run.metrics)?;
    if matches!(run.format, Format::Xlsx) && run.output.is_none() {
        bail!("--format xlsx needs --output FILE");
    }
    let target = target_table(sbox, run.inverse)?;
    let sbox = &target;
    if !sbox.is_bijective() {
        warn!("S-box is not bijective");
    }
    info!(
        metrics = metrics.len(),
        parallel = !run.sequential,
        "evaluating S-box"
    );

    let engine = Engine::with_config(EngineConfig {
        parallel: !run.sequential,
        deadline: run.timeout_ms.map(Duration::from_millis),
    });
    let started = Instant::now();
    let report = engine
        .evaluate_many(sbox, &metrics)
        .context("compute metrics")?;
    for result in &report.results {
        debug!(metric = %result.metric, value = result.value, "metric done");
    }
    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "evaluation finished"
    );

    let rendered = render(&report, run.format)?;
    match &run.output {
        Some(path) => write_report(path, &rendered)?,
        None => out.write_all(&rendered).context("write report")?,
    }
    Ok(())
}

/// The table itself, or its inverse when requested.
fn target_table(sbox: &SBox, inverse: bool) -> Result<SBox> {
    if !inverse {
        return Ok(*sbox);
    }
    match sbox.inverse() {
        Some(inv) => Ok(inv),
        None => bail!("--inverse needs a bijective S-box"),
    }
}

fn selected_metrics(names: &[String]) -> Result<Vec<MetricKind>> {
    if names.is_empty() || names.iter().any(|n| n.eq_ignore_ascii_case("all")) {
        return Ok(MetricKind::ALL.to_vec());
    }
    let mut metrics = Vec::with_capacity(names.len());
    for name in names {
        let metric: MetricKind = name.parse()?;
        if !metrics.contains(&metric) {
            metrics.push(metric);
        }
    }
    Ok(metrics)
}

fn render(report: &Report, format: Format) -> Result<Vec<u8>> {
    Ok(match format {
        Format::Table => report.to_table().into_bytes(),
        Format::Csv => report.to_csv().into_bytes(),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
            json.push('\n');
            json.into_bytes()
        }
        Format::Xlsx => spreadsheet::report_to_xlsx(report)?,
    })
}

fn write_report(path: &Path, rendered: &[u8]) -> Result<()> {
    fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
