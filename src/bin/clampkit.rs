use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use clampkit::{ClampConfig, Order};

#[derive(Parser, Debug)]
#[command(name = "clampkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clamp a single number and print the result.
    Value(ValueArgs),
    /// Clamp a JSON array of numbers.
    Range(RangeArgs),
}

#[derive(Args, Debug)]
struct BoundArgs {
    /// Bound config JSON (`{"lo": .., "hi": .., "order": ..}`).
    #[arg(long, conflicts_with_all = ["lo", "hi", "descending"])]
    config: Option<PathBuf>,

    /// Lower bound (first under the active order).
    #[arg(long, allow_hyphen_values = true)]
    lo: Option<f64>,

    /// Upper bound (last under the active order).
    #[arg(long, allow_hyphen_values = true)]
    hi: Option<f64>,

    /// Interpret the bounds under descending order.
    #[arg(long, default_value_t = false)]
    descending: bool,
}

#[derive(Parser, Debug)]
struct ValueArgs {
    /// Value to clamp.
    #[arg(allow_hyphen_values = true)]
    value: f64,

    #[command(flatten)]
    bounds: BoundArgs,
}

#[derive(Parser, Debug)]
struct RangeArgs {
    /// Input JSON array of numbers.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Clamp on the rayon thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    #[command(flatten)]
    bounds: BoundArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Value(args) => cmd_value(args),
        Command::Range(args) => cmd_range(args),
    }
}

fn resolve_config(args: &BoundArgs) -> anyhow::Result<ClampConfig> {
    if let Some(path) = &args.config {
        return ClampConfig::from_path(path)
            .with_context(|| format!("load bound config '{}'", path.display()));
    }
    let (Some(lo), Some(hi)) = (args.lo, args.hi) else {
        anyhow::bail!("either --config or both --lo and --hi are required");
    };
    let order = if args.descending {
        Order::Descending
    } else {
        Order::Ascending
    };
    Ok(ClampConfig::new(lo, hi, order)?)
}

fn cmd_value(args: ValueArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args.bounds)?;
    println!("{}", cfg.apply(args.value));
    Ok(())
}

fn cmd_range(args: RangeArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args.bounds)?;

    let f = File::open(&args.in_path)
        .with_context(|| format!("open input '{}'", args.in_path.display()))?;
    let mut values: Vec<f64> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse number array '{}'", args.in_path.display()))?;

    let changed = cfg.apply_in_place(&mut values, args.parallel);
    tracing::info!(len = values.len(), changed, "clamped range");

    write_json(&args.out, &values)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_json(path: &Path, values: &[f64]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, values)
        .with_context(|| format!("write json '{}'", path.display()))?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}
