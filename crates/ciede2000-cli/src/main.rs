//! ciede2000 - ΔE2000 batch driver and result-file tooling
//!
//! Computes, generates and cross-checks CIEDE2000 color differences so that
//! result files written by implementations in other languages can be compared
//! line by line.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ciede2000_core::HueMeanConvention;
use ciede2000_tests::generator::Rounding;
use ciede2000_tests::parity::ReferenceImpl;

mod commands;

#[derive(Parser)]
#[command(name = "ciede2000")]
#[command(author, version, about = "CIEDE2000 color difference tooling")]
#[command(long_about = "
Computes ΔE2000 between L*a*b* colors and checks result files produced by
other implementations.

Examples:
  ciede2000 compute 50 2.6772 -79.7751 50 0 -82.7485
  ciede2000 random 10000 --seed 42 -o vectors.csv
  ciede2000 driver input.csv -o output.csv
  ciede2000 verify output.csv --single-precision
  ciede2000 cross-validate 100000 --reference palette
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// ΔE2000 between two colors
    #[command(visible_alias = "c")]
    Compute(ComputeArgs),

    /// Append ΔE2000 to every L1,a1,b1,L2,a2,b2 row of a file
    #[command(visible_alias = "d")]
    Driver(DriverArgs),

    /// Write random L1,a1,b1,L2,a2,b2,ΔE rows
    #[command(visible_alias = "r")]
    Random(RandomArgs),

    /// Recompute a 7-column result file and count mismatches
    #[command(visible_alias = "v")]
    Verify(VerifyArgs),

    /// Compare against a reference implementation on random pairs
    #[command(name = "cross-validate", visible_alias = "xv")]
    CrossValidate(CrossValidateArgs),
}

/// Mean-hue convention as a command-line value
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConventionArg {
    Lindbloom,
    Sharma,
}

impl From<ConventionArg> for HueMeanConvention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::Lindbloom => HueMeanConvention::Lindbloom,
            ConventionArg::Sharma => HueMeanConvention::Sharma,
        }
    }
}

/// Rounding mode as a command-line value
#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoundingArg {
    Integer,
    #[value(name = "1dp")]
    OneDecimal,
    #[value(name = "2dp")]
    TwoDecimals,
    Raw,
}

impl From<RoundingArg> for Rounding {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Integer => Rounding::Integer,
            RoundingArg::OneDecimal => Rounding::OneDecimal,
            RoundingArg::TwoDecimals => Rounding::TwoDecimals,
            RoundingArg::Raw => Rounding::Raw,
        }
    }
}

#[derive(Args)]
struct ComputeArgs {
    /// L1 a1 b1 L2 a2 b2
    #[arg(required = true, num_args = 6, value_names = ["L1", "A1", "B1", "L2", "A2", "B2"], allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Mean-hue convention
    #[arg(long, value_enum, default_value = "lindbloom")]
    convention: ConventionArg,

    /// Lightness weight k_L
    #[arg(long, default_value = "1.0")]
    kl: f64,

    /// Chroma weight k_C
    #[arg(long, default_value = "1.0")]
    kc: f64,

    /// Hue weight k_H
    #[arg(long, default_value = "1.0")]
    kh: f64,

    /// Evaluate in single precision
    #[arg(long = "f32")]
    single: bool,

    /// Print a JSON object
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DriverArgs {
    /// Input CSV (`-` for stdin)
    input: PathBuf,

    /// Output CSV (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct RandomArgs {
    /// Number of rows
    #[arg(default_value = "10000")]
    count: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rounding modes to mix (default: all)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    rounding: Vec<RoundingArg>,

    /// Output CSV (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct VerifyArgs {
    /// Result file (`-` for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Accept the looser tolerance of 32-bit producers
    #[arg(long)]
    single_precision: bool,

    /// Explicit tolerance, overrides --single-precision
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Convention the file was written with
    #[arg(long, value_enum, default_value = "lindbloom")]
    convention: ConventionArg,

    /// Print a JSON report
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CrossValidateArgs {
    /// Number of random pairs
    #[arg(default_value = "10000")]
    count: usize,

    /// Implementation to compare against (palette, textbook, sharma)
    #[arg(short, long, default_value = "palette")]
    reference: ReferenceImpl,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Largest accepted divergence [default: 1e-10, 1e-3 for sharma]
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Print a JSON report
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Compute(args) => commands::compute::run(args),
        Commands::Driver(args) => commands::driver::run(args, cli.verbose),
        Commands::Random(args) => commands::random::run(args, cli.verbose),
        Commands::Verify(args) => commands::verify::run(args, cli.verbose),
        Commands::CrossValidate(args) => commands::cross_validate::run(args, cli.verbose),
    }
}
