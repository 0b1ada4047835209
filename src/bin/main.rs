//! radk Command Line Interface
//!
//! Evaluate radial kernels and their derivatives, evaluate the pairwise
//! vector kernels, verify derivatives numerically and manage kernel
//! configuration files.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, error, info, warn};
use num_traits::Float;
use radial_kernels::core::{KernelError, Precision, Result};
use radial_kernels::kernel::{try_gauss_kernel, try_gauss_kernel_d1, try_varifold_gauss_kernel};
use radial_kernels::utils::numerical::{check_grid, DEFAULT_STEP, DEFAULT_TOLERANCE};
use radial_kernels::{ConfigFile, KernelConfig, KernelFamily};
use serde::Serialize;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "radk")]
#[command(about = "Radial kernel evaluation and derivative checks")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "radial-kernels contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a kernel and its derivatives at squared radii
    Eval(EvalArgs),
    /// Evaluate a pairwise Gaussian kernel on two vectors
    Pair(PairArgs),
    /// Compare closed-form derivatives with finite differences
    Check(CheckArgs),
    /// Write a kernel configuration file
    Config(ConfigArgs),
    /// Display a kernel configuration file
    Info(InfoArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliFamily {
    /// exp(-r2/sigma^2)
    #[value(name = "gaussian")]
    Gaussian,
    /// exp(-sqrt(sigma^2 + r2))
    #[value(name = "laplace")]
    Laplace,
    /// (sigma^2 + r2)^(-1/4)
    #[value(name = "energy")]
    Energy,
}

impl From<CliFamily> for KernelFamily {
    fn from(cli_family: CliFamily) -> Self {
        match cli_family {
            CliFamily::Gaussian => KernelFamily::Gaussian,
            CliFamily::Laplace => KernelFamily::Laplace,
            CliFamily::Energy => KernelFamily::Energy,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliPrecision {
    /// Single precision (f32)
    #[value(name = "float32")]
    Float32,
    /// Double precision (f64)
    #[value(name = "float64")]
    Float64,
}

impl From<CliPrecision> for Precision {
    fn from(cli_precision: CliPrecision) -> Self {
        match cli_precision {
            CliPrecision::Float32 => Precision::Single,
            CliPrecision::Float64 => Precision::Double,
        }
    }
}

#[derive(Args, Clone)]
struct BandwidthArgs {
    /// Kernel bandwidth sigma
    #[arg(short, long, conflicts_with = "oo_sigma2")]
    sigma: Option<f64>,

    /// Inverse squared bandwidth 1/sigma^2
    #[arg(long)]
    oo_sigma2: Option<f64>,
}

#[derive(Args)]
struct EvalArgs {
    /// Kernel family
    #[arg(short, long)]
    family: Option<CliFamily>,

    #[command(flatten)]
    bandwidth: BandwidthArgs,

    /// Scalar precision
    #[arg(short, long)]
    precision: Option<CliPrecision>,

    /// Kernel configuration file providing defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Squared radii
    #[arg(required = true, allow_negative_numbers = true)]
    r2: Vec<f64>,
}

#[derive(Args)]
struct PairArgs {
    /// First vector, comma separated (e.g. 0,0,1)
    #[arg(short, long, allow_hyphen_values = true)]
    u: String,

    /// Second vector, comma separated
    #[arg(long, allow_hyphen_values = true)]
    v: String,

    #[command(flatten)]
    bandwidth: BandwidthArgs,

    /// Scalar precision
    #[arg(short, long)]
    precision: Option<CliPrecision>,

    /// Return the partial derivative along this coordinate of v
    #[arg(short, long)]
    axis: Option<usize>,

    /// Use the varifold kernel
    #[arg(long, conflicts_with = "axis")]
    varifold: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Kernel family (all families if omitted)
    #[arg(short, long)]
    family: Option<CliFamily>,

    /// Finite-difference step
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f64,

    /// Relative error tolerance
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
}

#[derive(Args)]
struct ConfigArgs {
    /// Output configuration file
    #[arg(short, long)]
    output: PathBuf,

    /// Kernel family
    #[arg(short, long, default_value = "gaussian")]
    family: CliFamily,

    #[command(flatten)]
    bandwidth: BandwidthArgs,

    /// Scalar precision
    #[arg(short, long, default_value = "float64")]
    precision: CliPrecision,
}

#[derive(Args)]
struct InfoArgs {
    /// Configuration file
    config: PathBuf,
}

#[derive(Serialize)]
struct EvalRow {
    r2: f64,
    value: f64,
    first: f64,
    second: f64,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Eval(args) => eval_command(args),
        Commands::Pair(args) => pair_command(args),
        Commands::Check(args) => check_command(args),
        Commands::Config(args) => config_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn apply_bandwidth(config: KernelConfig, bandwidth: &BandwidthArgs) -> KernelConfig {
    match (bandwidth.sigma, bandwidth.oo_sigma2) {
        (Some(sigma), _) => config.with_sigma(sigma),
        (None, Some(oo_sigma2)) => config.with_oo_sigma2(oo_sigma2),
        (None, None) => config,
    }
}

fn eval_command(args: EvalArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading kernel configuration from {path:?}");
            KernelConfig::load_from_file(path)?
        }
        None => KernelConfig::default(),
    };
    if let Some(family) = args.family {
        config = config.with_family(family.into());
    }
    if let Some(precision) = args.precision {
        config = config.with_precision(precision.into());
    }
    config = apply_bandwidth(config, &args.bandwidth);
    config.validate()?;

    info!(
        "Evaluating {} kernel: oo_sigma2={}, precision={}",
        config.family, config.oo_sigma2, config.precision
    );
    if args.r2.iter().any(|&r2| r2 < 0.0) {
        warn!("Negative squared radius given; results are not meaningful");
    }

    let rows = match config.precision {
        Precision::Single => evaluate_rows::<f32>(&config, &args.r2)?,
        Precision::Double => evaluate_rows::<f64>(&config, &args.r2)?,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&rows)
            .map_err(|e| KernelError::SerializationError(e.to_string()))?;
        println!("{json}");
    } else {
        println!("{:>14} {:>14} {:>14} {:>14}", "r2", "value", "d1", "d2");
        for row in &rows {
            println!(
                "{:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
                row.r2, row.value, row.first, row.second
            );
        }
    }
    Ok(())
}

fn evaluate_rows<T: Float>(config: &KernelConfig, radii: &[f64]) -> Result<Vec<EvalRow>> {
    radii
        .iter()
        .map(|&r2| {
            let r2_t = T::from(r2)
                .filter(|x| x.is_finite() || !r2.is_finite())
                .ok_or_else(|| {
                    KernelError::InvalidParameter(format!("r2 {r2} is not representable"))
                })?;
            let d = config.evaluate(r2_t)?;
            Ok(EvalRow {
                r2,
                value: d.value.to_f64().unwrap_or(f64::NAN),
                first: d.first.to_f64().unwrap_or(f64::NAN),
                second: d.second.to_f64().unwrap_or(f64::NAN),
            })
        })
        .collect()
}

fn parse_vector(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| KernelError::ParseError(format!("invalid coordinate '{part}': {e}")))
        })
        .collect()
}

/// Narrow coordinates to single precision, rejecting finite values that
/// overflow `f32`
fn to_single(values: &[f64]) -> Result<Vec<f32>> {
    values
        .iter()
        .map(|&x| {
            let single = x as f32;
            if x.is_finite() && !single.is_finite() {
                return Err(KernelError::InvalidParameter(format!(
                    "coordinate {x} overflows single precision"
                )));
            }
            Ok(single)
        })
        .collect()
}

fn pair_command(args: PairArgs) -> Result<()> {
    let u = parse_vector(&args.u)?;
    let v = parse_vector(&args.v)?;
    let mut config = apply_bandwidth(KernelConfig::default(), &args.bandwidth);
    if let Some(precision) = args.precision {
        config = config.with_precision(precision.into());
    }
    config.validate()?;
    debug!("u={u:?} v={v:?} oo_sigma2={}", config.oo_sigma2);

    let result = match config.precision {
        Precision::Single => {
            let u_single = to_single(&u)?;
            let v_single = to_single(&v)?;
            evaluate_pair(&args, &u_single, &v_single, config.oo_sigma2_as::<f32>()?)? as f64
        }
        Precision::Double => evaluate_pair(&args, &u, &v, config.oo_sigma2)?,
    };

    println!("{result:.12e}");
    Ok(())
}

fn evaluate_pair<T: Float>(args: &PairArgs, u: &[T], v: &[T], oo_sigma2: T) -> Result<T> {
    if args.varifold {
        info!("Varifold Gaussian kernel, dim={}", u.len());
        try_varifold_gauss_kernel(u, v, oo_sigma2)
    } else if let Some(axis) = args.axis {
        info!("Gaussian kernel derivative along axis {axis}, dim={}", u.len());
        try_gauss_kernel_d1(u, v, oo_sigma2, axis)
    } else {
        info!("Gaussian kernel, dim={}", u.len());
        try_gauss_kernel(u, v, oo_sigma2)
    }
}

fn check_command(args: CheckArgs) -> Result<()> {
    if args.step.is_nan() || args.step <= 0.0 {
        return Err(KernelError::InvalidParameter(format!(
            "step must be positive, got: {}",
            args.step
        )));
    }

    let families: Vec<KernelFamily> = match args.family {
        Some(family) => vec![family.into()],
        None => KernelFamily::ALL.to_vec(),
    };

    let mut failures = 0;
    println!(
        "{:>9} {:>8} {:>10} {:>12} {:>12} {:>12}",
        "family", "r2", "oo_sigma2", "err_d1", "err_d2", "gap_d2"
    );
    for family in families {
        for check in check_grid(family, args.step) {
            let status = if check.passes(args.tolerance) {
                "ok"
            } else {
                failures += 1;
                "FAIL"
            };
            println!(
                "{:>9} {:>8} {:>10} {:>12.3e} {:>12.3e} {:>12.3e} {}",
                check.family,
                check.r2,
                check.oo_sigma2,
                check.first_error,
                check.second_error,
                check.second_gap,
                status
            );
        }
    }

    if failures > 0 {
        return Err(KernelError::InvalidParameter(format!(
            "{failures} derivative checks exceeded tolerance {}",
            args.tolerance
        )));
    }
    info!("All derivative checks passed");
    Ok(())
}

fn config_command(args: ConfigArgs) -> Result<()> {
    let config = apply_bandwidth(
        KernelConfig::new(args.family.into()).with_precision(args.precision.into()),
        &args.bandwidth,
    );
    config.save_to_file(&args.output)?;
    println!("Configuration written to {}", args.output.display());
    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    let file = ConfigFile::load_from_file(&args.config)?;
    file.print_summary();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("0, 1.5,-2").unwrap(), vec![0.0, 1.5, -2.0]);
        assert!(matches!(
            parse_vector("1,x"),
            Err(KernelError::ParseError(_))
        ));
    }

    #[test]
    fn test_apply_bandwidth() {
        let bandwidth = BandwidthArgs {
            sigma: Some(2.0),
            oo_sigma2: None,
        };
        let config = apply_bandwidth(KernelConfig::default(), &bandwidth);
        assert_eq!(config.oo_sigma2, 0.25);

        let bandwidth = BandwidthArgs {
            sigma: None,
            oo_sigma2: None,
        };
        let config = apply_bandwidth(KernelConfig::default().with_oo_sigma2(3.0), &bandwidth);
        assert_eq!(config.oo_sigma2, 3.0);
    }

    #[test]
    fn test_evaluate_rows_precision() {
        let config = KernelConfig::new(KernelFamily::Energy);
        let rows64 = evaluate_rows::<f64>(&config, &[0.0, 15.0]).unwrap();
        let rows32 = evaluate_rows::<f32>(&config, &[0.0, 15.0]).unwrap();
        assert_eq!(rows64.len(), 2);
        assert_eq!(rows64[1].value, 0.5);
        assert!((rows32[0].value - rows64[0].value).abs() < 1e-6);
    }

    #[test]
    fn test_evaluate_rows_rejects_single_overflow() {
        let config = KernelConfig::new(KernelFamily::Gaussian);
        assert!(matches!(
            evaluate_rows::<f32>(&config, &[1e300]),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(evaluate_rows::<f64>(&config, &[1e300]).is_ok());
    }

    #[test]
    fn test_to_single() {
        assert_eq!(to_single(&[0.5, -2.0]).unwrap(), vec![0.5_f32, -2.0]);
        assert!(matches!(
            to_single(&[1.0, 1e300]),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            to_single(&[-1e39]),
            Err(KernelError::InvalidParameter(_))
        ));
        // already non-finite input is passed through
        assert!(to_single(&[f64::INFINITY]).unwrap()[0].is_infinite());
        // underflow to zero is not an overflow
        assert_eq!(to_single(&[1e-300]).unwrap(), vec![0.0_f32]);
    }
}
