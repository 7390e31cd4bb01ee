//! Host boundary for the proportion test.
//!
//! The numeric core is a pure library; this binary is the thin adapter
//! around it: two non-negative integer counts in, one double out. It
//! carries no algorithmic content of its own.
//!
//! stdout is reserved for the result payload (text or JSON); all log
//! output goes to stderr.

use clap::{Parser, ValueEnum};
use prop_math::{proportion_test, selected_method, Method, EXACT_TEST_MAX_TOTAL};
use serde::Serialize;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Two-sided significance test for equal proportions.
///
/// Computes the p-value for the null hypothesis that the two observed
/// counts are drawn from equal underlying proportions. Totals up to 200
/// use the exact binomial test; larger totals use the chi-square
/// approximation.
#[derive(Parser)]
#[command(name = "prop-cli")]
#[command(author, version, about)]
struct Cli {
    /// First observed count (e.g. successes, or positives covered)
    n1: u32,

    /// Second observed count (e.g. failures, or negatives covered)
    n2: u32,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Bare p-value on stdout
    Text,
    /// Single JSON object with inputs, selected method, and p-value
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result payload for `--format json`. Non-finite p-values (the NaN
/// degenerate cases) serialize as `null`.
#[derive(Serialize)]
struct TestReport {
    n1: u32,
    n2: u32,
    method: Method,
    p_value: f64,
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "off"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let n1 = i64::from(cli.n1);
    let n2 = i64::from(cli.n2);

    let method = selected_method(n1, n2);
    tracing::debug!(
        n1,
        n2,
        method = %method,
        threshold = EXACT_TEST_MAX_TOTAL,
        "dispatching significance test"
    );

    let p_value = proportion_test(n1, n2);
    tracing::info!(p_value, "computed p-value");

    match cli.format {
        OutputFormat::Text => println!("{p_value}"),
        OutputFormat::Json => {
            let report = TestReport {
                n1: cli.n1,
                n2: cli.n2,
                method,
                p_value,
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "proportion test failed");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
