//! CPF checker binary.
//!
//! # Usage
//!
//! ```bash
//! # Check values given as arguments
//! cpf-check 048.448.730-24 11116506670
//!
//! # Check one value per line from stdin, JSON output
//! cpf-check --format json < cpfs.txt
//!
//! # Exit status only
//! cpf-check --quiet 530.194.510-62 || echo "invalid"
//! ```

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use cpf_cli::{CheckConfig, CliError, OutputFormat, check_values, read_candidates};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Validate Brazilian CPF numbers
#[derive(Parser, Debug)]
#[command(name = "cpf-check")]
#[command(about = "Validate Brazilian CPF numbers")]
#[command(version)]
struct Args {
    /// Values to check; reads one per line from stdin when omitted
    values: Vec<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print nothing, only set the exit status
    #[arg(short, long)]
    quiet: bool,

    /// Stop at the first invalid value
    #[arg(long)]
    fail_fast: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl From<&Args> for CheckConfig {
    fn from(args: &Args) -> Self {
        Self { format: args.format, quiet: args.quiet, fail_fast: args.fail_fast }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        },
    }
}

/// Returns whether every value was a valid CPF.
fn run(args: &Args) -> Result<bool, CliError> {
    let config = CheckConfig::from(args);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = if args.values.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            tracing::warn!("reading CPF values from terminal, one per line");
        }
        let candidates = read_candidates(stdin.lock())?;
        check_values(&config, &candidates, &mut out)?
    } else {
        check_values(&config, &args.values, &mut out)?
    };

    Ok(summary.all_valid())
}
