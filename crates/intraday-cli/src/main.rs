use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::Parser;
use intraday_core::{RegistryConfig, SecurityRegistry};
use tracing::info;

use intraday_cli::cli::Cli;
use intraday_cli::error::CliError;
use intraday_cli::logging;
use intraday_cli::output::Renderer;
use intraday_cli::session::{Session, PROMPT};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    let config = RegistryConfig::default().with_rounding_mode(cli.rounding.into());
    let registry = SecurityRegistry::with_config(config);
    info!(rounding_mode = ?config.rounding_mode, "intraday tracker started");

    let stdout = io::stdout();
    let mut session = Session::new(
        &registry,
        Renderer::new(cli.format, cli.pretty),
        stdout.lock(),
        cli.strict,
    );

    let summary = match &cli.input {
        Some(path) => session.run(BufReader::new(File::open(path)?))?,
        None => {
            info!("{PROMPT}");
            session.run(io::stdin().lock())?
        }
    };

    info!(
        booked = summary.booked,
        rejected = summary.rejected,
        tracked = registry.len(),
        "intraday tracker terminated"
    );
    Ok(())
}
