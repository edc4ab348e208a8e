use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use pip_autoremove::oracle::pip::{PipOracle, DEFAULT_PIP};
use pip_autoremove::remover::Uninstaller;
use pip_autoremove::report::{self, RemovalReport, ReportFormat};

#[derive(Parser, Debug)]
#[command(name = "pip-autoremove")]
#[command(version)]
#[command(about = "Remove a python package and the dependencies it leaves orphaned", long_about = None)]
struct Cli {
    /// Package to remove
    package: String,

    /// Don't ask for confirmation of uninstall deletions
    #[arg(short, long)]
    yes: bool,

    /// pip executable to run
    #[arg(long, env = "PIP_AUTOREMOVE_PIP", default_value = DEFAULT_PIP)]
    pip: PathBuf,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_logging(verbose: u8) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(verbose))
        .with_writer(io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up logging: {}", err);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let uninstaller = Uninstaller::new(PipOracle::new(&cli.pip), cli.yes);
    debug!(pip = %cli.pip.display(), format = %cli.format, "starting");

    let mut stdout = io::stdout().lock();
    let mut announced = Ok(());
    let outcome = uninstaller.run(&cli.package, |orphans| {
        announced = report::announce_orphans(cli.format, orphans, &mut stdout)
            .and_then(|_| stdout.flush());
    })?;
    announced.context("Failed to write report")?;

    report::report(cli.format, &RemovalReport::from(&outcome), &mut stdout)
        .context("Failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
