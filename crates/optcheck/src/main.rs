use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use optcheck::{logger, run_all, Runner};

#[derive(Parser, Debug)]
#[command(name = "optcheck", version, about = "Run the Opt<T> contract scenarios")]
struct Cli {
    /// Disable ANSI colours in the report (also honoured: NO_COLOR).
    #[arg(long)]
    no_color: bool,

    /// Debug-level logging unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,

    /// Only run scenarios whose name contains this substring.
    #[arg(long)]
    filter: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    let mut runner = Runner::new(io::stdout(), io::stderr(), color).with_filter(cli.filter);
    run_all(&mut runner).context("writing scenario report")?;

    info!(succeeded = runner.succeeded(), failed = runner.failed(), "scenarios finished");
    Ok(ExitCode::from(runner.exit_code()))
}
