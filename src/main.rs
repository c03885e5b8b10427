use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use uniqn::{cli::Cli, config::RunConfig, runner};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Opens the token source: a file when given, standard input otherwise
fn open_input(config: &RunConfig) -> Result<Box<dyn BufRead>> {
    match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    if args.top == Some(0) {
        anyhow::bail!("Invalid value for --top: 0 (must be >= 1)");
    }

    let config = RunConfig::from(&args);
    let input = open_input(&config)?;
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    if let Some(outcome) = runner::run(&config, input, out)? {
        tracing::debug!(?outcome, "run finished");
    }

    Ok(())
}
