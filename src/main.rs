mod cli;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use chmodr::{ChmodOptions, Concurrency};
use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("chmodr: {err:#}");
            ExitCode::from(1)
        }
    }
}

/// Returns whether every path succeeded.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut all_ok = true;

    if cli.sync {
        for path in &cli.paths {
            if let Err(err) = chmodr::chmodr_sync(path, cli.mode) {
                eprintln!("chmodr: {err}");
                all_ok = false;
            }
        }
        return Ok(all_ok);
    }

    let options = ChmodOptions {
        concurrency: if cli.sequential {
            Concurrency::Sequential
        } else {
            Concurrency::FanOut
        },
    };
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        for path in &cli.paths {
            if let Err(err) = chmodr::chmodr_with(path, cli.mode, &options).await {
                eprintln!("chmodr: {err}");
                all_ok = false;
            }
        }
    });

    Ok(all_ok)
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chmodr=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chmodr=info,warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
