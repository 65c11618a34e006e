//! Photo Chronicle - organize a photo folder by capture date
//!
//! Thin CLI front-end around the sorting engine: parses arguments,
//! sets up logging, runs one sort and prints the resulting message.

use anyhow::Result;
use clap::Parser;
use photo_chronicle::{Cli, Sorter};
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logging(&cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        folder = %cli.folder.display(),
        "Photo Chronicle starting"
    );

    let mut sorter = Sorter::new(&cli.folder).dry_run(cli.dry_run);

    match sorter.run() {
        Ok(summary) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary.message());
            }
            if cli.dry_run {
                eprintln!("Dry run - no directories were created and no files were moved.");
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, folder = %cli.folder.display(), "Sorting failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Setup logging: stderr always, plus an optional non-blocking file
/// writer when `--log-file` is given.
fn setup_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    let Some(ref log_path) = cli.log_file else {
        subscriber.init();
        return Ok(None);
    };

    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    Ok(Some(guard))
}
