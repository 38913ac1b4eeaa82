mod cli;
mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::Config;
use secpic::{Destination, EditOptions, SerialOverride};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "secpic=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let options = EditOptions {
        destination: if cli.new || config.new_copy() {
            Destination::NewCopy
        } else {
            Destination::InPlace
        },
        backup: cli.backup || config.backup(),
    };
    let overrides = cli.overrides();
    tracing::debug!(?overrides, ?options, "parsed arguments");

    let report = secpic::apply_edit(&cli.filename, &overrides, &options, &mut rand::thread_rng())
        .with_context(|| format!("Failed to process {}", cli.filename.display()))?;

    for error in &report.revision.rejected {
        for line in report::warning_lines(error) {
            eprintln!("{}", line);
        }
    }
    if report.backup_created {
        eprintln!("Backup written next to {}", cli.filename.display());
    }

    let mut stdout = io::stdout().lock();
    if cli.json {
        report::write_json(&mut stdout, &report)?;
    } else {
        let random_serial = matches!(overrides.serial, Some(SerialOverride::Random));
        report::write_text(&mut stdout, &report, random_serial)?;
    }

    Ok(())
}
