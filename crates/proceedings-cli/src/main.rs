//! Proceedings CLI - decide whether court applications' proceedings are concluded.

use clap::Parser;
use proceedings_cli::commands;
use proceedings_cli::{Cli, Command, Config, Formatter};
use proceedings_engine::ConclusionEngine;
use proceedings_refdata::ReferenceDataHandle;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> proceedings_cli::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // RUST_LOG wins over --log-level, which wins over the config file
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let format = cli.format.map(Into::into).unwrap_or(config.output.format);
    let color_enabled = !cli.no_color && config.output.color;
    let formatter = Formatter::new(format, color_enabled);

    let reference_path = config.reference_data_path(cli.reference_data.as_deref())?;

    match cli.command {
        Command::Check => commands::execute_check(&reference_path, &formatter)?,
        Command::Decide(args) => {
            let engine = build_engine(&config, cli.strict, &reference_path)?;
            commands::execute_decide(args, &engine, &formatter)?
        }
        Command::Batch(args) => {
            let engine = build_engine(&config, cli.strict, &reference_path)?;
            commands::execute_batch(args, &engine, &formatter)?
        }
    }

    Ok(())
}

fn build_engine(config: &Config, strict: bool, reference_path: &Path) -> proceedings_cli::Result<ConclusionEngine> {
    let mut engine_config = config.engine.clone();
    if strict {
        engine_config.unrecognised_categories_block = true;
    }

    let reference = ReferenceDataHandle::from_file(reference_path)?;
    Ok(ConclusionEngine::new(reference, engine_config)?)
}
