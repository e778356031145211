use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;
mod domain;
mod services;

use crate::cli::{Cli, Commands};
use crate::commands::{handle_detect, handle_generate, handle_questions};
use crate::services::detect::DetectContext;
use crate::services::files::DiskFiles;

const LOG_ENV: &str = "README_GEN_LOG";

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so prompts and reports on stdout stay clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cwd = project_dir(cli.dir)?;
    let ctx = DetectContext::from_env(cwd);
    tracing::debug!(cwd = %ctx.cwd.display(), "detecting project");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        None => handle_generate(&ctx, &DiskFiles, std::io::stdin().lock(), &mut stdout),
        Some(Commands::Detect) => handle_detect(&ctx, &DiskFiles, cli.json, &mut stdout),
        Some(Commands::Questions) => handle_questions(&ctx, &DiskFiles, cli.json, &mut stdout),
    }
}

fn project_dir(dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let dir = match dir {
        Some(d) => cwd.join(d),
        None => cwd,
    };
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }
    Ok(dir.canonicalize()?)
}
