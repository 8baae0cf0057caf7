//! Runs a UM program binary against real standard input and output.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use um_vm::Engine;

/// Execute a Universal Machine program.
#[derive(Debug, Parser)]
struct Args {
    /// Path to a UM program binary (a sequence of big-endian 32-bit words).
    program: PathBuf,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_logging();
    let args = Args::parse();

    let program = fs::read(&args.program)
        .with_context(|| format!("failed to read {}", args.program.display()))?;

    let mut engine = Engine::new(&program, io::stdin().lock(), io::stdout().lock())
        .context("failed to load program")?;

    match engine.run() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(fault) => {
            tracing::error!(%fault, "machine halted abnormally");
            eprintln!("um: {fault}");
            Ok(ExitCode::FAILURE)
        }
    }
}
