//! Sextant fixture generator.
//!
//! Writes reference fixtures to standard output. Diagnostics go to standard
//! error and are filtered with `RUST_LOG` (default `warn`).
//!
//! # Usage
//!
//! ```bash
//! # Every fixture, bare assignments
//! sextant-gen > fixtures.js
//!
//! # Selected fixtures, declared with `var`
//! sextant-gen --declaration var epj2jd ut1tai
//!
//! # Writer settings from a file
//! sextant-gen --config fixtures.toml
//!
//! # List fixtures, or check every routine against its own fixture
//! sextant-gen --list
//! sextant-gen --verify
//! ```

use std::{
    error::Error,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use sextant_fixture::{Config, Declaration, Tolerance};
use sextant_gen::{Catalog, verify_selected, write_selected};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sextant-gen")]
#[command(about = "Generate reference fixtures for the Sextant astronomy routines")]
#[command(version)]
struct Cli {
    /// Fixtures to generate, in order (default: all)
    names: Vec<String>,

    /// List available fixtures and exit
    #[arg(long)]
    list: bool,

    /// Keyword opening each fixture: none, var, let, or const
    #[arg(long, value_name = "KEYWORD")]
    declaration: Option<Declaration>,

    /// TOML file with writer settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Regenerate each fixture, read it back, and check the routine against it
    #[arg(long)]
    verify: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn Error>> {
    let catalog = Catalog::reference()?;

    if cli.list {
        let mut stdout = io::stdout().lock();
        for entry in catalog.iter() {
            writeln!(
                stdout,
                "{:<8} arity {}  {:>4} of {:>4} tuples",
                entry.name(),
                entry.arity(),
                entry.expected_records(),
                entry.enumerated(),
            )?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(declaration) = cli.declaration {
        config = config.with_declaration(declaration);
    }

    if cli.verify {
        let reports = verify_selected(&catalog, &cli.names, &config, Tolerance::default())?;

        let mut clean = true;
        for (name, report) in &reports {
            for mismatch in &report.mismatches {
                warn!(fixture = %name, ?mismatch, "mismatch");
            }
            if !report.is_clean() {
                let mismatches = report.mismatches.len();
                error!(fixture = %name, mismatches, "verification failed");
                clean = false;
            }
        }
        return Ok(if clean {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut stdout = io::stdout().lock();
    write_selected(&catalog, &cli.names, &config, &mut stdout)?;
    Ok(ExitCode::SUCCESS)
}

fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}
