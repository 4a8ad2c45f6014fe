//! `sfxdb-check`: validate game definition files from the command line
//!
//! Prints a validation report per file and, with `--emit`, the reconstructed
//! definition as JSON. Verbosity is controlled through `RUST_LOG`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rhre_sfxdb::{Reconstruct, bind_game, read_definition, validate_game};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reconstruction strategy used for `--emit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every field must validate; invalid files emit nothing
    Strict,
    /// Invalid fields fall back to defaults, invalid objects are dropped
    Lenient,
}

/// Command-line arguments for sfxdb-check
#[derive(Parser, Debug)]
#[command(name = "sfxdb-check")]
#[command(about = "Validate RHRE sound-effects database game definitions")]
#[command(version)]
struct Args {
    /// Game definition files (`data.json`)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Reconstruction strategy for `--emit`
    #[arg(short, long, value_enum, default_value = "strict", env = "SFXDB_MODE")]
    mode: Mode,

    /// Print the reconstructed definition as JSON
    #[arg(short, long)]
    emit: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rhre_sfxdb=info,sfxdb_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut all_valid = true;
    for path in &args.files {
        all_valid &= check_file(path, &args)?;
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Validate one file; returns whether it was fully valid
fn check_file(path: &Path, args: &Args) -> Result<bool> {
    let value =
        read_definition(path).with_context(|| format!("Failed to load {}", path.display()))?;

    let report = validate_game(&value);
    print!("{report}");
    if report.is_valid() {
        println!();
        info!(file = %path.display(), "definition is valid");
    } else {
        warn!(
            file = %path.display(),
            errors = report.errors.len(),
            "definition has invalid fields"
        );
    }

    if args.emit && value.is_object() {
        let game = bind_game(&value);
        let emitted = match args.mode {
            Mode::Strict => match game.produce_perfect_adt() {
                Ok(record) => Some(serde_json::to_string_pretty(&record)?),
                Err(e) => {
                    warn!(file = %path.display(), "not emitting: {e}");
                    None
                }
            },
            Mode::Lenient => Some(serde_json::to_string_pretty(&game.produce_imperfect_adt())?),
        };
        if let Some(json) = emitted {
            println!("{json}");
        }
    }

    Ok(report.is_valid())
}
