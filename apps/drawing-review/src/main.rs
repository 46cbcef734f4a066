//! Drawing Review CLI
//!
//! Compares a "before" revision of an engineering drawing (carrying the
//! reviewer's markups) with an "after" revision (carrying the designer's
//! updates) and prints:
//!
//! - The typed, severity-ranked change-set
//! - Quality scores for both revisions
//! - The engineering checklist for the after revision
//!
//! Inputs are text renderings of the drawings. Undecodable bytes are
//! dropped before analysis.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use review_engine::{decode_revision, ReviewEngine};
use tracing::{debug, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod render;

use error::CliError;
use render::{render_json, render_text};

/// Report output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command-line arguments for the drawing review tool
#[derive(Parser, Debug)]
#[command(name = "drawing-review")]
#[command(about = "Compare two revisions of an engineering drawing")]
pub struct Args {
    /// Revision with the engineer's markups
    #[arg(long)]
    before: PathBuf,

    /// Revision with the designer's updates
    #[arg(long)]
    after: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging and list dimension callouts
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Comparing {} against {}",
        args.before.display(),
        args.after.display()
    );

    let before = read_revision(&args.before)?;
    let after = read_revision(&args.after)?;

    let report = ReviewEngine::new().analyze(&before, &after);
    if report.analysis.is_identical() {
        info!("Revisions are identical, no checklist generated");
    } else {
        info!("Detected {} changes", report.analysis.changes().len());
    }

    let rendered = match args.format {
        OutputFormat::Text => render_text(&report, args.verbose),
        OutputFormat::Json => render_json(&report)?,
    };

    write_report(args.output.as_deref(), &rendered)?;

    Ok(())
}

fn read_revision(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_revision(&bytes))
}

fn write_report(output: Option<&Path>, rendered: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered).map_err(|source| CliError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }
    Ok(())
}
