//! Pantrack: The universal track converter.
//!
//! Pantrack reads geospatial track and waypoint files (GPX, KML, KMZ, CSV)
//! and normalizes them into one canonical document of labeled points and
//! ordered paths, ready to be serialized and stored.
//!
//! # Modules
//!
//! - [`ir`]: Canonical document types and the per-format readers
//! - [`format`]: Extension-based format selection and dispatch
//! - [`validation`]: Document validation and issue reporting
//! - [`error`]: Error types for pantrack operations

pub mod error;
pub mod format;
pub mod ir;
pub mod validation;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

pub use error::PantrackError;
pub use format::{parse_named, read_document, Format};

/// The pantrack CLI application.
#[derive(Parser)]
#[command(name = "pantrack")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert a track file into a canonical JSON document.
    Convert(ConvertArgs),
    /// Validate the document produced from a track file.
    Validate(ValidateArgs),
    /// List the supported input formats.
    ListFormats,
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// Input file (.gpx, .kml, .kmz or .csv).
    input: PathBuf,

    /// Input format; detected from the file extension when omitted.
    #[arg(long)]
    format: Option<Format>,

    /// Write the document to this file instead of stdout.
    #[arg(short, long, conflicts_with = "folder")]
    output: Option<PathBuf>,

    /// Store the document as <root>/<folder>/index.json.
    #[arg(long)]
    folder: Option<String>,

    /// Root directory for --folder.
    #[arg(long, env = "PANTRACK_ROOT", default_value = ".")]
    root: PathBuf,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Input file to validate.
    input: PathBuf,

    /// Input format; detected from the file extension when omitted.
    #[arg(long)]
    format: Option<Format>,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the pantrack CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PantrackError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Validate(args)) => run_validate(args),
        Some(Commands::ListFormats) => {
            for format in Format::ALL {
                println!("{}", format);
            }
            Ok(())
        }
        None => {
            println!("pantrack {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("The universal track converter.");
            println!();
            println!("Run 'pantrack --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), PantrackError> {
    let document = read_document(&args.input, args.format)?;
    info!(
        input = %args.input.display(),
        points = document.points.len(),
        paths = document.paths.len(),
        "converted input"
    );

    if let Some(folder) = args.folder.as_deref() {
        let path = ir::io_json::write_document_folder(&args.root, folder, &document)?;
        eprintln!("Stored {}", path.display());
        return Ok(());
    }

    if let Some(output) = args.output.as_deref() {
        return ir::io_json::write_document_json(output, &document);
    }

    let json = ir::io_json::to_json_string(&document).map_err(|source| {
        PantrackError::JsonWrite {
            path: PathBuf::from("<stdout>"),
            source,
        }
    })?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), PantrackError> {
    let document = read_document(&args.input, args.format)?;

    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_document(&document, &opts);

    match args.output.as_str() {
        "json" => {
            let json = serde_json::json!({
                "error_count": report.error_count(),
                "warning_count": report.warning_count(),
                "issues": &report.issues,
            });
            let text = serde_json::to_string_pretty(&json).map_err(|source| {
                PantrackError::JsonWrite {
                    path: PathBuf::from("<stdout>"),
                    source,
                }
            })?;
            println!("{}", text);
        }
        _ => {
            print!("{}", report);
        }
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(PantrackError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}
