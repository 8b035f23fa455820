//! # Relieve CLI
//!
//! Command-line interface for embossing rasterized chart data.
//!
//! ## Usage
//!
//! ```bash
//! # Emboss a job on the default device
//! relieve emboss chart.json
//!
//! # Graphic mode with an explicit table
//! relieve emboss --capability GRAPHIC --table tables/index_direct_6.properties chart.json
//!
//! # Write the assembled bytes to a file instead of a device
//! relieve emboss --output chart.bin chart.json
//!
//! # Target a specific embosser profile (page-fit check)
//! relieve emboss --embosser basic chart.json
//! ```
//!
//! ## Job File Format
//!
//! A job is a JSON document with either a matrix or a point list:
//!
//! ```json
//! {
//!     "capability": "GRAPHIC",
//!     "matrix": { "rows": [[1, 0], [0, 1], [0, 0]] }
//! }
//! ```
//!
//! ```json
//! {
//!     "capability": "FLOATING_DOT",
//!     "points": [ { "x_mm": 10.0, "y_mm": 5.5, "value": 1 } ]
//! }
//! ```

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use relieve::{
    Capability, DotMatrix, EmbosserConfig, FloatingPointSet, PrintDispatcher, RelieveError,
    dispatch::PrintSource,
    table::BrailleTable,
};

/// Relieve - braille embosser utility
#[derive(Parser, Debug)]
#[command(name = "relieve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a job file and send it to an embosser
    Emboss {
        /// Path to the JSON job file
        job: PathBuf,

        /// Braille table resource
        #[arg(long, default_value = "tables/index_direct_6.properties")]
        table: PathBuf,

        /// Capability tag (PLAIN, GRAPHIC, FLOATING_DOT); overrides the
        /// job file and the embosser profile default
        #[arg(long)]
        capability: Option<String>,

        /// Embosser profile (everest, basic) for page-fit checking
        #[arg(long, default_value = "everest")]
        embosser: String,

        /// Embosser device path
        #[arg(long, default_value = "/dev/usb/lp0")]
        device: String,

        /// Write the assembled buffer to a file instead of a device
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

// ============================================================================
// JOB FILE FORMAT
// ============================================================================

/// One print job as read from disk.
#[derive(Debug, Deserialize)]
struct EmbossJob {
    /// Capability tag; falls back to the embosser profile default.
    capability: Option<String>,
    matrix: Option<JobMatrix>,
    points: Option<Vec<JobPoint>>,
}

#[derive(Debug, Deserialize)]
struct JobMatrix {
    /// Dot intensities, one inner array per dot row.
    rows: Vec<Vec<u8>>,
}

#[derive(Debug, Deserialize)]
struct JobPoint {
    x_mm: f32,
    y_mm: f32,
    value: u8,
}

impl EmbossJob {
    fn load(path: &PathBuf) -> Result<Self, RelieveError> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| RelieveError::InvalidValue(format!("invalid job file: {}", e)))
    }

    /// Convert the job payload into a print source.
    fn source(&self) -> Result<PrintSource, RelieveError> {
        match (&self.matrix, &self.points) {
            (Some(matrix), None) => {
                let rows = matrix.rows.len();
                let columns = matrix.rows.first().map_or(0, Vec::len);
                if matrix.rows.iter().any(|r| r.len() != columns) {
                    return Err(RelieveError::InvalidValue(
                        "matrix rows have unequal lengths".to_string(),
                    ));
                }
                let mut dots = DotMatrix::new(rows, columns);
                for (r, row) in matrix.rows.iter().enumerate() {
                    for (c, &value) in row.iter().enumerate() {
                        dots.set_value(r, c, value)?;
                    }
                }
                Ok(PrintSource::Matrix(dots))
            }
            (None, Some(points)) => {
                let mut set = FloatingPointSet::new();
                for p in points {
                    set.push(p.x_mm, p.y_mm, p.value);
                }
                Ok(PrintSource::Points(set))
            }
            (Some(_), Some(_)) => Err(RelieveError::InvalidValue(
                "job file has both 'matrix' and 'points'".to_string(),
            )),
            (None, None) => Err(RelieveError::NullInput(
                "job file has neither 'matrix' nor 'points'".to_string(),
            )),
        }
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RelieveError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Emboss {
            job,
            table,
            capability,
            embosser,
            device,
            output,
        } => {
            let profile = EmbosserConfig::by_name(&embosser).ok_or_else(|| {
                RelieveError::InvalidValue(format!(
                    "unknown embosser profile '{}' (use 'everest' or 'basic')",
                    embosser
                ))
            })?;

            let job = EmbossJob::load(&job)?;
            let source = job.source()?;

            // CLI flag beats job file beats profile default.
            let tag = capability
                .or(job.capability)
                .unwrap_or_else(|| profile.default_capability.tag().to_string());

            let mut dispatcher = PrintDispatcher::new();
            match Capability::from_tag(&tag) {
                Capability::FloatingDot => dispatcher.configure_floating(&tag)?,
                _ => {
                    let table = BrailleTable::resolve(&table)?;
                    dispatcher.configure_with_table(&tag, table)?;
                }
            }

            match source {
                PrintSource::Matrix(matrix) => {
                    if !profile.fits(&matrix) {
                        return Err(RelieveError::InvalidValue(format!(
                            "{}x{} matrix does not fit a {} page ({}x{} dots)",
                            matrix.rows(),
                            matrix.columns(),
                            profile.name,
                            profile.max_matrix_rows(),
                            profile.max_matrix_columns(),
                        )));
                    }
                    dispatcher.attach_matrix(matrix);
                }
                PrintSource::Points(points) => dispatcher.attach_points(points),
            }

            let document = dispatcher.assemble()?.clone();
            println!(
                "Assembled {} bytes for {} ({})",
                document.len(),
                profile.name,
                dispatcher.capability().tag()
            );

            if let Some(path) = output {
                fs::write(&path, document.as_bytes())?;
                println!("Saved to {}", path.display());
            } else {
                dispatcher.send_to_device(&device)?;
                println!("Embossed successfully!");
            }
        }
    }

    Ok(())
}
