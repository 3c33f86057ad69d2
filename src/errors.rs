// Error types for lapsight

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum LapsightError {
    // Caller contract violations in the lap series processor
    #[snafu(display("Inconsistent lap sequence: {reason}"))]
    InconsistentLapSequence { reason: String },

    // Input file errors for the command line front end
    #[snafu(display("Invalid input file: {path}"))]
    InputFileMissing { path: String },
    #[snafu(display("Error loading input file"))]
    InputLoadError { source: io::Error },
    #[snafu(display("Error writing output"))]
    OutputError { source: serde_json::Error },
    #[snafu(display("Error writing to standard output"))]
    OutputWriteError { source: io::Error },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
}
