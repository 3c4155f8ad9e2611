use clap::{ArgGroup, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "edamfmt")]
#[command(group = ArgGroup::new("operation").required(true).args(["check", "reformat"]))]
/// Checks and reformats EDAM ontology files into their canonical serialization
pub struct Args {
    /// Verify that the input file is already in canonical form
    ///
    /// Exits with 0 when no reformatting is needed and with 1 otherwise.
    #[arg(long)]
    pub check: bool,
    /// Print the differences found by --check as a unified diff
    #[arg(long, requires = "check")]
    pub diff: bool,
    /// Write the canonical form of the input file to OUTPUT_FILENAME
    #[arg(long)]
    pub reformat: bool,
    /// Ontology file to check or reformat, in RDF/XML or Turtle syntax
    #[arg(value_hint = ValueHint::FilePath)]
    pub input_filename: PathBuf,
    /// Destination of the canonical serialization, required by --reformat
    ///
    /// The destination must not already exist, existing files are never
    /// overwritten.
    #[arg(value_hint = ValueHint::FilePath)]
    pub output_filename: Option<PathBuf>,
}
