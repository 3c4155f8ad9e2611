#![allow(clippy::print_stderr, clippy::print_stdout)]

use crate::cli::Args;
use anyhow::{Context, bail};
use clap::Parser;
use edamfmt::{
    ChangeKind, Hunk, SourceFormat, canonicalize, load_graph, serialize_canonical,
    serialize_canonical_pretty, unified_diff,
};
use std::fs::{self, File};
use std::io::{IsTerminal, Write, stdout};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// The operation selected by the flag surface, resolved once at startup.
///
/// `--check` and `--reformat` are mutually exclusive and one of them is
/// required, so there is no fallthrough between the two code paths.
enum Operation {
    Check { show_diff: bool },
    Reformat,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let operation = if args.check {
        Operation::Check {
            show_diff: args.diff,
        }
    } else {
        Operation::Reformat
    };

    let format = SourceFormat::detect(&args.input_filename)?;
    debug!(
        file = %args.input_filename.display(),
        format = format.name(),
        "detected serialization format"
    );

    match operation {
        Operation::Check { show_diff } => check(&args.input_filename, format, show_diff),
        Operation::Reformat => {
            let Some(output_filename) = &args.output_filename else {
                bail!("Please specify an output file")
            };
            reformat(&args.input_filename, format, output_filename)
        }
    }
}

fn check(input: &Path, format: SourceFormat, show_diff: bool) -> anyhow::Result<ExitCode> {
    let original = fs::read_to_string(input)
        .with_context(|| format!("Not able to read {}", input.display()))?;
    let mut graph = load_graph(original.as_bytes(), format)
        .with_context(|| format!("Not able to parse {} as {format}", input.display()))?;
    canonicalize(&mut graph);
    let canonical = serialize_canonical(&graph, format)?;

    let hunks = unified_diff(&original, &canonical, 3);
    let changed = hunks
        .iter()
        .flat_map(|hunk| &hunk.changes)
        .filter(|change| !change.is_context())
        .count();
    debug!(changed, "compared with the canonical serialization");
    if show_diff {
        print_diff(&hunks);
    }
    Ok(if changed == 0 {
        println!("No reformatting needed for {}", input.display());
        ExitCode::SUCCESS
    } else {
        println!("Found {changed} differences in {}", input.display());
        ExitCode::from(1)
    })
}

fn reformat(input: &Path, format: SourceFormat, output: &Path) -> anyhow::Result<ExitCode> {
    let original = fs::read_to_string(input)
        .with_context(|| format!("Not able to read {}", input.display()))?;
    let mut graph = load_graph(original.as_bytes(), format)
        .with_context(|| format!("Not able to parse {} as {format}", input.display()))?;
    canonicalize(&mut graph);
    let canonical = serialize_canonical_pretty(&graph, format)?;

    let mut file = File::create_new(output)
        .with_context(|| format!("Not able to create {}, it must not already exist", output.display()))?;
    file.write_all(canonical.as_bytes())
        .with_context(|| format!("Not able to write {}", output.display()))?;
    println!("Reformatted {} to {}", input.display(), output.display());
    Ok(ExitCode::SUCCESS)
}

fn print_diff(hunks: &[Hunk<'_>]) {
    let color = stdout().is_terminal();
    for hunk in hunks {
        println!("{}", hunk.header());
        for change in &hunk.changes {
            let text = change.text.trim_end_matches('\n').trim_end_matches('\r');
            match change.kind {
                ChangeKind::Insert if color => println!("{GREEN}+{text}{RESET}"),
                ChangeKind::Insert => println!("+{text}"),
                ChangeKind::Delete if color => println!("{RED}-{text}{RESET}"),
                ChangeKind::Delete => println!("-{text}"),
                ChangeKind::Context => println!("{text}"),
            }
        }
    }
}
