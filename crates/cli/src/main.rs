//! CLI tool for ingesting Markdown manuscripts into slide structure records.

use anyhow::{Context, Result};
use clap::Parser;
use slide_core::{write_artifacts, Ingested, MarkdownIngestor};
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Normalize Markdown manuscripts and extract sections and slide hints.
#[derive(Parser, Debug)]
#[command(name = "slide-ingest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: <stem>.ingest next to each input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the structure JSON to stdout instead of writing files
    #[arg(short, long)]
    print: bool,

    /// Print single-line JSON (with --print)
    #[arg(long)]
    compact: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let ingestor = MarkdownIngestor::new();
    let failures = run_batch(&args, &ingestor);

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) failed", failures, args.input.len());
    }

    Ok(())
}

/// Process every input, reporting failures without stopping the batch.
///
/// Returns the number of inputs that failed.
fn run_batch(args: &Args, ingestor: &MarkdownIngestor) -> usize {
    let output_dirs = plan_output_dirs(&args.input, args.output.as_deref());
    let mut failures = 0usize;

    for (input_path, output_dir) in args.input.iter().zip(&output_dirs) {
        log::info!("Processing: {}", input_path.display());

        if let Err(e) = process_file(input_path, output_dir, args, ingestor) {
            failures += 1;
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
        }
    }

    failures
}

/// Ingest a single Markdown file and emit its artifacts.
fn process_file(
    input_path: &Path,
    output_dir: &Path,
    args: &Args,
    ingestor: &MarkdownIngestor,
) -> Result<()> {
    let ingested = ingestor
        .process_file(input_path)
        .with_context(|| format!("Failed to ingest {}", input_path.display()))?;

    log::debug!(
        "  Found {} sections, {} slide hints",
        ingested.structure.sections.len(),
        ingested.structure.hint_count()
    );

    if args.print {
        return print_structure(&ingested, args.compact);
    }

    let paths = write_artifacts(output_dir, &ingested)
        .with_context(|| format!("Failed to write artifacts to {}", output_dir.display()))?;
    if args.verbose {
        eprintln!("Written to: {}", paths.structure.display());
    }

    Ok(())
}

/// Write the structure record to stdout.
fn print_structure(ingested: &Ingested, compact: bool) -> Result<()> {
    let serialized = if compact {
        ingested.structure.to_json()
    } else {
        ingested.structure.to_json_pretty()
    };
    let json = serialized.context("Failed to serialize structure")?;

    writeln!(io::stdout().lock(), "{}", json).context("Failed to write to stdout")?;
    Ok(())
}

/// Assign an artifact directory to every input.
///
/// Inputs that would land in the same directory (same stem in different
/// folders, or the same file given twice) get `-2`, `-3`, ... suffixes.
fn plan_output_dirs(inputs: &[PathBuf], output_dir: Option<&Path>) -> Vec<PathBuf> {
    let multiple = inputs.len() > 1;
    let mut taken = HashSet::new();

    inputs
        .iter()
        .map(|input| {
            let base = get_output_dir(input, output_dir, multiple);
            let mut candidate = base.clone();
            let mut n = 2;
            while !taken.insert(candidate.clone()) {
                candidate = with_suffix(&base, n);
                n += 1;
            }
            candidate
        })
        .collect()
}

fn with_suffix(dir: &Path, n: usize) -> PathBuf {
    let name = dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    dir.with_file_name(format!("{}-{}", name, n))
}

/// Determine the artifact directory for a processed file.
///
/// With an explicit output directory and several inputs, each input gets a
/// sub-directory named after its stem. Collisions are resolved by
/// [`plan_output_dirs`].
fn get_output_dir(input_path: &Path, output_dir: Option<&Path>, multiple: bool) -> PathBuf {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    match output_dir {
        Some(dir) if multiple => dir.join(stem),
        Some(dir) => dir.to_path_buf(),
        None => {
            let dir_name = format!("{}.ingest", stem);
            match input_path.parent() {
                Some(parent) => parent.join(dir_name),
                None => PathBuf::from(dir_name),
            }
        }
    }
}
