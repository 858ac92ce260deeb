use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::extractor::{ExtractOptions, extract_clippings_with};
use crate::models::ExtractSummary;
use crate::parsers::NoteSkip;

#[derive(Parser)]
#[command(name = "kindle-clipper")]
#[command(version = "0.1.0")]
#[command(
    about = "Split a Kindle 'My Clippings.txt' export into one file per highlight",
    long_about = None
)]
pub struct Cli {
    /// Path to the clippings export
    pub input: PathBuf,

    /// Directory receiving one folder per book title
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Log and skip malformed records instead of stopping at the first one
    #[arg(long)]
    pub skip_malformed: bool,

    /// Skip note blocks up to the next delimiter instead of a fixed three lines
    #[arg(long)]
    pub notes_until_delimiter: bool,

    /// Print the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            output_dir: self.output_dir.clone(),
            skip_malformed: self.skip_malformed,
            note_skip: if self.notes_until_delimiter {
                NoteSkip::UntilDelimiter
            } else {
                NoteSkip::FixedLines
            },
            dry_run: self.dry_run,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.extract_options();

    let summary = extract_clippings_with(&cli.input, &options, |path| {
        if options.dry_run {
            println!("{}", path.display());
        }
    })?;

    print_summary(&summary, &options);
    Ok(())
}

fn print_summary(summary: &ExtractSummary, options: &ExtractOptions) {
    let verb = if options.dry_run { "Would write" } else { "Wrote" };
    println!(
        "{} {} clippings for {} titles in {}",
        verb,
        summary.records_written,
        summary.title_count(),
        options.output_dir.display()
    );
    if summary.notes_skipped > 0 {
        println!("  Notes skipped: {}", summary.notes_skipped);
    }
    if summary.malformed_skipped > 0 {
        println!("  Malformed records skipped: {}", summary.malformed_skipped);
    }
}
