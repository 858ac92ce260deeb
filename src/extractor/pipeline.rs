use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::models::ExtractSummary;
use crate::parsers::{ClippingParser, NoteSkip};
use crate::utils::read_clippings_file;
use crate::writer::RecordWriter;

/// Settings for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory that receives one sub-directory per title
    pub output_dir: PathBuf,
    /// Log and skip malformed records instead of aborting
    pub skip_malformed: bool,
    pub note_skip: NoteSkip,
    /// Report target paths without writing
    pub dry_run: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            skip_malformed: false,
            note_skip: NoteSkip::default(),
            dry_run: false,
        }
    }
}

/// Split the clippings export at `input` into one file per highlight
///
/// # Errors
///
/// Returns an error if the input cannot be read, a record is malformed (unless
/// `skip_malformed` is set), or an output directory or file cannot be created.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use kindle_clipper::{ExtractOptions, extract_clippings};
///
/// let summary = extract_clippings(Path::new("My Clippings.txt"), &ExtractOptions::default())?;
/// println!("Wrote {} clippings", summary.records_written);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn extract_clippings(input: &Path, options: &ExtractOptions) -> Result<ExtractSummary> {
    extract_clippings_with(input, options, |_| {})
}

/// Like [`extract_clippings`], calling `on_record` with each target path as it is handled
pub fn extract_clippings_with(
    input: &Path,
    options: &ExtractOptions,
    on_record: impl FnMut(&Path),
) -> Result<ExtractSummary> {
    let text = read_clippings_file(input)?;
    info!(input = %input.display(), bytes = text.len(), "read clippings export");

    extract_from_str(&text, options, on_record)
        .with_context(|| format!("Failed to extract clippings from {}", input.display()))
}

/// Run the pipeline over already decoded text
///
/// `on_record` is called with the target path of every record handed to the writer.
pub fn extract_from_str(
    text: &str,
    options: &ExtractOptions,
    mut on_record: impl FnMut(&Path),
) -> Result<ExtractSummary> {
    let writer = RecordWriter::new(&options.output_dir).dry_run(options.dry_run);
    let mut parser = ClippingParser::new(text).with_note_skip(options.note_skip);
    let mut summary = ExtractSummary::default();

    for result in parser.by_ref() {
        let record = match result {
            Ok(record) => record,
            Err(err) if options.skip_malformed => {
                warn!(line = err.line(), "skipping malformed clipping: {}", err);
                summary.malformed_skipped += 1;
                continue;
            }
            Err(err) => return Err(err).context("Malformed clipping record"),
        };

        let path = writer.write(&record)?;
        on_record(&path);
        summary.record_title(&record.sanitized_title());
        summary.records_written += 1;
    }

    summary.notes_skipped = parser.notes_skipped();
    if parser.has_pending_record() {
        warn!("input ended inside a clipping; the incomplete record was not written");
        summary.incomplete_dropped = true;
    }

    info!(
        written = summary.records_written,
        titles = summary.title_count(),
        notes = summary.notes_skipped,
        malformed = summary.malformed_skipped,
        "extraction finished"
    );

    Ok(summary)
}
