//! Kindle Clipper - Split a Kindle clippings export into one file per highlight
//!
//! Kindle devices append every highlight and note to a single `My Clippings.txt`. This
//! library walks that export line by line and writes each highlight to
//! `<output>/<title>/<title> <location>.txt`. It supports:
//!
//! - Titles with series parentheticals, e.g. `Casino Royale (James Bond) (Ian Fleming)`
//! - Location lines with or without a page number
//! - Multi-line highlight bodies
//! - Skipping note blocks
//!
//! # Example
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use kindle_clipper::{ExtractOptions, extract_clippings};
//!
//! let options = ExtractOptions { output_dir: PathBuf::from("clippings"), ..Default::default() };
//! let summary = extract_clippings(Path::new("My Clippings.txt"), &options)?;
//! println!("Wrote {} clippings", summary.records_written);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod extractor;
pub mod models;
pub mod parsers;
pub mod utils;
pub mod writer;

// Re-export commonly used types
pub use extractor::{ExtractOptions, extract_clippings};
pub use models::{ClippingKind, ClippingRecord, ExtractSummary, Location};
pub use parsers::{ClippingParser, ParseError};
pub use writer::RecordWriter;
