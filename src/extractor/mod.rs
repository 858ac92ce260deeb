//! Extraction pipeline: read export, parse records, write one file per highlight
//!
//! # Error Handling Strategy
//!
//! The run is a single pass and each record is written as soon as its delimiter is seen:
//!
//! - **Input failures**: An unreadable, oversized or non-UTF-8 input aborts before anything
//!   is written.
//!
//! - **Malformed records**: By default the first heading or location line that fails to
//!   match aborts the run. With [`ExtractOptions::skip_malformed`] the record is logged at
//!   warn level with its line number, counted, and parsing continues at the next delimiter.
//!
//! - **Write failures**: Directory or file creation errors abort the run. Files written for
//!   earlier records stay on disk.
//!
//! - **Truncated input**: A record still open at end of input is never written; a warning
//!   is logged and the summary flags it.

pub mod pipeline;

pub use pipeline::{
    ExtractOptions, extract_clippings, extract_clippings_with, extract_from_str,
};
