//! Parsers for Kindle `My Clippings.txt` exports
//!
//! # Error Handling Strategy
//!
//! Parsing is split in two layers:
//!
//! - **Field extraction** ([`fields`]): pure functions that pattern-match a single heading or
//!   location line and return `None` when the line does not have the expected shape.
//!
//! - **Record segmentation** ([`clippings`]): a line-driven state machine that yields
//!   `Result<ClippingRecord, ParseError>`. A heading or location line that fails to match is
//!   reported as a [`ParseError`] carrying the 1-based line number, after which the parser
//!   discards the rest of that record and resumes at the next delimiter.
//!
//! Whether a [`ParseError`] aborts the run or is logged and skipped is decided by the caller
//! (see [`crate::extractor`]), so the parser itself never drops errors silently.

pub mod clippings;
pub mod error;
pub mod fields;

pub use clippings::{ClippingParser, NOTE_BLOCK_LINES, NOTE_MARKER, NoteSkip, RECORD_DELIMITER};
pub use error::ParseError;
pub use fields::{Heading, parse_heading, parse_location};
