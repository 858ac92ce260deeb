//! Data models for Kindle clipping exports.
//!
//! - [`ClippingRecord`] - One finalized highlight, ready to be written
//! - [`ClippingKind`] - Highlight vs. note, read from the location line
//! - [`Location`] - Human-readable location phrase plus the raw location token
//! - [`ExtractSummary`] - Counters reported at the end of a run

pub mod clipping;
pub mod summary;

pub use clipping::{ClippingKind, ClippingRecord, Location};
pub use summary::ExtractSummary;
