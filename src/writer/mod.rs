//! Persisting finalized clippings as one text file per highlight.
//!
//! Output paths are composed explicitly as `<root>/<sanitized title>/<file name>`; the process
//! working directory is never changed.

pub mod record_writer;
pub mod render;

pub use record_writer::RecordWriter;
pub use render::{render_record, sanitize_component};
