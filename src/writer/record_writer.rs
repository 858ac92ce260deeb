use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::render::render_record;
use crate::models::ClippingRecord;

/// Writes each clipping to `<root>/<sanitized title>/<sanitized title> <key>.txt`
///
/// Title directories are created on first use and reused afterwards. An existing file with
/// the same name is overwritten.
#[derive(Debug, Clone)]
pub struct RecordWriter {
    root: PathBuf,
    dry_run: bool,
}

impl RecordWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), dry_run: false }
    }

    /// Compute paths without touching the filesystem
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `record` will be written
    pub fn target_path(&self, record: &ClippingRecord) -> PathBuf {
        self.root.join(record.sanitized_title()).join(record.file_name())
    }

    /// Persist `record`, returning the path of the file
    ///
    /// # Errors
    ///
    /// Returns an error if the title directory cannot be created or the file cannot be written.
    pub fn write(&self, record: &ClippingRecord) -> Result<PathBuf> {
        let path = self.target_path(record);
        if self.dry_run {
            return Ok(path);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        if path.exists() {
            debug!(path = %path.display(), "overwriting existing clipping");
        }
        fs::write(&path, render_record(record))
            .with_context(|| format!("Failed to write clipping: {}", path.display()))?;
        debug!(path = %path.display(), "wrote clipping");

        Ok(path)
    }
}
