use std::collections::BTreeSet;

/// Outcome of one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub records_written: usize,
    pub notes_skipped: usize,
    pub malformed_skipped: usize,
    /// A record was still open when the input ended and was dropped
    pub incomplete_dropped: bool,
    titles: BTreeSet<String>,
}

impl ExtractSummary {
    pub fn record_title(&mut self, sanitized_title: &str) {
        if !self.titles.contains(sanitized_title) {
            self.titles.insert(sanitized_title.to_string());
        }
    }

    pub fn title_count(&self) -> usize {
        self.titles.len()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }
}
