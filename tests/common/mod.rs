//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const DEFAULT_ADDED_ON: &str = "Added on Friday, October 11, 2013 12:08:01 PM";

/// Builder for `My Clippings.txt` exports
pub struct ClippingsBuilder {
    blocks: Vec<String>,
    bom: bool,
    crlf: bool,
}

impl ClippingsBuilder {
    pub fn new() -> Self {
        Self { blocks: Vec::new(), bom: false, crlf: false }
    }

    /// Prefix the export with a UTF-8 byte-order mark, as Kindle devices do
    pub fn with_bom(mut self) -> Self {
        self.bom = true;
        self
    }

    /// Use `\r\n` line endings
    pub fn with_crlf(mut self) -> Self {
        self.crlf = true;
        self
    }

    pub fn highlight(mut self, highlight: HighlightBuilder) -> Self {
        self.blocks.push(highlight.to_block());
        self
    }

    /// Add a single-line note block
    pub fn note(mut self, heading: &str, text: &str) -> Self {
        self.blocks.push(format!(
            "{}\n- Your Note on Location 1 | {}\n\n{}\n==========\n",
            heading, DEFAULT_ADDED_ON, text
        ));
        self
    }

    /// Append raw text verbatim
    pub fn raw(mut self, text: &str) -> Self {
        self.blocks.push(text.to_string());
        self
    }

    pub fn build_string(&self) -> String {
        let mut content = self.blocks.concat();
        if self.crlf {
            content = content.replace('\n', "\r\n");
        }
        if self.bom {
            content.insert(0, '\u{FEFF}');
        }
        content
    }

    /// Write the export into a fresh temp directory
    pub fn build(self) -> ClippingsFixture {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("My Clippings.txt");
        fs::write(&input, self.build_string()).expect("Failed to write clippings file");
        let output = temp_dir.path().join("out");
        ClippingsFixture { temp_dir, input, output }
    }
}

impl Default for ClippingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single highlight block
pub struct HighlightBuilder {
    heading: String,
    page: Option<String>,
    location: String,
    body: Vec<String>,
}

impl HighlightBuilder {
    pub fn new(heading: &str) -> Self {
        Self {
            heading: heading.to_string(),
            page: None,
            location: "1-2".to_string(),
            body: vec!["Test highlight".to_string()],
        }
    }

    pub fn page(mut self, page: &str) -> Self {
        self.page = Some(page.to_string());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    /// Set the body lines (one entry per physical line)
    pub fn body(mut self, lines: &[&str]) -> Self {
        self.body = lines.iter().map(|line| line.to_string()).collect();
        self
    }

    pub fn to_block(&self) -> String {
        let page = self.page.as_ref().map(|p| format!("Page {} | ", p)).unwrap_or_default();
        let mut block = format!(
            "{}\n- Your Highlight on {}Location {} | {}\n\n",
            self.heading, page, self.location, DEFAULT_ADDED_ON
        );
        for line in &self.body {
            block.push_str(line);
            block.push('\n');
        }
        block.push_str("==========\n");
        block
    }
}

/// A clippings export on disk plus an output directory beside it
pub struct ClippingsFixture {
    temp_dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ClippingsFixture {
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a written clipping relative to the output directory
    pub fn read_output(&self, title_dir: &str, file_name: &str) -> String {
        fs::read_to_string(self.output.join(title_dir).join(file_name))
            .unwrap_or_else(|e| panic!("Failed to read {}/{}: {}", title_dir, file_name, e))
    }

    /// All files written under the output directory, as `title/file` strings, sorted
    pub fn output_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        let Ok(dirs) = fs::read_dir(&self.output) else {
            return files;
        };
        for dir in dirs {
            let dir = dir.expect("Failed to read output entry").path();
            for file in fs::read_dir(&dir).expect("Failed to read title dir") {
                let file = file.expect("Failed to read title entry").path();
                files.push(format!(
                    "{}/{}",
                    dir.file_name().unwrap().to_string_lossy(),
                    file.file_name().unwrap().to_string_lossy()
                ));
            }
        }
        files.sort();
        files
    }
}

/// A realistic export mixing series titles, page-less locations, notes and multi-line bodies
pub fn realistic_export() -> ClippingsBuilder {
    ClippingsBuilder::new()
        .with_bom()
        .highlight(
            HighlightBuilder::new("Casino Royale (James Bond) (Ian Fleming)")
                .page("43")
                .location("596-97")
                .body(&["'My name's Felix Leiter,' said the American. 'Glad to meet you.'"]),
        )
        .note("Casino Royale (James Bond) (Ian Fleming)", "Bond meets Leiter")
        .highlight(
            HighlightBuilder::new(
                "Feynman's Rainbow: A Search for Beauty in Physics and in Life (Leonard Mlodinow)",
            )
            .location("120-24")
            .body(&["The first line of a passage", "that continued on the next line."]),
        )
        .highlight(
            HighlightBuilder::new("Casino Royale (James Bond) (Ian Fleming)")
                .page("101")
                .location("1540-41")
                .body(&["Bond - James Bond."]),
        )
}
