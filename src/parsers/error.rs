use thiserror::Error;

/// A record line that did not have the shape its position in the record requires
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected a `Title (Author)` heading, found {content:?}")]
    MalformedHeading { line: usize, content: String },

    #[error("line {line}: expected a `- Your Highlight on ... Location <n>` line, found {content:?}")]
    MalformedLocation { line: usize, content: String },
}

impl ParseError {
    /// 1-based line number of the offending line
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedHeading { line, .. } | Self::MalformedLocation { line, .. } => *line,
        }
    }
}
