use crate::writer::sanitize_component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClippingKind {
    Highlight,
    Note,
}

impl ClippingKind {
    /// Maps the word following `- Your ` on a location line
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Highlight" => Some(Self::Highlight),
            "Note" => Some(Self::Note),
            _ => None,
        }
    }
}

/// Where a clipping sits in its book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// e.g. `Page 43 | Location 596-97`
    pub label: String,
    /// e.g. `596-97`; only used to name the output file
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippingRecord {
    pub title: String,
    pub author: String,
    pub location: Location,
    pub body: String,
    pub kind: ClippingKind,
}

impl ClippingRecord {
    /// Title with filesystem-hostile colons replaced, used for the directory name
    pub fn sanitized_title(&self) -> String {
        sanitize_component(self.title.trim())
    }

    /// Output file name: `<sanitized title> <location key>.txt`
    pub fn file_name(&self) -> String {
        format!("{} {}.txt", self.sanitized_title(), sanitize_component(&self.location.key))
    }
}
