//! Field extraction for the heading and location lines of a clipping.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ClippingKind, Location};

// Greedy title: everything up to the whitespace before the final parenthetical group.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<title>.*)\s\((?P<author>[^)]*)\)\s*$").expect("heading pattern is valid")
});

// The optional `page N | ` segment is swallowed by the label's leading `.*`.
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"- Your (?P<kind>Highlight|Note) on (?P<label>(?:[Pp]age\s.*)?.*Location\s(?P<key>\S+))",
    )
    .expect("location pattern is valid")
});

/// Title and author taken from the first line of a clipping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub title: String,
    pub author: String,
}

/// Parse a `Title (Series) (Author)` heading line
///
/// The author is the content of the last parenthetical group; every earlier group stays part
/// of the title. Returns `None` when the line has no trailing group or either field is blank.
///
/// # Examples
///
/// ```
/// use kindle_clipper::parsers::parse_heading;
///
/// let heading = parse_heading("Casino Royale (James Bond) (Ian Fleming)").unwrap();
/// assert_eq!(heading.title, "Casino Royale (James Bond)");
/// assert_eq!(heading.author, "Ian Fleming");
/// ```
pub fn parse_heading(line: &str) -> Option<Heading> {
    let caps = HEADING_RE.captures(line)?;
    let title = &caps["title"];
    let author = &caps["author"];

    if title.trim().is_empty() || author.trim().is_empty() {
        return None;
    }

    Some(Heading { title: title.to_string(), author: author.to_string() })
}

/// Parse a `- Your Highlight on Page 43 | Location 596-97 | Added on ...` line
///
/// The label runs from the optional page segment through the location token, with a
/// lowercase `page` capitalized. The date segment is discarded.
///
/// # Examples
///
/// ```
/// use kindle_clipper::parsers::parse_location;
///
/// let (_, location) =
///     parse_location("- Your Highlight on page 43 | Location 596-97 | Added on Friday").unwrap();
/// assert_eq!(location.label, "Page 43 | Location 596-97");
/// assert_eq!(location.key, "596-97");
/// ```
pub fn parse_location(line: &str) -> Option<(ClippingKind, Location)> {
    let caps = LOCATION_RE.captures(line)?;
    let kind = ClippingKind::from_label(&caps["kind"])?;
    let location = Location {
        label: caps["label"].replace("page", "Page"),
        key: caps["key"].to_string(),
    };

    Some((kind, location))
}
