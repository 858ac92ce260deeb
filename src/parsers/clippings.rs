//! Record segmentation for `My Clippings.txt`.
//!
//! A highlight occupies a fixed cycle of lines closed by a delimiter:
//!
//! ```text
//! Casino Royale (James Bond) (Ian Fleming)
//! - Your Highlight on Page 43 | Location 596-97 | Added on Friday, October 11, 2013
//!
//! 'My name's Felix Leiter,' said the American.
//! ==========
//! ```
//!
//! The body may span several physical lines; it runs until the delimiter. A line containing
//! [`NOTE_MARKER`] interrupts whatever record is in progress and starts a note block, which
//! is skipped according to the parser's [`NoteSkip`] policy.

use std::iter::Enumerate;
use std::mem;
use std::str::SplitInclusive;

use tracing::debug;

use super::error::ParseError;
use super::fields::{Heading, parse_heading, parse_location};
use crate::models::{ClippingKind, ClippingRecord, Location};

/// Line closing every record; only a delimiter when followed by a line terminator
pub const RECORD_DELIMITER: &str = "==========";

/// Substring identifying the location line of a note block
pub const NOTE_MARKER: &str = "- Your Note on ";

/// Lines consumed after a note marker under [`NoteSkip::FixedLines`]:
/// the blank separator, the note text and the delimiter
pub const NOTE_BLOCK_LINES: usize = 3;

/// How a note block is skipped once its marker line is seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteSkip {
    /// Discard exactly [`NOTE_BLOCK_LINES`] lines, whatever they contain
    #[default]
    FixedLines,
    /// Discard lines up to and including the next delimiter (handles multi-line notes)
    UntilDelimiter,
}

/// One physical line with its terminator removed
#[derive(Debug, Clone, Copy)]
struct RawLine<'a> {
    number: usize,
    text: &'a str,
    terminated: bool,
}

impl<'a> RawLine<'a> {
    fn new(index: usize, raw: &'a str) -> Self {
        let (text, terminated) = match raw.strip_suffix('\n') {
            Some(rest) => (rest.strip_suffix('\r').unwrap_or(rest), true),
            None => (raw, false),
        };
        Self { number: index + 1, text, terminated }
    }

    fn is_delimiter(&self) -> bool {
        self.terminated && self.text == RECORD_DELIMITER
    }
}

/// A record whose heading, location and separator have been seen
#[derive(Debug)]
struct PendingRecord<'a> {
    heading: Heading,
    kind: ClippingKind,
    location: Location,
    body: Vec<&'a str>,
}

impl PendingRecord<'_> {
    fn finish(self) -> ClippingRecord {
        ClippingRecord {
            title: self.heading.title,
            author: self.heading.author,
            location: self.location,
            body: self.body.join("\n").trim().to_string(),
            kind: self.kind,
        }
    }
}

#[derive(Debug)]
enum State<'a> {
    Header,
    LocationLine(Heading),
    BlankSeparator(Heading, ClippingKind, Location),
    Body(PendingRecord<'a>),
    SkipLines(usize),
    SkipToDelimiter,
}

/// Lazily splits a decoded clippings export into [`ClippingRecord`]s
///
/// Yields `Err` for a heading or location line that does not match; the rest of that
/// record is then discarded and parsing resumes after the next delimiter.
///
/// # Examples
///
/// ```
/// use kindle_clipper::parsers::ClippingParser;
///
/// let text = "Dune (Frank Herbert)\n\
///             - Your Highlight on Page 1 | Location 1-2 | Added on Monday\n\
///             \n\
///             Fear is the mind-killer.\n\
///             ==========\n";
///
/// let records: Vec<_> = ClippingParser::new(text).collect::<Result<_, _>>()?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].body, "Fear is the mind-killer.");
/// # Ok::<(), kindle_clipper::parsers::ParseError>(())
/// ```
#[derive(Debug)]
pub struct ClippingParser<'a> {
    lines: Enumerate<SplitInclusive<'a, char>>,
    state: State<'a>,
    note_skip: NoteSkip,
    notes_skipped: usize,
}

impl<'a> ClippingParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split_inclusive('\n').enumerate(),
            state: State::Header,
            note_skip: NoteSkip::default(),
            notes_skipped: 0,
        }
    }

    pub fn with_note_skip(mut self, note_skip: NoteSkip) -> Self {
        self.note_skip = note_skip;
        self
    }

    /// Number of note blocks discarded so far
    pub fn notes_skipped(&self) -> usize {
        self.notes_skipped
    }

    /// True while a highlight has been started but not closed by a delimiter
    pub fn has_pending_record(&self) -> bool {
        matches!(
            self.state,
            State::LocationLine(_) | State::BlankSeparator(..) | State::Body(_)
        )
    }

    fn step(&mut self, line: RawLine<'a>) -> Option<Result<ClippingRecord, ParseError>> {
        match &mut self.state {
            State::SkipLines(remaining) => {
                *remaining -= 1;
                if *remaining == 0 {
                    self.state = State::Header;
                }
                return None;
            }
            State::SkipToDelimiter => {
                if line.is_delimiter() {
                    self.state = State::Header;
                }
                return None;
            }
            _ => {}
        }

        // Checked before dispatch: a note marker interrupts any state.
        if line.text.contains(NOTE_MARKER) {
            if self.has_pending_record() {
                debug!(line = line.number, "note marker interrupted a partial record");
            }
            self.notes_skipped += 1;
            self.state = match self.note_skip {
                NoteSkip::FixedLines => State::SkipLines(NOTE_BLOCK_LINES),
                NoteSkip::UntilDelimiter => State::SkipToDelimiter,
            };
            return None;
        }

        match mem::replace(&mut self.state, State::Header) {
            State::Header => {
                if line.text.trim().is_empty() {
                    return None;
                }
                match parse_heading(line.text) {
                    Some(heading) => self.state = State::LocationLine(heading),
                    None => {
                        return Some(Err(self.malformed(line, |line, content| {
                            ParseError::MalformedHeading { line, content }
                        })));
                    }
                }
            }
            State::LocationLine(heading) => match parse_location(line.text) {
                Some((kind, location)) => {
                    self.state = State::BlankSeparator(heading, kind, location);
                }
                None => {
                    return Some(Err(self.malformed(line, |line, content| {
                        ParseError::MalformedLocation { line, content }
                    })));
                }
            },
            State::BlankSeparator(heading, kind, location) => {
                self.state =
                    State::Body(PendingRecord { heading, kind, location, body: Vec::new() });
            }
            State::Body(mut pending) => {
                if line.is_delimiter() {
                    return Some(Ok(pending.finish()));
                }
                pending.body.push(line.text);
                self.state = State::Body(pending);
            }
            skipping @ (State::SkipLines(_) | State::SkipToDelimiter) => self.state = skipping,
        }

        None
    }

    /// Build the error for `line` and arrange to resume after the record's delimiter
    fn malformed(
        &mut self,
        line: RawLine<'a>,
        make: impl FnOnce(usize, String) -> ParseError,
    ) -> ParseError {
        // A stray delimiter already closes the broken record.
        if !line.is_delimiter() {
            self.state = State::SkipToDelimiter;
        }
        make(line.number, line.text.to_string())
    }
}

impl<'a> Iterator for ClippingParser<'a> {
    type Item = Result<ClippingRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, raw)) = self.lines.next() {
            if let Some(item) = self.step(RawLine::new(index, raw)) {
                return Some(item);
            }
        }

        if let State::SkipLines(remaining) = self.state {
            debug!(remaining, "input ended inside a note block");
        }
        None
    }
}
