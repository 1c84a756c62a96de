//! Line-oriented document model
//!
//! Rules see a document as an ordered sequence of lines numbered from 1.
//! Line numbers are load-bearing: diagnostics and fixes are keyed by them.

use crate::diagnostics::Span;

/// A borrowed view of one document line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number
    pub number: usize,
    /// Line text without its terminator
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Create a line view
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// Line text with surrounding whitespace removed
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// A complete document held as lines
///
/// Each line keeps its own terminator and a leading byte order mark is kept
/// aside, so `to_text` reproduces the source byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<SourceLine>,
    /// Source started with U+FEFF
    bom: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceLine {
    text: String,
    ending: LineEnding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnding {
    /// Last line without a terminator
    Eof,
    Lf,
    CrLf,
}

impl LineEnding {
    fn as_str(self) -> &'static str {
        match self {
            LineEnding::Eof => "",
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

const BOM: char = '\u{FEFF}';

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into lines on `\n` or `\r\n`
    ///
    /// A leading byte order mark is not part of line 1.
    pub fn parse(text: &str) -> Self {
        let (bom, text) = match text.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let lines = text
            .split_inclusive('\n')
            .map(|raw| {
                if let Some(text) = raw.strip_suffix("\r\n") {
                    SourceLine::new(text, LineEnding::CrLf)
                } else if let Some(text) = raw.strip_suffix('\n') {
                    SourceLine::new(text, LineEnding::Lf)
                } else {
                    SourceLine::new(raw, LineEnding::Eof)
                }
            })
            .collect();

        Self { lines, bom }
    }

    /// Build a document from already split lines
    ///
    /// Lines are joined with `\n` and the last one has no terminator.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<SourceLine> = lines
            .into_iter()
            .map(|text| SourceLine::new(text, LineEnding::Lf))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.ending = LineEnding::Eof;
        }

        Self { lines, bom: false }
    }

    /// Iterate over numbered lines in order
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, line)| Line::new(index + 1, &line.text))
    }

    /// Get a line by its 1-based number
    pub fn line(&self, number: usize) -> Option<Line<'_>> {
        let index = number.checked_sub(1)?;
        self.lines
            .get(index)
            .map(|line| Line::new(number, &line.text))
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if the source started with a byte order mark
    pub fn has_bom(&self) -> bool {
        self.bom
    }

    /// Byte span of a line within `to_text()`, with the line number set
    pub fn line_span(&self, number: usize) -> Option<Span> {
        let index = number.checked_sub(1)?;
        let line = self.lines.get(index)?;
        let prefix = if self.bom { BOM.len_utf8() } else { 0 };
        let start = prefix
            + self.lines[..index]
                .iter()
                .map(|l| l.text.len() + l.ending.as_str().len())
                .sum::<usize>();

        Some(Span::new(start, start + line.text.len()).with_position(number, 1))
    }

    /// Keep only the lines for which `keep` returns true
    pub(crate) fn retain_lines(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let mut number = 0;
        self.lines.retain(|_| {
            number += 1;
            keep(number)
        });
    }

    /// Render the document back to text
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        if self.bom {
            text.push(BOM);
        }
        for line in &self.lines {
            text.push_str(&line.text);
            text.push_str(line.ending.as_str());
        }
        text
    }
}

impl SourceLine {
    fn new(text: impl Into<String>, ending: LineEnding) -> Self {
        Self {
            text: text.into(),
            ending,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}
