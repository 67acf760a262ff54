//! Structural extraction from normalized Markdown.
//!
//! A single forward scan classifies each line as a section boundary (`## `),
//! a hint boundary (`### `) or content, and accumulates hint buffers that are
//! flushed into [`SlideHint`]s when the next boundary or the end of input is
//! reached.

use crate::types::{
    hint_id, section_id, DocumentStructure, Section, SlideHint, DEFAULT_DOC_TITLE,
    DEFAULT_HINT_TITLE,
};
use regex::Regex;
use std::sync::LazyLock;

const TITLE_MARKER: &str = "# ";
const SECTION_MARKER: &str = "## ";
const HINT_MARKER: &str = "### ";

/// A list marker (`-`, `*`, `+` or `1.`) followed by whitespace.
static BULLET_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*+]|\d+\.)\s+").unwrap());

/// Classification of a single normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `## heading`: starts a new section.
    SectionBoundary(&'a str),
    /// `### title`: starts a new slide hint within the current section.
    HintBoundary(&'a str),
    /// Anything else, including `# ` lines and blank lines.
    Content,
}

/// Classify a line. Section boundaries take priority over hint boundaries.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix(SECTION_MARKER) {
        LineKind::SectionBoundary(rest.trim())
    } else if let Some(rest) = line.strip_prefix(HINT_MARKER) {
        LineKind::HintBoundary(rest.trim())
    } else {
        LineKind::Content
    }
}

/// Return the text of the first `# ` heading, or the default title.
pub fn extract_title(text: &str) -> String {
    text.lines()
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_else(|| DEFAULT_DOC_TITLE.to_string())
}

/// If the trimmed line is a list item, return its text with the marker removed.
///
/// Only one marker is stripped: `- - x` yields `- x`.
pub fn parse_bullet(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    BULLET_MARKER_REGEX
        .find(trimmed)
        .map(|m| &trimmed[m.end()..])
}

/// Whether any line is an ATX heading (`#` run followed by a space).
fn has_headings(text: &str) -> bool {
    text.lines().any(|line| {
        let rest = line.trim_start_matches('#');
        rest.len() < line.len() && rest.starts_with(' ')
    })
}

/// Lines collected for one prospective slide hint.
#[derive(Debug, Default)]
struct HintBuffer<'a> {
    /// Title from the `###` line that opened the buffer, if any.
    heading: Option<&'a str>,
    /// Body lines, unmodified.
    lines: Vec<&'a str>,
}

impl<'a> HintBuffer<'a> {
    fn with_heading(title: &'a str) -> Self {
        Self {
            heading: Some(title),
            lines: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.heading.is_none() && self.lines.is_empty()
    }

    /// Turn the buffer into a hint numbered `number`, or `None` if it has no
    /// body text and no bullets.
    fn into_hint(self, number: usize) -> Option<SlideHint> {
        let mut bullets = Vec::new();
        let mut raw_lines = Vec::new();

        for line in self.lines.into_iter().filter(|l| !l.trim().is_empty()) {
            if let Some(bullet) = parse_bullet(line) {
                bullets.push(bullet.to_string());
            }
            raw_lines.push(line);
        }

        let raw_text = raw_lines.join("\n").trim().to_string();
        if raw_text.is_empty() && bullets.is_empty() {
            return None;
        }

        Some(SlideHint {
            id: hint_id(number),
            title: self.heading.unwrap_or(DEFAULT_HINT_TITLE).to_string(),
            bullets,
            raw_text,
        })
    }
}

/// Mutable state threaded through one scan. Each call to
/// [`StructureExtractor::extract`] owns a fresh instance.
#[derive(Debug, Default)]
struct ScanState<'a> {
    sections: Vec<Section>,
    current: Option<Section>,
    buffer: HintBuffer<'a>,
    section_count: usize,
    hint_count: usize,
}

impl<'a> ScanState<'a> {
    fn feed(&mut self, line: &'a str) {
        match classify_line(line) {
            LineKind::SectionBoundary(heading) => {
                self.flush_hint();
                self.close_section();
                self.section_count += 1;
                self.current = Some(Section::new(section_id(self.section_count), heading));
            }
            LineKind::HintBoundary(title) => {
                self.flush_hint();
                self.buffer = HintBuffer::with_heading(title);
            }
            LineKind::Content => {
                if self.current.is_some() {
                    self.buffer.lines.push(line);
                } else if !line.trim().is_empty() {
                    log::trace!("Dropping content before first section: {:?}", line);
                }
            }
        }
    }

    /// Convert the current buffer into a hint of the current section.
    /// The buffer is always cleared.
    fn flush_hint(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        if buffer.is_empty() {
            return;
        }

        let Some(section) = self.current.as_mut() else {
            return;
        };

        let heading = buffer.heading;
        match buffer.into_hint(self.hint_count + 1) {
            Some(hint) => {
                self.hint_count += 1;
                section.hints.push(hint);
            }
            None => {
                log::trace!(
                    "Discarding empty hint {:?} in section {}",
                    heading.unwrap_or(DEFAULT_HINT_TITLE),
                    section.id
                );
            }
        }
    }

    fn close_section(&mut self) {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush_hint();
        self.close_section();
        self.sections
    }
}

/// Extracts a [`DocumentStructure`] from normalized Markdown.
///
/// Extraction is total: any string yields a structure. A document without
/// `## ` headings has no sections, and content before the first section is
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct StructureExtractor;

impl StructureExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the document structure.
    pub fn extract(&self, text: &str) -> DocumentStructure {
        let mut doc = DocumentStructure::new(extract_title(text));

        let mut state = ScanState::default();
        for line in text.split('\n') {
            state.feed(line);
        }
        doc.sections = state.finish();

        if doc.sections.is_empty() && has_headings(text) {
            log::warn!("Document has headings but no '## ' sections");
        }

        log::debug!(
            "Extracted {} sections, {} slide hints from \"{}\"",
            doc.sections.len(),
            doc.hint_count(),
            doc.title
        );

        doc
    }
}

/// Extract the document structure with the default extractor.
pub fn extract_structure(text: &str) -> DocumentStructure {
    StructureExtractor::new().extract(text)
}
