//! Markdown text normalization.
//!
//! Canonicalizes line endings, strips trailing whitespace from every line,
//! collapses runs of blank lines, and enforces a single trailing newline.

use regex::Regex;
use std::sync::LazyLock;

/// Three or more consecutive newlines (two or more blank lines).
static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalizer for Markdown manuscripts.
///
/// The output satisfies:
/// - no `\r` characters
/// - no run of three or more `\n`
/// - no trailing whitespace on any line (leading whitespace is kept)
/// - exactly one trailing `\n`, unless the document has no content at all,
///   in which case the result is empty
///
/// Normalizing already-normalized text returns it unchanged.
#[derive(Debug, Clone, Default)]
pub struct MarkdownNormalizer;

impl MarkdownNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize a whole document.
    pub fn normalize(&self, text: &str) -> String {
        // Normalize line endings to \n first
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");

        // Strip before collapsing so whitespace-only lines count as blank
        let stripped = unified
            .split('\n')
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n");

        let collapsed = BLANK_RUN_REGEX.replace_all(&stripped, "\n\n");

        let body = collapsed.trim_end_matches('\n');
        if body.is_empty() {
            return String::new();
        }

        format!("{}\n", body)
    }
}

/// Normalize a document with the default normalizer.
pub fn normalize_markdown(text: &str) -> String {
    MarkdownNormalizer::new().normalize(text)
}
