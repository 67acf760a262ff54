//! Domain types for the document structure record.
//!
//! Field names on the wire (`doc_title`, `section_id`, `slides_hint`,
//! `hint_id`) are read by downstream stages and must not change.

use serde::{Deserialize, Serialize};

/// Version string written into every structure record.
pub const STRUCTURE_VERSION: &str = "1.0";

/// Title used when the document has no level-1 heading.
pub const DEFAULT_DOC_TITLE: &str = "Untitled Document";

/// Title used for a hint that has no `###` heading of its own.
pub const DEFAULT_HINT_TITLE: &str = "Untitled";

/// Format a sequential identifier such as `sec-001` or `h-042`.
///
/// The number is zero-padded to three digits. From 1000 on the field widens
/// (`h-1000`), so sorting ids as strings only matches numeric order up to 999.
pub fn format_id(prefix: &str, n: usize) -> String {
    format!("{}-{:03}", prefix, n)
}

/// Identifier of the `n`th section (1-based).
pub fn section_id(n: usize) -> String {
    format_id("sec", n)
}

/// Identifier of the `n`th slide hint (1-based, document-wide).
pub fn hint_id(n: usize) -> String {
    format_id("h", n)
}

fn default_version() -> String {
    STRUCTURE_VERSION.to_string()
}

/// The structural model of one ingested document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStructure {
    /// Record format version, always `"1.0"` when produced by this crate.
    #[serde(default = "default_version")]
    pub version: String,

    /// Text of the first level-1 heading, or [`DEFAULT_DOC_TITLE`].
    #[serde(rename = "doc_title")]
    pub title: String,

    /// Top-level sections in document order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl DocumentStructure {
    /// Create an empty structure with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            version: default_version(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// All slide hints across all sections, in document order.
    pub fn hints(&self) -> impl Iterator<Item = &SlideHint> {
        self.sections.iter().flat_map(|s| s.hints.iter())
    }

    /// Total number of slide hints in the document.
    pub fn hint_count(&self) -> usize {
        self.sections.iter().map(|s| s.hints.len()).sum()
    }

    /// Serialize as indented JSON. Non-ASCII text is written as-is.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize as single-line JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a structure record previously produced by [`Self::to_json_pretty`].
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for DocumentStructure {
    fn default() -> Self {
        Self::new(DEFAULT_DOC_TITLE)
    }
}

/// A top-level division of the document, opened by a `##` heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Sequential identifier, e.g. `sec-001`.
    #[serde(rename = "section_id")]
    pub id: String,

    /// Heading text with the marker removed.
    pub heading: String,

    /// Slide hints belonging to this section, in document order.
    #[serde(rename = "slides_hint", default)]
    pub hints: Vec<SlideHint>,
}

impl Section {
    /// Create a section with no hints.
    pub fn new(id: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            hints: Vec::new(),
        }
    }

    /// Whether the section carries no slide hints.
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

/// A candidate slide unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideHint {
    /// Sequential identifier, unique across the whole document, e.g. `h-007`.
    #[serde(rename = "hint_id")]
    pub id: String,

    /// The `###` heading text, or [`DEFAULT_HINT_TITLE`].
    pub title: String,

    /// List item text with markers stripped.
    #[serde(default)]
    pub bullets: Vec<String>,

    /// Body lines joined by `\n` and trimmed; list markers are kept here.
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DocumentStructure {
        let mut section = Section::new(section_id(1), "序章");
        section.hints.push(SlideHint {
            id: hint_id(1),
            title: "課題意識".to_string(),
            bullets: vec!["背景".to_string(), "現状".to_string()],
            raw_text: "- 背景\n- 現状".to_string(),
        });

        let mut doc = DocumentStructure::new("プレゼンテーション");
        doc.sections.push(section);
        doc.sections.push(Section::new(section_id(2), "まとめ"));
        doc
    }

    #[test]
    fn test_format_id_pads_to_three_digits() {
        assert_eq!(section_id(1), "sec-001");
        assert_eq!(hint_id(42), "h-042");
        assert_eq!(format_id("h", 999), "h-999");
    }

    #[test]
    fn test_format_id_widens_past_three_digits() {
        assert_eq!(hint_id(1000), "h-1000");
        assert_eq!(section_id(12345), "sec-12345");
    }

    #[test]
    fn test_default_structure() {
        let doc = DocumentStructure::default();
        assert_eq!(doc.version, "1.0");
        assert_eq!(doc.title, "Untitled Document");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], "1.0");
        assert_eq!(value["doc_title"], "プレゼンテーション");
        assert_eq!(value["sections"][0]["section_id"], "sec-001");
        assert_eq!(value["sections"][0]["heading"], "序章");
        assert_eq!(value["sections"][0]["slides_hint"][0]["hint_id"], "h-001");
        assert_eq!(value["sections"][0]["slides_hint"][0]["bullets"][1], "現状");
        assert_eq!(value["sections"][1]["slides_hint"], serde_json::json!([]));
        assert!(value.get("title").is_none());
    }

    #[test]
    fn test_json_keeps_non_ascii_unescaped() {
        let json = sample().to_json_pretty().unwrap();
        assert!(json.contains("\"doc_title\": \"プレゼンテーション\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_json_round_trip() {
        let doc = sample();
        let parsed = DocumentStructure::from_json(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_from_json_applies_defaults() {
        let doc = DocumentStructure::from_json(
            r#"{"doc_title": "T", "sections": [{"section_id": "sec-001", "heading": "S"}]}"#,
        )
        .unwrap();

        assert_eq!(doc.version, "1.0");
        assert!(doc.sections[0].is_empty());
    }

    #[test]
    fn test_hints_in_document_order() {
        let mut doc = sample();
        doc.sections[1].hints.push(SlideHint {
            id: hint_id(2),
            title: "結論".to_string(),
            bullets: Vec::new(),
            raw_text: "以上".to_string(),
        });

        let ids: Vec<&str> = doc.hints().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["h-001", "h-002"]);
        assert_eq!(doc.hint_count(), 2);
    }
}
