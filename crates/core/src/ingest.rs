//! Ingestion facade: normalize a manuscript and extract its structure.

use crate::error::{Error, Result};
use crate::extract::StructureExtractor;
use crate::normalize::MarkdownNormalizer;
use crate::types::DocumentStructure;
use std::path::Path;

/// Output of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingested {
    /// The canonicalized Markdown text.
    pub normalized: String,

    /// The structure extracted from `normalized`.
    pub structure: DocumentStructure,
}

/// Runs the normalizer and the structure extractor over one document.
///
/// Each call is independent: identifiers restart at `sec-001` / `h-001`.
#[derive(Debug, Clone, Default)]
pub struct MarkdownIngestor {
    normalizer: MarkdownNormalizer,
    extractor: StructureExtractor,
}

impl MarkdownIngestor {
    /// Create a new ingestor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a document held in memory. Never fails.
    pub fn process_str(&self, content: &str) -> Ingested {
        let normalized = self.normalizer.normalize(content);
        log::debug!(
            "Normalized {} bytes into {} bytes",
            content.len(),
            normalized.len()
        );

        let structure = self.extractor.extract(&normalized);

        Ingested {
            normalized,
            structure,
        }
    }

    /// Ingest raw bytes, which must be valid UTF-8.
    pub fn process_bytes(&self, bytes: &[u8]) -> Result<Ingested> {
        let content =
            std::str::from_utf8(bytes).map_err(|e| Error::InvalidEncoding(e.to_string()))?;
        Ok(self.process_str(content))
    }

    /// Read and ingest a Markdown file.
    pub fn process_file(&self, path: &Path) -> Result<Ingested> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        log::debug!("Reading {}", path.display());
        let bytes = std::fs::read(path)?;
        self.process_bytes(&bytes)
    }
}
