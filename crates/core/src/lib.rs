//! Markdown normalization and structural extraction for slide generation.
//!
//! A manuscript is normalized, then scanned into a [`DocumentStructure`]:
//! a title, `##` sections, and `###` slide hints carrying bullets and raw text.

pub mod artifacts;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod normalize;
pub mod types;

pub use artifacts::{read_structure, write_artifacts, ArtifactPaths};
pub use error::{Error, Result};
pub use extract::{extract_structure, LineKind, StructureExtractor};
pub use ingest::{Ingested, MarkdownIngestor};
pub use normalize::{normalize_markdown, MarkdownNormalizer};
pub use types::{DocumentStructure, Section, SlideHint};
