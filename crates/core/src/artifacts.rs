//! Persistence of ingestion artifacts.

use crate::error::Result;
use crate::ingest::Ingested;
use crate::types::DocumentStructure;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the normalized Markdown artifact.
pub const NORMALIZED_FILE: &str = "normalized.md";

/// File name of the structure record artifact.
pub const STRUCTURE_FILE: &str = "structure.json";

/// Paths of the artifacts written by [`write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Path of the written `normalized.md`.
    pub normalized: PathBuf,

    /// Path of the written `structure.json`.
    pub structure: PathBuf,
}

/// Write `normalized.md` and `structure.json` into `dir`, creating it if needed.
pub fn write_artifacts(dir: &Path, ingested: &Ingested) -> Result<ArtifactPaths> {
    fs::create_dir_all(dir)?;

    let normalized = dir.join(NORMALIZED_FILE);
    fs::write(&normalized, &ingested.normalized)?;

    let structure = dir.join(STRUCTURE_FILE);
    fs::write(&structure, ingested.structure.to_json_pretty()?)?;

    log::debug!(
        "Wrote {} and {}",
        normalized.display(),
        structure.display()
    );

    Ok(ArtifactPaths {
        normalized,
        structure,
    })
}

/// Load a structure record written by [`write_artifacts`].
pub fn read_structure(path: &Path) -> Result<DocumentStructure> {
    let json = fs::read_to_string(path)?;
    Ok(DocumentStructure::from_json(&json)?)
}
