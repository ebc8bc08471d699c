//! Catalog file loading: format detection, file discovery, deserialization.
//!
//! Catalog content ships as a single document in RON, JSON, or TOML. The
//! loader detects the format from the extension, guards against the same
//! base name existing in two formats, deserializes into [`CatalogDocument`],
//! and indexes the result into a [`CatalogSet`].

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::index::{CatalogSet, DuplicateKey};
use crate::schema::CatalogDocument;

/// Base name of the catalog document, without extension.
pub const CATALOG_BASE_NAME: &str = "catalog";

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// No catalog document was found in the given directory.
    #[error("no '{base}.{{ron,toml,json}}' found in {dir}")]
    MissingCatalog { base: &'static str, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A section contained the same key twice.
    #[error(transparent)]
    Duplicate(#[from] DuplicateKey),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, CatalogLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(CatalogLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a data file with the given base name (without
/// extension).
///
/// Looks for `{base_name}.ron`, `{base_name}.toml`, and `{base_name}.json`.
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// multiple formats exist for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, CatalogLoadError> {
    let extensions = ["ron", "toml", "json"];
    let mut found: Option<PathBuf> = None;

    for ext in &extensions {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(ref existing) = found {
                return Err(CatalogLoadError::ConflictingFormats {
                    a: existing.clone(),
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Read a file and deserialize it according to its format (detected from
/// the extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| CatalogLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Json => serde_json::from_str(&content).map_err(|e| CatalogLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Toml => toml::from_str(&content).map_err(|e| CatalogLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
    }
}

// ===========================================================================
// Loading
// ===========================================================================

/// Load and index the catalog document at the given path.
pub fn load_catalogs_file(path: &Path) -> Result<CatalogSet, CatalogLoadError> {
    let doc: CatalogDocument = deserialize_file(path)?;
    Ok(CatalogSet::from_document(doc)?)
}

/// Discover and load `catalog.{ron,toml,json}` from a directory.
pub fn load_catalogs_dir(dir: &Path) -> Result<CatalogSet, CatalogLoadError> {
    let path =
        find_data_file(dir, CATALOG_BASE_NAME)?.ok_or(CatalogLoadError::MissingCatalog {
            base: CATALOG_BASE_NAME,
            dir: dir.to_path_buf(),
        })?;
    load_catalogs_file(&path)
}

/// Load and index a catalog document from a JSON string. Used by hosts that
/// embed their content rather than ship data files.
pub fn load_catalogs_json(json: &str) -> Result<CatalogSet, CatalogLoadError> {
    let doc: CatalogDocument =
        serde_json::from_str(json).map_err(|e| CatalogLoadError::Parse {
            file: PathBuf::from("<inline json>"),
            detail: e.to_string(),
        })?;
    Ok(CatalogSet::from_document(doc)?)
}

// ===========================================================================
// Tests
// ===========================================================================
