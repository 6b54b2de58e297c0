//! paperscope-data: paper data source adapters for paperscope.
//!
//! Each source produces the full, ordered paper collection once at startup.
//! Loading never fails from the caller's point of view: a missing file,
//! unreadable bytes or malformed JSON degrade to an empty collection and a
//! `tracing::warn!`, so the explorer starts in its zero-result state.

pub mod bundle;
pub mod json;

use std::path::{Path, PathBuf};

use paperscope_core::Paper;

pub use bundle::ScriptBundleSource;
pub use json::JsonFileSource;

/// Why a source could not produce papers. Only surfaced through
/// [`PaperSource::try_load`]; [`PaperSource::load`] absorbs it.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level value is not an array of papers")]
    NotAnArray,

    #[error("no `window.papers = [...]` array found in bundle")]
    NoBundleArray,
}

/// Trait implemented by each paper data source.
pub trait PaperSource {
    /// Short description for log lines.
    fn describe(&self) -> String;

    /// Load the collection, reporting why it could not be read.
    fn try_load(&self) -> Result<Vec<Paper>, DataError>;

    /// Load the collection, falling back to empty on any error.
    fn load(&self) -> Vec<Paper> {
        match self.try_load() {
            Ok(papers) => {
                tracing::debug!(source = %self.describe(), papers = papers.len(), "papers loaded");
                papers
            }
            Err(err) => {
                tracing::warn!(source = %self.describe(), error = %err, "paper data unavailable, using empty collection");
                Vec::new()
            }
        }
    }
}

/// An already-loaded collection.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    papers: Vec<Paper>,
}

impl MemorySource {
    pub fn new(papers: Vec<Paper>) -> Self {
        Self { papers }
    }
}

impl PaperSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn try_load(&self) -> Result<Vec<Paper>, DataError> {
        Ok(self.papers.clone())
    }
}

/// Pick a source by extension (`.js` ⇒ bundle, anything else ⇒ JSON) and load it.
pub fn load_path(path: &Path) -> Vec<Paper> {
    source_for(path).load()
}

/// The source that [`load_path`] would use for `path`.
pub fn source_for(path: &Path) -> Box<dyn PaperSource> {
    let is_bundle = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("js"));
    if is_bundle {
        Box::new(ScriptBundleSource::new(path))
    } else {
        Box::new(JsonFileSource::new(path))
    }
}

/// Parse a JSON array of papers.
///
/// Elements that are not objects, or that cannot be read as a paper, are
/// skipped with a warning; their neighbours still load.
pub fn parse_papers(text: &str) -> Result<Vec<Paper>, DataError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(items) = value else {
        return Err(DataError::NotAnArray);
    };

    let papers = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            if !item.is_object() {
                tracing::warn!(index = i, "skipping non-object paper entry");
                return None;
            }
            match serde_json::from_value::<Paper>(item) {
                Ok(paper) => Some(paper),
                Err(err) => {
                    tracing::warn!(index = i, error = %err, "skipping unreadable paper entry");
                    None
                }
            }
        })
        .collect();
    Ok(papers)
}

pub(crate) fn read_file(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
