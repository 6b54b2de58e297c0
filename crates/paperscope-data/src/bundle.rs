//! Script bundle source: a `papers.js` file that assigns the collection to
//! a global, as shipped alongside the static web page:
//!
//! ```js
//! window.papers = [ { "title": "...", ... }, ... ];
//! ```
//!
//! The array literal is taken from the first `[` after the first `=` up to
//! the last `]` and parsed as JSON, so the bundle must hold JSON-compatible
//! literals (quoted keys, no trailing commas).

use std::path::{Path, PathBuf};

use paperscope_core::Paper;

use crate::{parse_papers, read_file, DataError, PaperSource};

#[derive(Debug, Clone)]
pub struct ScriptBundleSource {
    path: PathBuf,
}

impl ScriptBundleSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PaperSource for ScriptBundleSource {
    fn describe(&self) -> String {
        format!("bundle:{}", self.path.display())
    }

    fn try_load(&self) -> Result<Vec<Paper>, DataError> {
        let text = read_file(&self.path)?;
        parse_papers(extract_array(&text)?)
    }
}

/// Slice the array literal out of a bundle.
pub fn extract_array(text: &str) -> Result<&str, DataError> {
    let eq = text.find('=').ok_or(DataError::NoBundleArray)?;
    let start = text[eq..]
        .find('[')
        .map(|i| eq + i)
        .ok_or(DataError::NoBundleArray)?;
    let end = text.rfind(']').ok_or(DataError::NoBundleArray)?;
    if end < start {
        return Err(DataError::NoBundleArray);
    }
    Ok(&text[start..=end])
}
