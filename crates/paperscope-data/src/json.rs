//! JSON file source: a file holding a single JSON array of papers.

use std::path::{Path, PathBuf};

use paperscope_core::Paper;

use crate::{parse_papers, read_file, DataError, PaperSource};

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PaperSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }

    fn try_load(&self) -> Result<Vec<Paper>, DataError> {
        parse_papers(&read_file(&self.path)?)
    }
}
