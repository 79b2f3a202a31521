//! Archive document model.
//!
//! A [`Document`] is nothing more than a manifest filename. The same string is
//! used as the list key, as the source of its display name, and as the last
//! path segment when the file is handed to a viewer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// File extension carried by every archived document.
const PDF_EXTENSION: &str = ".pdf";

/// A document of the archive, identified by its filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document(String);

impl Document {
    /// Wraps a manifest filename.
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self(filename.into())
    }

    /// Returns the raw filename.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.0
    }

    /// Returns the filename without its extension.
    ///
    /// Only the last `.`-separated suffix is removed; a filename without a
    /// dot is returned unchanged.
    #[must_use]
    pub fn stem(&self) -> &str {
        self.0.rsplit_once('.').map_or(self.0.as_str(), |(stem, _)| stem)
    }

    /// Returns the human-readable title shown in lists and viewer bars.
    ///
    /// Underscores become spaces and the `.pdf` extension is dropped.
    ///
    /// ```
    /// use tie_archive::domain::Document;
    ///
    /// let doc = Document::new("The_Tie_That_Binds_Vol_2_Issue_1_1987_July.pdf");
    /// assert_eq!(doc.display_name(), "The Tie That Binds Vol 2 Issue 1 1987 July");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0.replace('_', " ").replacen(PDF_EXTENSION, "", 1)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Document {
    fn from(filename: &str) -> Self {
        Self::new(filename)
    }
}

/// Builds document locations from the configured base path and subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocator {
    base_path: PathBuf,
    subdirectory: String,
}

impl DocumentLocator {
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>, subdirectory: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            subdirectory: subdirectory.into(),
        }
    }

    /// Returns `base_path/subdirectory/filename` for a document.
    ///
    /// An empty subdirectory is skipped.
    #[must_use]
    pub fn locate(&self, document: &Document) -> PathBuf {
        let mut path = self.base_path.clone();
        if !self.subdirectory.is_empty() {
            path.push(&self.subdirectory);
        }
        path.push(document.filename());
        path
    }
}

impl Default for DocumentLocator {
    fn default() -> Self {
        Self::new(".", "articles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_only_the_extension() {
        let doc = Document::new("No_Name_Newsletter_Vol_1_Issue_2_1986_12_30.pdf");
        assert_eq!(doc.stem(), "No_Name_Newsletter_Vol_1_Issue_2_1986_12_30");
        assert_eq!(Document::new("plain").stem(), "plain");
    }

    #[test]
    fn display_name_matches_list_format() {
        let doc = Document::new("Walter_Harvey_Titus_Interview_1975.pdf");
        assert_eq!(doc.display_name(), "Walter Harvey Titus Interview 1975");
    }

    #[test]
    fn locator_joins_base_subdirectory_and_filename() {
        let locator = DocumentLocator::new("/srv/archive", "articles");
        let doc = Document::new("a.pdf");
        assert_eq!(locator.locate(&doc), PathBuf::from("/srv/archive/articles/a.pdf"));

        let flat = DocumentLocator::new("docs", "");
        assert_eq!(flat.locate(&doc), PathBuf::from("docs/a.pdf"));
    }
}
