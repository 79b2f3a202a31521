//! The archive manifest and its chronological ordering.
//!
//! [`MANIFEST`] is the fixed list of archived files, in the order they were
//! catalogued. [`sort_by_date`] and [`Catalog::from_manifest`] order it by
//! the date embedded in each filename.

use super::dates::extract_date;
use super::document::Document;
use super::error::Result;
use chrono::NaiveDate;

/// Every document of the archive, in cataloguing order.
pub const MANIFEST: &[&str] = &[
    "No_Name_Newsletter_Vol_1_Issue_2_1986_12_30.pdf",
    "The_Tie_That_Binds_Vol_2_Issue_1_1987_July.pdf",
    "The_Tie_That_Binds_Vol_2_Issue_1_1988_February.pdf",
    "The_Tie_That_Binds_Vol_2_Issue_2_1988_September.pdf",
    "The_Tie_That_Binds_Vol_3_Issue_1_1989_March.pdf",
    "The_Tie_That_Binds_Vol_3_Issue_2_1989_October.pdf",
    "The_Tie_That_Binds_Vol_4_Issue_1_1990_May.pdf",
    "The_Tie_That_Binds_Vol_4_Issue_2_1990_November.pdf",
    "The_Tie_That_Binds_Vol_5_Issue_1_1991_May.pdf",
    "The_Tie_That_Binds_Vol_5_Issue_2_1991_November.pdf",
    "The_Tie_That_Binds_Vol_6_Issue_1_1992_May.pdf",
    "The_Tie_That_Binds_Vol_6_Issue_2_1992_November.pdf",
    "The_Tie_That_Binds_Vol_8_Issue_1_1994_February.pdf",
    "The_Tie_That_Binds_Vol_8_Issue_2_1994_November.pdf",
    "The_Tie_That_Binds_Vol_9_Issue_1_1995_August.pdf",
    "The_Tie_That_Binds_Special_Edition_1996_February.pdf",
    "The_Tie_That_Binds_Vol_11_Issue_1_1996_June.pdf",
    "The_Tie_That_Binds_Vol_12_Issue_2_1996_December.pdf",
    "The_Tie_That_Binds_Special_Edition_2010_March.pdf",
    "Walter_Harvey_Titus_Interview_1975.pdf",
];

/// A document paired with its extracted date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub document: Document,
    pub date: NaiveDate,
}

/// Returns the documents in ascending date order.
///
/// The input slice is left untouched. Documents sharing a date keep their
/// relative input order.
///
/// # Errors
///
/// Fails with the first document whose date cannot be extracted.
pub fn sort_by_date(documents: &[Document]) -> Result<Vec<Document>> {
    Ok(sort_entries(documents)?
        .into_iter()
        .map(|entry| entry.document)
        .collect())
}

/// Dates every document once, then stable-sorts on the date.
fn sort_entries(documents: &[Document]) -> Result<Vec<CatalogEntry>> {
    let mut entries = documents
        .iter()
        .map(|document| {
            Ok(CatalogEntry {
                date: extract_date(document)?,
                document: document.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    entries.sort_by_key(|entry| entry.date);
    Ok(entries)
}

/// The sorted archive shown by the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds the catalog from a list of manifest filenames.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::DateParse`](super::ArchiveError::DateParse) if
    /// any filename is undatable. The manifest is rejected as a whole.
    pub fn from_manifest(filenames: &[&str]) -> Result<Self> {
        let documents: Vec<Document> = filenames.iter().copied().map(Document::from).collect();
        let entries = sort_entries(&documents)?;

        tracing::debug!(
            document_count = entries.len(),
            earliest = ?entries.first().map(|e| e.date),
            latest = ?entries.last().map(|e| e.date),
            "catalog sorted"
        );

        Ok(Self { entries })
    }

    /// Catalog of the built-in [`MANIFEST`].
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_manifest`].
    pub fn builtin() -> Result<Self> {
        Self::from_manifest(MANIFEST)
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// The earliest document, auto-selected on wide panes.
    #[must_use]
    pub fn earliest(&self) -> Option<&Document> {
        self.entries.first().map(|entry| &entry.document)
    }

    #[must_use]
    pub fn position(&self, document: &Document) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.document == document)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArchiveError;

    fn manifest_documents() -> Vec<Document> {
        MANIFEST.iter().copied().map(Document::from).collect()
    }

    #[test]
    fn every_manifest_entry_is_datable() {
        for document in manifest_documents() {
            assert!(extract_date(&document).is_ok(), "undatable: {document}");
        }
    }

    #[test]
    fn sort_is_a_non_decreasing_permutation() {
        let input = manifest_documents();
        let snapshot = input.clone();
        let sorted = sort_by_date(&input).unwrap();

        assert_eq!(input, snapshot);
        assert_eq!(sorted.len(), input.len());
        for document in &input {
            assert!(sorted.contains(document));
        }

        let dates: Vec<NaiveDate> = sorted.iter().map(|d| extract_date(d).unwrap()).collect();
        assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn interview_sorts_first_then_first_newsletter() {
        let sorted = sort_by_date(&manifest_documents()).unwrap();
        assert_eq!(sorted[0].filename(), "Walter_Harvey_Titus_Interview_1975.pdf");
        assert_eq!(sorted[1].filename(), "No_Name_Newsletter_Vol_1_Issue_2_1986_12_30.pdf");
        assert_eq!(
            sorted.last().map(Document::filename),
            Some("The_Tie_That_Binds_Special_Edition_2010_March.pdf")
        );
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let input: Vec<Document> = [
            "B_Issue_1990_May.pdf",
            "A_Issue_1989_May.pdf",
            "C_Issue_1990_May.pdf",
            "A_Issue_1990_May.pdf",
        ]
        .into_iter()
        .map(Document::from)
        .collect();

        let sorted = sort_by_date(&input).unwrap();
        let names: Vec<&str> = sorted.iter().map(Document::filename).collect();
        assert_eq!(
            names,
            vec![
                "A_Issue_1989_May.pdf",
                "B_Issue_1990_May.pdf",
                "C_Issue_1990_May.pdf",
                "A_Issue_1990_May.pdf",
            ]
        );
    }

    #[test]
    fn one_bad_filename_rejects_the_manifest() {
        let err = Catalog::from_manifest(&["Good_1990_May.pdf", "Bad_1990_Mayday.pdf"]).unwrap_err();
        assert!(matches!(err, ArchiveError::DateParse { ref filename, .. } if filename == "Bad_1990_Mayday.pdf"));
    }

    #[test]
    fn builtin_catalog_lookup() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), MANIFEST.len());
        let earliest = catalog.earliest().cloned().unwrap();
        assert_eq!(catalog.position(&earliest), Some(0));
        assert_eq!(
            catalog.get(0).map(|e| e.date),
            NaiveDate::from_ymd_opt(1975, 1, 1)
        );
    }
}
