//! Domain layer for the archive plugin.
//!
//! Everything here is free of Zellij APIs and of UI state: the document
//! model, filename date extraction, the fixed manifest and its chronological
//! ordering, and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`document`]: Document model and path construction
//! - [`dates`]: Filename date extraction
//! - [`catalog`]: Manifest and date-ordered catalog
//!
//! # Examples
//!
//! ```
//! use tie_archive::domain::{sort_by_date, Document};
//!
//! let docs = vec![
//!     Document::new("The_Tie_That_Binds_Vol_2_Issue_1_1987_July.pdf"),
//!     Document::new("Walter_Harvey_Titus_Interview_1975.pdf"),
//! ];
//! let sorted = sort_by_date(&docs)?;
//! assert_eq!(sorted[0], docs[1]);
//! # Ok::<(), tie_archive::ArchiveError>(())
//! ```

pub mod catalog;
pub mod dates;
pub mod document;
pub mod error;

pub use catalog::{sort_by_date, Catalog, CatalogEntry, MANIFEST};
pub use dates::{extract_date, DateRule};
pub use document::{Document, DocumentLocator};
pub use error::{ArchiveError, Result};
