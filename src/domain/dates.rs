//! Filename date extraction.
//!
//! Archive filenames end in the issue date, in one of two layouts:
//!
//! ```text
//! No_Name_Newsletter_Vol_1_Issue_2_1986_12_30.pdf   -> year, month number, day
//! The_Tie_That_Binds_Vol_2_Issue_1_1987_July.pdf    -> year, month name
//! ```
//!
//! Interviews carry no issue date and are pinned to [`INTERVIEW_DATE`].
//! Tokens are read positionally from the end of the `_`-split stem, so
//! anything before the date is free-form.

use super::document::Document;
use super::error::{ArchiveError, Result};
use chrono::{Month, NaiveDate};

/// Fixed date assigned to interview recordings (1975-01-01).
pub const INTERVIEW_DATE: (i32, u32, u32) = (1975, 1, 1);

/// Token marking an interview recording.
const INTERVIEW_TOKEN: &str = "Interview";

/// Token marking a newsletter dated with a numeric day.
const NEWSLETTER_TOKEN: &str = "Newsletter";

/// Date layout selected for a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// Interview recording, fixed date.
    Interview,
    /// `..._<year>_<month>_<day>`, all numeric, month 1-indexed.
    NumericDay,
    /// `..._<year>_<MonthName>`, dated the 1st of the month.
    MonthName,
}

impl DateRule {
    /// Picks the layout for a set of stem tokens. Interview wins over
    /// newsletter, newsletter over the month-name default.
    #[must_use]
    pub fn classify(tokens: &[&str]) -> Self {
        if tokens.contains(&INTERVIEW_TOKEN) {
            Self::Interview
        } else if tokens.contains(&NEWSLETTER_TOKEN) {
            Self::NumericDay
        } else {
            Self::MonthName
        }
    }
}

/// Extracts the issue date of a document from its filename.
///
/// # Errors
///
/// Returns [`ArchiveError::DateParse`] when the trailing tokens are missing,
/// are not numbers where numbers are expected, name an unknown month, or
/// form an impossible calendar date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tie_archive::domain::{extract_date, Document};
///
/// let doc = Document::new("No_Name_Newsletter_Vol_1_Issue_2_1986_12_30.pdf");
/// assert_eq!(extract_date(&doc)?, NaiveDate::from_ymd_opt(1986, 12, 30).unwrap());
/// # Ok::<(), tie_archive::ArchiveError>(())
/// ```
pub fn extract_date(document: &Document) -> Result<NaiveDate> {
    let tokens: Vec<&str> = document.stem().split('_').collect();
    let rule = DateRule::classify(&tokens);

    tracing::trace!(filename = %document, rule = ?rule, "extracting date");

    match rule {
        DateRule::Interview => {
            let (year, month, day) = INTERVIEW_DATE;
            calendar_date(document, year, month, day)
        }
        DateRule::NumericDay => {
            let [year, month, day] = trailing::<3>(document, &tokens)?;
            calendar_date(
                document,
                parse_number(document, "year", year)?,
                parse_number(document, "month", month)?,
                parse_number(document, "day", day)?,
            )
        }
        DateRule::MonthName => {
            let [year, month] = trailing::<2>(document, &tokens)?;
            let month = month.parse::<Month>().map_err(|_| parse_error(
                document,
                format!("'{month}' is not a month name"),
            ))?;
            calendar_date(
                document,
                parse_number(document, "year", year)?,
                month.number_from_month(),
                1,
            )
        }
    }
}

/// Returns the last `N` tokens, oldest first.
fn trailing<'a, const N: usize>(document: &Document, tokens: &[&'a str]) -> Result<[&'a str; N]> {
    let start = tokens
        .len()
        .checked_sub(N)
        .ok_or_else(|| parse_error(document, format!("expected at least {N} tokens")))?;

    <[&str; N]>::try_from(&tokens[start..])
        .map_err(|_| parse_error(document, format!("expected at least {N} tokens")))
}

fn parse_number<T: std::str::FromStr>(document: &Document, field: &str, token: &str) -> Result<T> {
    token
        .parse::<T>()
        .map_err(|_| parse_error(document, format!("{field} '{token}' is not a number")))
}

fn calendar_date(document: &Document, year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        parse_error(document, format!("{year}-{month}-{day} is not a calendar date"))
    })
}

fn parse_error(document: &Document, reason: String) -> ArchiveError {
    ArchiveError::DateParse {
        filename: document.filename().to_string(),
        reason,
    }
}
