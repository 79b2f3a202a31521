//! Host command templates.
//!
//! The viewer and external opener are configured as whitespace-separated
//! command lines such as `pdftotext -layout {path} -`. Every `{path}` is
//! replaced by the document path; a template without one gets the path
//! appended as its last argument. No shell is involved, so arguments are
//! never re-split or expanded.

use crate::domain::error::{ArchiveError, Result};
use std::path::Path;
use std::str::FromStr;

/// Placeholder substituted with the document path.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// A parsed command line with a path placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    args: Vec<String>,
}

impl CommandTemplate {
    /// Splits a template on whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Config`] for a blank template.
    pub fn parse(template: &str) -> Result<Self> {
        let args: Vec<String> = template.split_whitespace().map(String::from).collect();
        if args.is_empty() {
            return Err(ArchiveError::Config("command template is empty".to_string()));
        }
        Ok(Self { args })
    }

    /// Splits a template known to be non-blank, such as a built-in default.
    #[must_use]
    pub fn builtin(template: &'static str) -> Self {
        Self {
            args: template.split_whitespace().map(String::from).collect(),
        }
    }

    /// The executable, e.g. `pdftotext`.
    #[must_use]
    pub fn program(&self) -> &str {
        self.args.first().map_or("", String::as_str)
    }

    /// Builds the argument vector for one document.
    ///
    /// ```
    /// use std::path::Path;
    /// use tie_archive::infrastructure::CommandTemplate;
    ///
    /// let viewer = CommandTemplate::parse("pdftotext -layout {path} -")?;
    /// assert_eq!(
    ///     viewer.render(Path::new("articles/a.pdf")),
    ///     vec!["pdftotext", "-layout", "articles/a.pdf", "-"]
    /// );
    /// # Ok::<(), tie_archive::ArchiveError>(())
    /// ```
    #[must_use]
    pub fn render(&self, path: &Path) -> Vec<String> {
        let path = path.to_string_lossy();
        let mut rendered: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(PATH_PLACEHOLDER, &path))
            .collect();

        if !self.args.iter().any(|arg| arg.contains(PATH_PLACEHOLDER)) {
            rendered.push(path.into_owned());
        }
        rendered
    }
}

impl FromStr for CommandTemplate {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_appended_when_no_placeholder() {
        let opener: CommandTemplate = "xdg-open".parse().unwrap();
        assert_eq!(opener.program(), "xdg-open");
        assert_eq!(opener.render(Path::new("a b.pdf")), vec!["xdg-open", "a b.pdf"]);
    }

    #[test]
    fn placeholder_inside_an_argument_is_replaced() {
        let viewer = CommandTemplate::parse("viewer --file={path} --page 1").unwrap();
        assert_eq!(
            viewer.render(Path::new("x.pdf")),
            vec!["viewer", "--file=x.pdf", "--page", "1"]
        );
    }

    #[test]
    fn blank_template_is_a_config_error() {
        assert!(matches!(CommandTemplate::parse("   "), Err(ArchiveError::Config(_))));
    }
}
