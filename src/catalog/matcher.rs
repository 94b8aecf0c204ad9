use regex::Regex;

use crate::error::{AppError, Result};
use crate::format::{FormatPreference, ImageFormat};

use super::title::friendly_title;

/// A file name that follows the `PREFIX_<base>.<ext>` convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMatch {
    /// File name with prefix and extension removed, original case kept
    pub base_name: String,

    /// Extension, normalized
    pub format: ImageFormat,
}

#[derive(Debug, Clone)]
pub struct FilenameMatcher {
    prefix: String,
    pattern: Regex,
}

impl FilenameMatcher {
    /// Build a case-insensitive matcher for `prefix` followed by any of the preferred extensions.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for an empty prefix, or `AppError::Pattern` if the
    /// generated expression fails to compile.
    pub fn new(prefix: &str, preference: &FormatPreference) -> Result<Self> {
        if prefix.is_empty() {
            return Err(AppError::Config("filename prefix must not be empty".to_string()));
        }

        let extensions = preference
            .formats()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(
            r"(?i)^{}(.+)\.({})$",
            regex::escape(prefix),
            extensions
        ))?;

        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `None` for anything outside the naming convention, including base names
    /// that would leave an empty title (only underscores or whitespace).
    pub fn matches(&self, file_name: &str) -> Option<FilenameMatch> {
        let caps = self.pattern.captures(file_name)?;
        let format = ImageFormat::from_extension(&caps[2])?;
        if friendly_title(&caps[1]).is_empty() {
            return None;
        }
        Some(FilenameMatch {
            base_name: caps[1].to_string(),
            format,
        })
    }
}
