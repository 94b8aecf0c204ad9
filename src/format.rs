// -- external imports
use serde::Deserialize;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, VariantNames};

use crate::error::{AppError, Result};

// -- enums

/// Image file formats the catalog knows how to list
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageFormat {
    Webp,
    Png,
    Jpg,
    Jpeg,
}

impl ImageFormat {
    /// Parse a bare extension (no leading dot), ignoring case
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::from_str(ext).ok()
    }
}

// -- structs

/// Ordered list of formats, most preferred first.
///
/// Formats missing from the list are not matched at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPreference {
    order: Vec<ImageFormat>,
}

impl FormatPreference {
    /// # Errors
    ///
    /// Returns `AppError::Config` if the list is empty or names a format twice.
    pub fn new(order: Vec<ImageFormat>) -> Result<Self> {
        if order.is_empty() {
            return Err(AppError::Config(
                "format preference list must not be empty".to_string(),
            ));
        }
        for (i, fmt) in order.iter().enumerate() {
            if order[..i].contains(fmt) {
                return Err(AppError::Config(format!(
                    "format '{fmt}' listed more than once"
                )));
            }
        }
        Ok(Self { order })
    }

    /// Position in the preference order, lower is better
    pub fn rank(&self, format: ImageFormat) -> Option<usize> {
        self.order.iter().position(|f| *f == format)
    }

    pub fn formats(&self) -> &[ImageFormat] {
        &self.order
    }
}

impl Default for FormatPreference {
    fn default() -> Self {
        Self {
            order: ImageFormat::iter().collect(),
        }
    }
}

/// Custom deserializer with helpful error message
pub fn deserialize_formats<'de, D>(deserializer: D) -> Result<FormatPreference, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;
    let mut order = Vec::with_capacity(values.len());
    for value in &values {
        let fmt = ImageFormat::from_extension(value.trim_start_matches('.')).ok_or_else(|| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(value),
                &format!("one of {}", ImageFormat::VARIANTS.join(", ")).as_str(),
            )
        })?;
        order.push(fmt);
    }
    FormatPreference::new(order).map_err(serde::de::Error::custom)
}

// -- tests
