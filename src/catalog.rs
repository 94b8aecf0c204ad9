// -- submodules
mod dedup;
mod listing;
mod matcher;
mod title;

pub use dedup::{Deduplicator, Selected};
pub use listing::{DirListing, ListingProvider, StaticListing};
pub use matcher::{FilenameMatch, FilenameMatcher};
pub use title::friendly_title;

// -- external imports
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::format::{FormatPreference, ImageFormat};

// -- structs

/// One tile of the gallery: a logical image and the file chosen to show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    base_name: String,
    chosen_file: PathBuf,
    display_title: String,
    format: ImageFormat,
    dimensions: Option<(u32, u32)>,
}

impl CatalogEntry {
    pub fn new(base_name: String, chosen_file: PathBuf, format: ImageFormat) -> Self {
        let display_title = friendly_title(&base_name);
        Self {
            base_name,
            chosen_file,
            display_title,
            format,
            dimensions: None,
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn chosen_file(&self) -> &Path {
        &self.chosen_file
    }

    pub fn display_title(&self) -> &str {
        &self.display_title
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Pixel `(width, height)` if the file was probed
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    pub fn file_name(&self) -> String {
        self.chosen_file
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }

    pub fn with_dimensions(self, dimensions: (u32, u32)) -> Self {
        Self {
            dimensions: Some(dimensions),
            ..self
        }
    }
}

impl From<Selected> for CatalogEntry {
    fn from(selected: Selected) -> Self {
        Self::new(selected.base_name, selected.path, selected.format)
    }
}

// -- public API

/// Turn a directory listing into ordered, deduplicated catalog entries.
///
/// Pure over its inputs: paths whose file name is not valid UTF-8 or does not follow
/// the naming convention are skipped.
pub fn build_catalog<I>(
    paths: I,
    matcher: &FilenameMatcher,
    preference: &FormatPreference,
) -> Vec<CatalogEntry>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut dedup = Deduplicator::new(preference);

    for path in paths {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::debug!("Skipping non UTF-8 file name: {:?}", path);
            continue;
        };
        match matcher.matches(file_name) {
            Some(matched) => {
                dedup.offer(matched, path);
            }
            None => tracing::debug!("Ignoring {}", file_name),
        }
    }

    dedup.into_sorted().into_iter().map(Into::into).collect()
}

/// Same as [`build_catalog`], reading paths from a listing provider.
pub fn collect_catalog(
    provider: &dyn ListingProvider,
    matcher: &FilenameMatcher,
    preference: &FormatPreference,
) -> Result<Vec<CatalogEntry>> {
    let paths = provider.list()?;
    Ok(build_catalog(paths, matcher, preference))
}

// -- tests

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(names: &[&str]) -> Vec<CatalogEntry> {
        let pref = FormatPreference::default();
        let matcher = FilenameMatcher::new("DOMEHUE_", &pref).unwrap();
        let listing: StaticListing = names.iter().copied().collect();
        collect_catalog(&listing, &matcher, &pref).unwrap()
    }

    #[test]
    fn test_catalog_from_stub_listing() {
        let entries = catalog_of(&[
            "DOMEHUE_SienaGreen.png",
            "notes.txt",
            "DOMEHUE_Red.png",
            "DOMEHUE_Red.webp",
            "DOMEHUE_Gold_Rush.JPG",
        ]);

        let files: Vec<String> = entries.iter().map(CatalogEntry::file_name).collect();
        assert_eq!(
            files,
            vec![
                "DOMEHUE_Gold_Rush.JPG",
                "DOMEHUE_Red.webp",
                "DOMEHUE_SienaGreen.png"
            ]
        );

        let titles: Vec<&str> = entries.iter().map(CatalogEntry::display_title).collect();
        assert_eq!(titles, vec!["Gold Rush", "Red", "Siena Green"]);
        assert_eq!(entries[1].format(), ImageFormat::Webp);
        assert_eq!(entries[1].base_name(), "Red");
    }

    #[test]
    fn test_catalog_order_independent_of_listing() {
        let names = [
            "DOMEHUE_Blue.jpeg",
            "DOMEHUE_Blue.jpg",
            "DOMEHUE_Amber.png",
            "DOMEHUE_Blue.png",
        ];
        let mut reversed = names;
        reversed.reverse();
        assert_eq!(catalog_of(&names), catalog_of(&reversed));
        assert_eq!(catalog_of(&names)[1].file_name(), "DOMEHUE_Blue.png");
    }

    #[test]
    fn test_empty_listing_yields_empty_catalog() {
        assert!(catalog_of(&[]).is_empty());
        assert!(catalog_of(&["a.png", "b.txt"]).is_empty());
    }

    #[test]
    fn test_with_dimensions_keeps_identity() {
        let entry = CatalogEntry::new(
            "Red".to_string(),
            PathBuf::from("DOMEHUE_Red.png"),
            ImageFormat::Png,
        );
        assert_eq!(entry.dimensions(), None);
        let entry = entry.with_dimensions((640, 480));
        assert_eq!(entry.dimensions(), Some((640, 480)));
        assert_eq!(entry.display_title(), "Red");
    }
}
