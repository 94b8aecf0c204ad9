use std::path::{Path, PathBuf};

use crate::error::Result;

/// Source of candidate file paths for the catalog
pub trait ListingProvider {
    fn list(&self) -> Result<Vec<PathBuf>>;
}

/// Non-recursive listing of the regular files in one directory
#[derive(Debug, Clone)]
pub struct DirListing {
    dir: PathBuf,
}

impl DirListing {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ListingProvider for DirListing {
    fn list(&self) -> Result<Vec<PathBuf>> {
        let mut paths = vec![];
        for entry in std::fs::read_dir(&self.dir)? {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() {
                        paths.push(path);
                    }
                }
                Err(e) => tracing::warn!("Skipping unreadable entry in {:?}: {}", self.dir, e),
            }
        }
        Ok(paths)
    }
}

/// Fixed set of paths, no filesystem access
#[derive(Debug, Clone, Default)]
pub struct StaticListing(pub Vec<PathBuf>);

impl<P: Into<PathBuf>> FromIterator<P> for StaticListing {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl ListingProvider for StaticListing {
    fn list(&self) -> Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_listing_is_flat_and_files_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("DOMEHUE_Red.png"), b"x").unwrap();
        fs::create_dir(temp_dir.path().join("DOMEHUE_Nested.png")).unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("sub/DOMEHUE_Blue.png"), b"x").unwrap();

        let paths = DirListing::new(temp_dir.path()).list().unwrap();

        assert_eq!(paths, vec![temp_dir.path().join("DOMEHUE_Red.png")]);
    }

    #[test]
    fn test_dir_listing_missing_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let listing = DirListing::new(temp_dir.path().join("missing"));
        assert!(listing.list().is_err());
    }

    #[test]
    fn test_static_listing_returns_its_paths() {
        let listing: StaticListing = ["a.png", "b.webp"].into_iter().collect();
        assert_eq!(
            listing.list().unwrap(),
            vec![PathBuf::from("a.png"), PathBuf::from("b.webp")]
        );
    }
}
