use indicatif::{ProgressFinish, ProgressIterator};

use crate::catalog::CatalogEntry;
use crate::progress_bar::progress_bar_style;

/// Read pixel dimensions for every entry.
///
/// Files the `image` crate cannot read keep `dimensions() == None`; a warning is logged
/// and the entry is still listed.
pub fn probe_dimensions(entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let total = entries.len();
    tracing::info!("Probing dimensions of {} images...", total);

    entries
        .into_iter()
        .progress_with_style(progress_bar_style())
        .with_message("Probing images")
        .with_finish(ProgressFinish::AndClear)
        .map(|entry| {
            let path = entry.chosen_file();
            match image::image_dimensions(path) {
                Ok(dims) => {
                    tracing::debug!("{}: {}x{}", entry.file_name(), dims.0, dims.1);
                    entry.with_dimensions(dims)
                }
                Err(e) => {
                    tracing::warn!("Failed to read dimensions of {:?}: {}", path, e);
                    entry
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ImageFormat;
    use image::RgbImage;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_probe_reads_real_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("DOMEHUE_Red.png");
        RgbImage::new(6, 4).save(&path).unwrap();

        let entries = vec![CatalogEntry::new(
            "Red".to_string(),
            path,
            ImageFormat::Png,
        )];
        let probed = probe_dimensions(entries);

        assert_eq!(probed[0].dimensions(), Some((6, 4)));
    }

    #[test]
    fn test_probe_tolerates_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("DOMEHUE_Bad.png"), b"not an image").unwrap();

        let entries = vec![
            CatalogEntry::new(
                "Bad".to_string(),
                temp_dir.path().join("DOMEHUE_Bad.png"),
                ImageFormat::Png,
            ),
            CatalogEntry::new(
                "Gone".to_string(),
                temp_dir.path().join("DOMEHUE_Gone.png"),
                ImageFormat::Png,
            ),
        ];
        let probed = probe_dimensions(entries);

        assert_eq!(probed.len(), 2);
        assert!(probed.iter().all(|e| e.dimensions().is_none()));
    }
}
