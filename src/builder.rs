use serde::Deserialize;
use std::path::PathBuf;
use std::time::Instant;

use crate::catalog::{CatalogEntry, DirListing, FilenameMatcher, collect_catalog};
use crate::error::Result;
use crate::format::{FormatPreference, deserialize_formats};
use crate::probe::probe_dimensions;
use crate::render::{PageConfigs, render_page};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildArgs {
    /// Directory scanned (non-recursively) for images
    pub images_dir: PathBuf,

    /// Generated HTML file, overwritten on every run
    pub output: PathBuf,

    /// File name prefix images must carry, matched case-insensitively
    pub prefix: String,

    /// Accepted formats, most preferred first
    #[serde(deserialize_with = "deserialize_formats")]
    pub formats: FormatPreference,

    /// Write a zero-tile page when nothing matches
    pub write_empty: bool,

    /// Read image dimensions for `width`/`height` attributes
    pub probe_dimensions: bool,

    /// Page configurations
    #[serde(skip)]
    pub page_cfg: PageConfigs,

    /// Show verbose output
    pub verbose: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("."),
            output: PathBuf::from("dome-colors.html"),
            prefix: "DOMEHUE_".to_string(),
            formats: Default::default(),
            write_empty: false,
            probe_dimensions: false,
            page_cfg: Default::default(),
            verbose: false,
        }
    }
}

/// Outcome of one build
#[derive(Debug)]
pub struct BuildReport {
    /// Entries in page order
    pub entries: Vec<CatalogEntry>,

    /// Written file, `None` when the catalog was empty and nothing was written
    pub output: Option<PathBuf>,

    prefix: String,
    label: String,
}

impl BuildReport {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Human-readable result line for stdout
    pub fn summary(&self) -> String {
        match &self.output {
            Some(path) => format!(
                "✓ Generated {} with {} {}",
                path.file_name().unwrap_or_default().to_string_lossy(),
                self.count(),
                self.label
            ),
            None => format!("No {} images found!", self.prefix.trim_end_matches('_')),
        }
    }
}

/// Core build API: scan, deduplicate, render and write the gallery page.
///
/// An empty catalog is not an error; the page is only written for it when
/// `args.write_empty` is set.
///
/// # Errors
///
/// Returns `AppError` if the images directory cannot be read, the prefix is unusable,
/// or the output file cannot be written.
pub fn run_build(args: &BuildArgs) -> Result<BuildReport> {
    let start_time = Instant::now();

    tracing::info!("Scanning {:?} for {}* images", args.images_dir, args.prefix);

    let matcher = FilenameMatcher::new(&args.prefix, &args.formats)?;
    let listing = DirListing::new(&args.images_dir);
    let mut entries = collect_catalog(&listing, &matcher, &args.formats)?;
    tracing::info!("Catalog entries: {}", entries.len());

    if args.verbose {
        for entry in &entries {
            tracing::debug!("{} -> {}", entry.file_name(), entry.display_title());
        }
    }

    if args.probe_dimensions && !entries.is_empty() {
        entries = probe_dimensions(entries);
    }

    let output = if entries.is_empty() && !args.write_empty {
        tracing::warn!("No matching images, skipping {:?}", args.output);
        None
    } else {
        let html = render_page(&entries, &args.page_cfg);
        std::fs::write(&args.output, html)?;
        tracing::info!("Wrote {:?}", args.output);
        Some(args.output.clone())
    };

    let duration = start_time.elapsed();
    tracing::info!("Total build time: {:.3?}", duration);

    Ok(BuildReport {
        entries,
        output,
        prefix: matcher.prefix().to_string(),
        label: summary_label(&args.page_cfg.footer_label),
    })
}

/// Footer label without the trailing "available." so it reads as a noun phrase
fn summary_label(footer_label: &str) -> String {
    let label = footer_label.trim().trim_end_matches('.');
    let label = label.strip_suffix(" available").unwrap_or(label);
    format!("{label}.")
}
