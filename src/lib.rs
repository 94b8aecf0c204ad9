mod builder;
mod catalog;
mod error;
mod format;
mod logging;
mod probe;
mod progress_bar;
mod render;
mod toml_utils;

pub use catalog::{
    CatalogEntry, Deduplicator, DirListing, FilenameMatch, FilenameMatcher, ListingProvider,
    Selected, StaticListing, build_catalog, collect_catalog, friendly_title,
};
pub use error::{AppError, Result};
pub use format::{FormatPreference, ImageFormat};
pub use logging::init_logger;
pub use probe::probe_dimensions;
pub use render::{PageConfigs, TileAspect, render_page};
pub use toml_utils::parse_toml;

// Core build function
pub use builder::{BuildArgs, BuildReport, run_build};
