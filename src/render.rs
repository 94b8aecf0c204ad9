// -- submodules
mod style;

use style::stylesheet;

// -- external imports
use maud::{DOCTYPE, Markup, PreEscaped, html};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};

use crate::catalog::CatalogEntry;

/// Characters that cannot appear raw in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

// -- enums

/// Shape of the image box in each tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TileAspect {
    /// 1 / 1
    #[default]
    Square,

    /// 16 / 9
    Widescreen,
}

impl TileAspect {
    pub const fn css_ratio(self) -> &'static str {
        match self {
            TileAspect::Square => "1 / 1",
            TileAspect::Widescreen => "16 / 9",
        }
    }
}

/// Custom deserializer with helpful error message
pub fn deserialize_tile_aspect<'de, D>(deserializer: D) -> Result<TileAspect, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    TileAspect::from_str(&value).map_err(|_| {
        serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&value),
            &format!("one of {}", TileAspect::VARIANTS.join(", ")).as_str(),
        )
    })
}

// -- structs

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfigs {
    /// Document `<title>`
    pub title: String,

    /// Page heading
    pub heading: String,

    /// Line under the heading, omitted when empty
    pub subtitle: Option<String>,

    /// Text after the entry count in the footer
    pub footer_label: String,

    /// Tile image box shape
    #[serde(deserialize_with = "deserialize_tile_aspect")]
    pub tile_aspect: TileAspect,

    /// Leading family of the CSS font stack
    pub font_family: Option<String>,

    /// Web font stylesheet URL (Google Fonts)
    pub font_stylesheet: Option<String>,

    /// Prefix for every image `src`
    pub image_base_url: Option<String>,
}

impl Default for PageConfigs {
    fn default() -> Self {
        Self {
            title: "Dome Colors - Siena College".to_string(),
            heading: "Dome Colors".to_string(),
            subtitle: Some("Available dome lighting themes for Siena College.".to_string()),
            footer_label: "dome color themes available.".to_string(),
            tile_aspect: TileAspect::Square,
            font_family: Some("Oswald".to_string()),
            font_stylesheet: Some(
                "https://fonts.googleapis.com/css2?family=Oswald&display=swap".to_string(),
            ),
            image_base_url: None,
        }
    }
}

// -- public API

/// Render a complete, self-contained gallery page.
///
/// Output depends only on `entries` and `page`, so identical inputs give identical bytes.
pub fn render_page(entries: &[CatalogEntry], page: &PageConfigs) -> String {
    let subtitle = page.subtitle.as_deref().filter(|s| !s.trim().is_empty());
    let font_stylesheet = page
        .font_stylesheet
        .as_deref()
        .filter(|s| !s.trim().is_empty());
    let css = stylesheet(page.font_family.as_deref(), page.tile_aspect);
    let base_url = page.image_base_url.as_deref().unwrap_or_default();

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) }
                @if let Some(href) = font_stylesheet {
                    link rel="preconnect" href="https://fonts.googleapis.com";
                    link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                    link href=(href) rel="stylesheet";
                }
                style { (PreEscaped(css)) }
            }
            body {
                header {
                    h1 { (page.heading) }
                    @if let Some(sub) = subtitle {
                        p.sub { (sub) }
                    }
                }
                section.grid {
                    @for entry in entries {
                        (tile(entry, base_url))
                    }
                }
                footer {
                    span style="opacity:0.6;" { (entries.len()) " " (page.footer_label) }
                }
            }
        }
    };

    markup.into_string()
}

fn tile(entry: &CatalogEntry, base_url: &str) -> Markup {
    let src = image_src(base_url, &entry.file_name());
    let (width, height) = match entry.dimensions() {
        Some((w, h)) => (Some(w), Some(h)),
        None => (None, None),
    };

    html! {
        div.tile {
            div.imgwrap {
                img src=(src) alt=(entry.display_title()) loading="lazy" decoding="async"
                    width=[width] height=[height];
            }
            div.meta {
                div.title { (entry.display_title()) }
            }
        }
    }
}

/// `base_url` is used as given; only the file name is percent-encoded.
fn image_src(base_url: &str, file_name: &str) -> String {
    let file_name = utf8_percent_encode(file_name, PATH_SEGMENT);
    if base_url.is_empty() || base_url.ends_with('/') {
        format!("{base_url}{file_name}")
    } else {
        format!("{base_url}/{file_name}")
    }
}

// -- tests
