use super::TileAspect;

const FALLBACK_FONTS: &str = "system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif";

const STYLESHEET: &str = "
    body {
      margin: 0;
      font-family: @FONT_STACK@;
      background: #0b0b0b;
      color: #fff;
    }
    header {
      padding: 28px 20px 12px;
      max-width: 1200px;
      margin: 0 auto;
    }
    h1 {
      margin: 0 0 6px;
      font-size: 34px;
      letter-spacing: 0.3px;
    }
    .sub {
      margin: 0;
      opacity: 0.85;
      font-size: 18px;
    }
    .grid {
      max-width: 1200px;
      margin: 0 auto;
      padding: 14px 20px 40px;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 18px;
    }
    .tile {
      background: #111;
      border: 1px solid rgba(255,255,255,0.08);
      border-radius: 14px;
      overflow: hidden;
      box-shadow: 0 10px 24px rgba(0,0,0,0.35);
    }
    .imgwrap {
      width: 100%;
      aspect-ratio: @ASPECT_RATIO@;
      background: #000;
      display: flex;
      align-items: center;
      justify-content: center;
    }
    img {
      width: 100%;
      height: 100%;
      object-fit: cover;
      display: block;
    }
    .meta {
      padding: 12px 14px 14px;
    }
    .title {
      font-size: 20px;
      line-height: 1.1;
      margin-bottom: 4px;
    }
    footer {
      max-width: 1200px;
      margin: 0 auto;
      padding: 0 20px 30px;
      opacity: 0.7;
      font-size: 14px;
    }
  ";

/// Inline stylesheet for the gallery page
pub fn stylesheet(font_family: Option<&str>, aspect: TileAspect) -> String {
    let font_stack = match font_family {
        Some(family) if !family.trim().is_empty() => {
            format!("{}, {}", family.trim(), FALLBACK_FONTS)
        }
        _ => FALLBACK_FONTS.to_string(),
    };

    STYLESHEET
        .replace("@FONT_STACK@", &font_stack)
        .replace("@ASPECT_RATIO@", aspect.css_ratio())
}
