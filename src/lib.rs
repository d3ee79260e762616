//! tate - Lay out Japanese text vertically (tategaki) and render it as SVG
//!
//! The core is a pure layout engine: each grapheme is classified (ordinary
//! glyph, trailing punctuation, small kana, rotated bracket) and placed in a
//! single centered column whose canvas grows with the text. The result can
//! be rendered as a preview SVG or exported trimmed to its content.
//!
//! # Example
//!
//! ```rust
//! use tate::{layout, render_to_svg, RenderOptions};
//!
//! let result = layout("「縦書き。」", 48.0);
//! assert_eq!(result.placements.len(), 6);
//!
//! let svg = render_to_svg("縦書き", &RenderOptions::default());
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Character classes
//!
//! - Trailing punctuation (、。，．・：；) hangs at the upper right of the
//!   previous glyph
//! - Small kana (ぁぃぅぇぉゃゅょっ, ァィゥェォャュョッ) hang at its lower right
//! - Opening brackets and dashes (「『＜〈≪《（［｛｜ー＝～) and closing
//!   brackets (」』＞〉≫》）］｝) are rotated 90° and take extra space

pub mod types;
pub mod error;
pub mod layout;
pub mod color;
pub mod catalog;
pub mod svg;

pub use types::*;
pub use error::{Result, TateError};
pub use layout::{classify, classify_char, layout};
pub use color::Color;
pub use catalog::{CatalogCache, CatalogConfig, FontCatalog, GoogleFont};
pub use svg::{ExportedSvg, GlyphStyle};

use serde::{Deserialize, Serialize};

/// Configuration for rendering and exporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Base font size in px. Default: 48
    pub font_size: f64,
    /// Glyph fill color. Default: #000000
    pub color: Color,
    /// Web font family. Default: none (generic sans-serif)
    pub font_family: Option<String>,
    /// Laid out instead of empty text. Default: プレビュー
    pub placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_size: 48.0,
            color: Color::default(),
            font_family: None,
            placeholder: "プレビュー".to_string(),
        }
    }
}

impl RenderOptions {
    /// Reject font sizes the layout engine has no meaningful answer for.
    pub fn validate(&self) -> Result<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(TateError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }

    pub fn glyph_style(&self) -> GlyphStyle<'_> {
        GlyphStyle {
            font_family: self.font_family.as_deref(),
            font_size: self.font_size,
            color: &self.color,
        }
    }

    /// `text`, or the placeholder when `text` is empty
    pub fn display_text<'a>(&'a self, text: &'a str) -> &'a str {
        if text.is_empty() {
            &self.placeholder
        } else {
            text
        }
    }
}

/// Lay out `text`, substituting the placeholder for empty input.
pub fn layout_text(text: &str, options: &RenderOptions) -> LayoutResult {
    layout(options.display_text(text), options.font_size)
}

/// Render `text` as a preview SVG covering the whole layout canvas.
///
/// # Example
/// ```rust
/// let svg = tate::render_to_svg("", &tate::RenderOptions::default());
/// assert!(svg.contains("プ"));
/// ```
pub fn render_to_svg(text: &str, options: &RenderOptions) -> String {
    let result = layout_text(text, options);
    log::debug!(
        "rendering {} glyphs on a {}x{} canvas",
        result.placements.len(),
        result.canvas_width,
        result.canvas_height
    );
    svg::render_svg(&result, &options.glyph_style())
}

/// Export `text` as an SVG trimmed to its content.
///
/// Unlike the preview, empty text is an error here, and a font family must
/// be set.
pub fn export_svg(text: &str, options: &RenderOptions) -> Result<ExportedSvg> {
    options.validate()?;
    let result = layout(text, options.font_size);
    svg::export_svg(&result, &options.glyph_style(), text)
}
