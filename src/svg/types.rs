//! SVG-specific types: glyph styling and export output.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// How every glyph of a layout is drawn
#[derive(Debug, Clone, Copy)]
pub struct GlyphStyle<'a> {
    /// Font family name as listed in the catalog. `None` renders with the
    /// generic fallback family.
    pub font_family: Option<&'a str>,
    /// Base font size in px (trailing punctuation is drawn smaller)
    pub font_size: f64,
    pub color: &'a Color,
}

/// A finished export, ready to be written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSvg {
    /// Suggested download file name
    pub file_name: String,
    pub width: f64,
    pub height: f64,
    pub svg: String,
}
