//! Glyph metrics and fixed export constants.

use crate::types::{Bounds, GlyphPlacement};

/// Generic family used when no font is selected
pub const FALLBACK_FONT_FAMILY: &str = "sans-serif";

/// Rotation applied to bracket and dash glyphs, in degrees clockwise
pub const SYMBOL_ROTATION: f64 = 90.0;

/// Space added around the content bounding box of an export (split evenly
/// between both sides)
pub const EXPORT_PADDING: f64 = 40.0;

/// Canvas used for an export when no bounding box can be computed
pub struct FallbackCanvas;

impl FallbackCanvas {
    pub const WIDTH: f64 = 400.0;
    pub const HEIGHT: f64 = 400.0;
}

/// Rendered size of a placement at the given base font size
pub fn glyph_font_size(placement: &GlyphPlacement, font_size: f64) -> f64 {
    font_size * placement.class.font_scale()
}

/// Estimated ink box of a placed glyph.
///
/// CJK glyphs sit in an em square, so each glyph is approximated by a square
/// of its rendered size centered on its placement point. Rotating a square
/// about its own center leaves it unchanged, so rotated symbols need no
/// special case.
pub fn estimate_glyph_bounds(placement: &GlyphPlacement, font_size: f64) -> Bounds {
    let half = glyph_font_size(placement, font_size) / 2.0;
    Bounds {
        min_x: placement.x - half,
        min_y: placement.y - half,
        max_x: placement.x + half,
        max_y: placement.y + half,
    }
}

/// Union of the estimated boxes of all placements, `None` if there are none
pub fn estimate_content_bounds(placements: &[GlyphPlacement], font_size: f64) -> Option<Bounds> {
    placements
        .iter()
        .map(|p| estimate_glyph_bounds(p, font_size))
        .reduce(|acc, b| acc.union(&b))
}
