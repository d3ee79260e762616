//! SVG renderer - converts a LayoutResult into an SVG string.
//!
//! Pure string building, no DOM manipulation.

use super::styles::{glyph_font_size, SYMBOL_ROTATION};
use super::theme::{build_font_defs, svg_open_tag};
use super::types::GlyphStyle;
use crate::types::{GlyphPlacement, LayoutResult};

/// Render a layout as a preview SVG covering the whole layout canvas.
pub fn render_svg(layout: &LayoutResult, style: &GlyphStyle) -> String {
    let view_box = (0.0, 0.0, layout.canvas_width, layout.canvas_height);
    render_with_view_box(
        layout,
        style,
        layout.canvas_width,
        layout.canvas_height,
        view_box,
    )
}

/// Render a layout with explicit outer dimensions and view box.
pub(crate) fn render_with_view_box(
    layout: &LayoutResult,
    style: &GlyphStyle,
    width: f64,
    height: f64,
    view_box: (f64, f64, f64, f64),
) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(svg_open_tag(width, height, view_box, style.font_family));

    let defs = build_font_defs(style.font_family);
    if !defs.is_empty() {
        parts.push(defs);
    }

    parts.push("<g>".to_string());
    for placement in &layout.placements {
        parts.push(render_glyph(placement, style));
    }
    parts.push("</g>".to_string());

    parts.push("</svg>".to_string());

    parts.join("\n")
}

// ============================================================================
// Glyph rendering
// ============================================================================

fn render_glyph(placement: &GlyphPlacement, style: &GlyphStyle) -> String {
    let x = fmt_num(placement.x);
    let y = fmt_num(placement.y);

    let transform = if placement.class.is_rotated() {
        format!(
            r#" transform="rotate({}, {}, {})""#,
            fmt_num(SYMBOL_ROTATION),
            x,
            y
        )
    } else {
        String::new()
    };

    format!(
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="middle"{}>{}</text>"#,
        x,
        y,
        fmt_num(glyph_font_size(placement, style.font_size)),
        escape_xml(style.color.as_str()),
        transform,
        escape_xml(&placement.character)
    )
}

// ============================================================================
// Utilities
// ============================================================================

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a number for an SVG attribute.
///
/// Whole numbers print without a fractional part; negative zero prints as 0.
pub(crate) fn fmt_num(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}
