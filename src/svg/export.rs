//! Export - an SVG trimmed to its content, plus a download file name.

use super::renderer::{fmt_num, render_with_view_box};
use super::styles::{estimate_content_bounds, FallbackCanvas, EXPORT_PADDING};
use super::types::{ExportedSvg, GlyphStyle};
use crate::error::{Result, TateError};
use crate::types::LayoutResult;

/// Export a layout as a standalone SVG sized to its content.
///
/// `text` is the user's original input and is only used for the file name.
/// A font family is required since the export embeds its stylesheet.
pub fn export_svg(layout: &LayoutResult, style: &GlyphStyle, text: &str) -> Result<ExportedSvg> {
    if text.is_empty() {
        return Err(TateError::EmptyText);
    }
    let family = match style.font_family {
        Some(f) if !f.trim().is_empty() => f,
        _ => return Err(TateError::MissingFontFamily),
    };

    let (width, height, view_box) = match estimate_content_bounds(&layout.placements, style.font_size)
    {
        Some(b) if b.width() > 0.0 && b.height() > 0.0 => {
            let w = b.width() + EXPORT_PADDING;
            let h = b.height() + EXPORT_PADDING;
            let half = EXPORT_PADDING / 2.0;
            (w, h, (b.min_x - half, b.min_y - half, w, h))
        }
        _ => {
            log::warn!("no content bounds to trim to, exporting the fixed canvas");
            (
                FallbackCanvas::WIDTH,
                FallbackCanvas::HEIGHT,
                (0.0, 0.0, FallbackCanvas::WIDTH, FallbackCanvas::HEIGHT),
            )
        }
    };

    let svg = render_with_view_box(layout, style, width, height, view_box);
    let file_name = export_file_name(style.font_size, family, text);

    log::debug!(
        "exported {} glyphs as {} ({}x{})",
        layout.placements.len(),
        file_name,
        fmt_num(width),
        fmt_num(height)
    );

    Ok(ExportedSvg {
        file_name,
        width,
        height,
        svg,
    })
}

/// `{size}px-{family}-{text}.svg`, with path separators made harmless
pub fn export_file_name(font_size: f64, font_family: &str, text: &str) -> String {
    let name = format!("{}px-{}-{}.svg", fmt_num(font_size), font_family, text);
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
