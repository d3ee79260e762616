//! SVG output for vertical layouts.
//!
//! - Preview: the whole layout canvas (render_svg)
//! - Export: trimmed to the content bounding box (export_svg)
//!
//! Pure string building, no DOM manipulation.

mod types;
mod renderer;
mod theme;
mod styles;
mod export;

pub use types::*;
pub use renderer::{escape_xml, render_svg};
pub use theme::{build_font_defs, font_family_css};
pub use styles::{
    estimate_content_bounds, estimate_glyph_bounds, glyph_font_size, EXPORT_PADDING,
    FALLBACK_FONT_FAMILY,
};
pub use export::{export_file_name, export_svg};
