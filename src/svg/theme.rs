//! Font stylesheet and SVG root element.

use super::renderer::{escape_xml, fmt_num};
use super::styles::FALLBACK_FONT_FAMILY;
use crate::catalog::stylesheet_url;

/// Build the `<defs>` block importing the web font stylesheet.
///
/// Returns an empty string when no family is selected.
pub fn build_font_defs(font_family: Option<&str>) -> String {
    match font_family {
        Some(family) if !family.trim().is_empty() => format!(
            "<defs>\n<style>@import url('{}');</style>\n</defs>",
            escape_xml(&stylesheet_url(family))
        ),
        _ => String::new(),
    }
}

/// CSS value for the `font-family` property, with the generic fallback
pub fn font_family_css(font_family: Option<&str>) -> String {
    match font_family {
        Some(family) if !family.trim().is_empty() => {
            format!("'{}', {}", family, FALLBACK_FONT_FAMILY)
        }
        _ => FALLBACK_FONT_FAMILY.to_string(),
    }
}

/// Build the SVG opening tag.
///
/// `view_box` is `(min_x, min_y, width, height)`; `width` and `height` are the
/// outer dimensions.
pub fn svg_open_tag(
    width: f64,
    height: f64,
    view_box: (f64, f64, f64, f64),
    font_family: Option<&str>,
) -> String {
    let (vx, vy, vw, vh) = view_box;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}" style="font-family:{}">"#,
        fmt_num(vx),
        fmt_num(vy),
        fmt_num(vw),
        fmt_num(vh),
        fmt_num(width),
        fmt_num(height),
        escape_xml(&font_family_css(font_family))
    )
}
