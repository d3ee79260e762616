//! Vertical layout engine.
//!
//! Two passes over the classified graphemes: the first sums the column
//! height to size the canvas and center the column, the second walks a
//! cursor down the column and emits one placement per grapheme.
//!
//! Punctuation and small kana hang off the most recent ordinary glyph and
//! never move the cursor.

mod classify;

pub use classify::{classify, classify_char};

use crate::types::{
    CharacterClass, GlyphPlacement, LayoutResult, Spacing, CANVAS_WIDTH, MIN_CANVAS_HEIGHT,
};
use unicode_segmentation::UnicodeSegmentation;

/// Lay out `text` as a single vertical column.
///
/// Total over its inputs: empty text gives an empty 400x400 canvas.
/// `font_size` is expected to be positive; other values are not rejected
/// here.
pub fn layout(text: &str, font_size: f64) -> LayoutResult {
    let classified: Vec<(&str, CharacterClass)> = text
        .graphemes(true)
        .map(|g| (g, classify(g)))
        .collect();

    let content_height: f64 = classified
        .iter()
        .map(|(_, class)| class.advance(font_size))
        .sum();

    let canvas_height = MIN_CANVAS_HEIGHT.max(content_height + font_size);
    let center_x = CANVAS_WIDTH / 2.0;
    let mut current_y = (canvas_height - content_height) / 2.0;

    let mut placements: Vec<GlyphPlacement> = Vec::with_capacity(classified.len());
    // Index of the nearest preceding ordinary placement
    let mut anchor: Option<usize> = None;

    for (grapheme, class) in classified {
        let (x, y) = match class {
            CharacterClass::Ordinary => (center_x, current_y),
            CharacterClass::RotatedSymbolAbove => {
                (center_x, current_y + font_size * Spacing::SYMBOL_EXTRA)
            }
            CharacterClass::RotatedSymbolBelow => (center_x, current_y),
            CharacterClass::TrailingPunctuation => attach(
                anchor.map(|i| &placements[i]),
                center_x,
                current_y,
                font_size,
                Spacing::PUNCTUATION_Y,
            ),
            CharacterClass::SmallKana => attach(
                anchor.map(|i| &placements[i]),
                center_x,
                current_y,
                font_size,
                Spacing::SMALL_KANA_Y,
            ),
        };

        if class == CharacterClass::Ordinary {
            anchor = Some(placements.len());
        }
        current_y += class.advance(font_size);

        placements.push(GlyphPlacement {
            character: grapheme.to_string(),
            class,
            x,
            y,
        });
    }

    log::trace!(
        "laid out {} graphemes, canvas {}x{}",
        placements.len(),
        CANVAS_WIDTH,
        canvas_height
    );

    LayoutResult {
        canvas_width: CANVAS_WIDTH,
        canvas_height,
        placements,
    }
}

/// Position of an attached glyph: offset from its anchor, or from the cursor
/// when nothing ordinary precedes it.
fn attach(
    anchor: Option<&GlyphPlacement>,
    center_x: f64,
    current_y: f64,
    font_size: f64,
    y_ratio: f64,
) -> (f64, f64) {
    let (base_x, base_y) = match anchor {
        Some(a) => (a.x, a.y),
        None => (center_x, current_y),
    };
    (
        base_x + font_size * Spacing::ATTACH_X,
        base_y + font_size * y_ratio,
    )
}
