//! Type definitions for vertical layout results

use serde::{Deserialize, Serialize};

/// Fixed width of the layout canvas, in logical units
pub const CANVAS_WIDTH: f64 = 400.0;

/// The canvas is never shorter than this, however little text there is
pub const MIN_CANVAS_HEIGHT: f64 = 400.0;

/// Spacing ratios, all expressed as fractions of the font size
pub struct Spacing;

impl Spacing {
    /// Line pitch of an ordinary glyph
    pub const LINE_HEIGHT: f64 = 1.2;
    /// Extra pitch taken by a rotated bracket or dash
    pub const SYMBOL_EXTRA: f64 = 0.5;
    /// Horizontal offset of attached punctuation and small kana
    pub const ATTACH_X: f64 = 0.5;
    /// Vertical offset of attached punctuation (upper right of the anchor)
    pub const PUNCTUATION_Y: f64 = 0.5;
    /// Vertical offset of attached small kana (lower right of the anchor)
    pub const SMALL_KANA_Y: f64 = 0.75;
    /// Rendered size of trailing punctuation
    pub const PUNCTUATION_SCALE: f64 = 0.8;
}

// ============================================================================
// Character classes
// ============================================================================

/// Typographic role of a character within a vertical column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharacterClass {
    /// Stacked vertically, takes one line
    Ordinary,
    /// 、。，．・：； attached to the upper right of the previous glyph
    TrailingPunctuation,
    /// ぁぃぅぇぉゃゅょっ and katakana equivalents, attached lower right
    SmallKana,
    /// Opening brackets and dashes, rotated, centered in their line
    RotatedSymbolAbove,
    /// Closing brackets, rotated, anchored at the top of their line
    RotatedSymbolBelow,
}

impl CharacterClass {
    /// Multiplier applied to the font size when rendering this class
    pub fn font_scale(&self) -> f64 {
        match self {
            CharacterClass::TrailingPunctuation => Spacing::PUNCTUATION_SCALE,
            _ => 1.0,
        }
    }

    /// Whether the glyph is drawn rotated 90° clockwise about its point
    pub fn is_rotated(&self) -> bool {
        matches!(
            self,
            CharacterClass::RotatedSymbolAbove | CharacterClass::RotatedSymbolBelow
        )
    }

    /// Whether the glyph hangs off the preceding ordinary glyph
    pub fn is_attached(&self) -> bool {
        matches!(
            self,
            CharacterClass::TrailingPunctuation | CharacterClass::SmallKana
        )
    }

    /// How far this class moves the vertical cursor
    pub fn advance(&self, font_size: f64) -> f64 {
        let line_height = font_size * Spacing::LINE_HEIGHT;
        match self {
            CharacterClass::Ordinary => line_height,
            CharacterClass::RotatedSymbolAbove | CharacterClass::RotatedSymbolBelow => {
                line_height + font_size * Spacing::SYMBOL_EXTRA
            }
            CharacterClass::TrailingPunctuation | CharacterClass::SmallKana => 0.0,
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterClass::Ordinary => write!(f, "ordinary"),
            CharacterClass::TrailingPunctuation => write!(f, "trailing-punctuation"),
            CharacterClass::SmallKana => write!(f, "small-kana"),
            CharacterClass::RotatedSymbolAbove => write!(f, "rotated-symbol-above"),
            CharacterClass::RotatedSymbolBelow => write!(f, "rotated-symbol-below"),
        }
    }
}

// ============================================================================
// Layout output
// ============================================================================

/// A single grapheme placed on the canvas.
///
/// `(x, y)` is the glyph's center: renderers draw it middle-anchored on both
/// axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    pub character: String,
    pub class: CharacterClass,
    pub x: f64,
    pub y: f64,
}

/// The complete vertical layout of one string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// In input order
    pub placements: Vec<GlyphPlacement>,
}

impl LayoutResult {
    /// Horizontal center of the column
    pub fn center_x(&self) -> f64 {
        self.canvas_width / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// An axis-aligned rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}
