//! Character classification for vertical layout

use crate::types::CharacterClass;

/// Classify a single character.
pub fn classify_char(c: char) -> CharacterClass {
    match c {
        '、' | '。' | '，' | '．' | '・' | '：' | '；' => CharacterClass::TrailingPunctuation,
        // Small hiragana
        'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゃ' | 'ゅ' | 'ょ' | 'っ' => CharacterClass::SmallKana,
        // Small katakana
        'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ャ' | 'ュ' | 'ョ' | 'ッ' => CharacterClass::SmallKana,
        '「' | '『' | '＜' | '〈' | '≪' | '《' | '（' | '［' | '｛' | '｜' | 'ー' | '＝' | '～' => {
            CharacterClass::RotatedSymbolAbove
        }
        '」' | '』' | '＞' | '〉' | '≫' | '》' | '）' | '］' | '｝' => {
            CharacterClass::RotatedSymbolBelow
        }
        _ => CharacterClass::Ordinary,
    }
}

/// Classify a grapheme cluster.
///
/// Every special character is a lone scalar, so clusters made of several
/// scalars (a kana followed by a combining mark, an emoji sequence) are
/// always ordinary.
pub fn classify(grapheme: &str) -> CharacterClass {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => classify_char(c),
        _ => CharacterClass::Ordinary,
    }
}
