//! Integration tests for the public API
//!
//! Layout scenarios are generated with `layout_test!`; SVG output is parsed
//! with roxmltree rather than compared as text.
//! Run all tests with: cargo test

use tate::{layout, CharacterClass, LayoutResult, RenderOptions};
use unicode_segmentation::UnicodeSegmentation;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

/// Check the invariants every layout must satisfy
fn check_invariants(text: &str, font_size: f64, result: &LayoutResult) {
    assert_eq!(result.canvas_width, 400.0);
    assert!(result.canvas_height >= 400.0);
    assert_eq!(result.placements.len(), text.graphemes(true).count());

    for (placement, grapheme) in result.placements.iter().zip(text.graphemes(true)) {
        assert_eq!(placement.character, grapheme, "order must follow input");
        if placement.class == CharacterClass::Ordinary {
            assert_eq!(placement.x, 200.0);
        }
    }

    // Removing attached glyphs must not move any ordinary glyph
    let stripped: String = text
        .graphemes(true)
        .filter(|g| !tate::classify(g).is_attached())
        .collect();
    let baseline = layout(&stripped, font_size);
    assert_eq!(baseline.canvas_height, result.canvas_height);
    let kept: Vec<_> = result
        .placements
        .iter()
        .filter(|p| !p.class.is_attached())
        .collect();
    assert_eq!(kept.len(), baseline.placements.len());
    for (a, b) in kept.iter().zip(&baseline.placements) {
        assert_close(a.y, b.y, &format!("y of {:?}", a.character));
    }

    assert_eq!(&layout(text, font_size), result, "layout must be pure");
}

macro_rules! layout_test {
    ($name:ident, $text:expr, $size:expr) => {
        paste::paste! {
            #[test]
            fn [<invariants_ $name>]() {
                let result = layout($text, $size);
                check_invariants($text, $size, &result);
            }
        }
    };
}

layout_test!(empty, "", 48.0);
layout_test!(single_kana, "あ", 48.0);
layout_test!(sentence, "「プレビュー文字です。」", 48.0);
layout_test!(small_kana_run, "ちょっとキャッチ", 36.0);
layout_test!(leading_marks, "。っ、あ", 48.0);
layout_test!(only_marks, "、。っャ", 24.0);
layout_test!(nested_brackets, "『（＜注＞）』", 60.0);
layout_test!(long_text, "吾輩は猫である。名前はまだ無い。どこで生れたかとんと見当がつかぬ。", 48.0);
layout_test!(mixed_scripts, "Rust言語：ver.1", 32.0);
layout_test!(tiny_font, "縦書き", 1.0);
layout_test!(emoji_cluster, "家族\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}です", 48.0);

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn scenario_empty() {
    let result = layout("", 48.0);
    assert_eq!(result.canvas_width, 400.0);
    assert_eq!(result.canvas_height, 400.0);
    assert!(result.placements.is_empty());
}

#[test]
fn scenario_single_character() {
    let result = layout("あ", 48.0);
    assert_eq!(result.placements.len(), 1);
    assert_eq!(result.placements[0].class, CharacterClass::Ordinary);
    assert_eq!(result.placements[0].x, 200.0);
    assert_close(result.placements[0].y, (400.0 - 57.6) / 2.0, "y");
}

#[test]
fn scenario_trailing_period() {
    let result = layout("あ。", 48.0);
    let a = &result.placements[0];
    let dot = &result.placements[1];
    assert_eq!(dot.class, CharacterClass::TrailingPunctuation);
    assert_close(dot.x, a.x + 24.0, "x");
    assert_close(dot.y, a.y + 24.0, "y");
}

#[test]
fn scenario_period_without_anchor() {
    let result = layout("。", 48.0);
    let start_y = (400.0 - 0.0) / 2.0;
    assert_close(result.placements[0].x, 224.0, "x");
    assert_close(result.placements[0].y, start_y + 24.0, "y");
}

#[test]
fn scenario_bracketed() {
    let result = layout("「あ」", 48.0);
    let classes: Vec<_> = result.placements.iter().map(|p| p.class).collect();
    assert_eq!(
        classes,
        vec![
            CharacterClass::RotatedSymbolAbove,
            CharacterClass::Ordinary,
            CharacterClass::RotatedSymbolBelow
        ]
    );
    assert_close(CharacterClass::RotatedSymbolAbove.advance(48.0), 81.6, "above");
    assert_close(CharacterClass::Ordinary.advance(48.0), 57.6, "ordinary");
    assert_close(CharacterClass::RotatedSymbolBelow.advance(48.0), 81.6, "below");

    let content = 81.6 + 57.6 + 81.6;
    let start_y = (400.0 - content) / 2.0;
    assert_close(result.placements[0].y, start_y + 24.0, "open");
    assert_close(result.placements[1].y, start_y + 81.6, "あ");
    assert_close(result.placements[2].y, start_y + 81.6 + 57.6, "close");
}

#[test]
fn layout_serializes_to_camel_case_json() {
    let result = layout("あ。", 48.0);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["canvasWidth"], 400.0);
    assert_eq!(json["placements"][1]["class"], "trailing-punctuation");
    assert_eq!(json["placements"][1]["character"], "。");
    let back: LayoutResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

// =============================================================================
// SVG output
// =============================================================================

fn attr<'a>(node: &roxmltree::Node<'a, '_>, name: &str) -> &'a str {
    node.attribute(name)
        .unwrap_or_else(|| panic!("missing attribute {}", name))
}

fn num(node: &roxmltree::Node, name: &str) -> f64 {
    attr(node, name).parse().unwrap()
}

#[test]
fn preview_svg_draws_every_glyph() {
    let options = RenderOptions {
        font_family: Some("Noto Sans JP".to_string()),
        color: tate::Color::parse("#FF0000").unwrap(),
        ..Default::default()
    };
    let text = "「あ。」";
    let svg = tate::render_to_svg(text, &options);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let root = doc.root_element();
    assert_eq!(attr(&root, "viewBox"), "0 0 400 400");
    assert!(attr(&root, "style").contains("Noto Sans JP"));

    let style = doc
        .descendants()
        .find(|n| n.has_tag_name("style"))
        .and_then(|n| n.text())
        .unwrap();
    assert!(style.contains("family=Noto+Sans+JP:wght@400&display=swap"));

    let texts: Vec<_> = doc.descendants().filter(|n| n.has_tag_name("text")).collect();
    let result = layout(text, 48.0);
    assert_eq!(texts.len(), result.placements.len());

    for (node, placement) in texts.iter().zip(&result.placements) {
        assert_eq!(node.text(), Some(placement.character.as_str()));
        assert_close(num(node, "x"), placement.x, "x");
        assert_close(num(node, "y"), placement.y, "y");
        assert_eq!(attr(node, "fill"), "#FF0000");
        assert_eq!(attr(node, "text-anchor"), "middle");
        assert_eq!(attr(node, "dominant-baseline"), "middle");

        let expected_size = if placement.class == CharacterClass::TrailingPunctuation {
            38.4
        } else {
            48.0
        };
        assert_close(num(node, "font-size"), expected_size, "font-size");

        match node.attribute("transform") {
            Some(t) => {
                assert!(placement.class.is_rotated());
                assert!(t.starts_with("rotate(90, "), "{}", t);
            }
            None => assert!(!placement.class.is_rotated()),
        }
    }
}

#[test]
fn preview_uses_placeholder_and_generic_font() {
    let svg = tate::render_to_svg("", &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let glyphs: String = doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(glyphs, "プレビュー");
    assert_eq!(attr(&doc.root_element(), "style"), "font-family:sans-serif");
    assert!(!doc.descendants().any(|n| n.has_tag_name("style")));
}

#[test]
fn preview_escapes_markup() {
    let svg = tate::render_to_svg("<&>", &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let glyphs: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(glyphs, vec!["<", "&", ">"]);
}

#[test]
fn export_is_trimmed_and_named() {
    let options = RenderOptions {
        font_family: Some("Noto Sans JP".to_string()),
        ..Default::default()
    };
    let exported = tate::export_svg("縦書き", &options).unwrap();
    assert_eq!(exported.file_name, "48px-Noto Sans JP-縦書き.svg");

    let doc = roxmltree::Document::parse(&exported.svg).unwrap();
    let root = doc.root_element();
    // Three 48px glyphs at 57.6 pitch: 48 wide, 2*57.6 + 48 tall
    assert_close(num(&root, "width"), 88.0, "width");
    assert_close(num(&root, "height"), 2.0 * 57.6 + 48.0 + 40.0, "height");
    let view_box: Vec<f64> = attr(&root, "viewBox")
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    assert_close(view_box[0], 200.0 - 24.0 - 20.0, "viewBox x");
    assert_close(view_box[2], exported.width, "viewBox width");
    assert_close(view_box[3], exported.height, "viewBox height");
}

#[test]
fn export_rejects_bad_input() {
    let no_font = RenderOptions::default();
    assert!(matches!(
        tate::export_svg("あ", &no_font),
        Err(tate::TateError::MissingFontFamily)
    ));

    let options = RenderOptions {
        font_family: Some("Lato".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        tate::export_svg("", &options),
        Err(tate::TateError::EmptyText)
    ));

    for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let options = RenderOptions {
            font_size: size,
            font_family: Some("Lato".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            tate::export_svg("あ", &options),
            Err(tate::TateError::InvalidFontSize(_))
        ));
    }
}

#[test]
fn render_options_deserialize_with_defaults() {
    let options: RenderOptions =
        serde_json::from_str(r##"{"fontSize": 32, "color": "#333"}"##).unwrap();
    assert_eq!(options.font_size, 32.0);
    assert_eq!(options.color.as_str(), "#333");
    assert_eq!(options.font_family, None);
    assert_eq!(options.placeholder, "プレビュー");

    assert!(serde_json::from_str::<RenderOptions>(r#"{"color": "black"}"#).is_err());
}

// =============================================================================
// CLI
// =============================================================================

mod cli {
    use std::process::Command;

    fn tate() -> Command {
        Command::new(env!("CARGO_BIN_EXE_tate"))
    }

    #[test]
    fn render_prints_svg() {
        let output = tate().args(["render", "あ。"]).output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("<svg"));
        assert!(stdout.contains(">。</text>"));
    }

    #[test]
    fn render_json() {
        let output = tate()
            .args(["render", "「あ」", "--json", "-s", "24"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["placements"].as_array().unwrap().len(), 3);
        assert_eq!(value["placements"][0]["class"], "rotated-symbol-above");
    }

    #[test]
    fn invalid_color_fails() {
        let output = tate()
            .args(["render", "あ", "--color", "red"])
            .output()
            .unwrap();
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid color"), "{}", stderr);
    }

    #[test]
    fn fonts_lists_fallback_with_default() {
        let output = tate().arg("fonts").output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<_> = stdout.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Noto Sans JP (default)");
    }
}
