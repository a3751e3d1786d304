//! Serde serialization/deserialization round-trip tests.
//!
//! Verifies every public data type can be serialized to JSON and
//! deserialized back, producing an equal value.

#![cfg(feature = "serde")]

use pdftable_core::*;

fn roundtrip<T>(value: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).expect("serialize failed");
    let restored: T = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(*value, restored, "round-trip mismatch for JSON: {json}");
}

// --- Geometry ---

#[test]
fn test_serde_point() {
    roundtrip(&Point::new(3.14, 2.72));
}

#[test]
fn test_serde_orientation() {
    roundtrip(&Orientation::Horizontal);
    roundtrip(&Orientation::Vertical);
}

#[test]
fn test_serde_color() {
    roundtrip(&Color::new(0.5, 0.25, 0.75));
    roundtrip(&Color::black());
}

#[test]
fn test_serde_bbox() {
    roundtrip(&BBox::new(10.0, 20.0, 300.0, 400.0));
}

// --- Text ---

fn sample_char() -> Char {
    Char { text: Some('A'), bbox: BBox::new(0.0, 0.0, 10.0, 12.0), rotation: 0.0, upright: true, fontname: "Helvetica".into(), size: 12.0 }
}

#[test]
fn test_serde_char() {
    roundtrip(&sample_char());
    let mut unmapped = sample_char();
    unmapped.text = None;
    roundtrip(&unmapped);
}

// --- Shapes ---

#[test]
fn test_serde_line_path() {
    roundtrip(&LinePath::straight_segment(0.0, 10.0, 100.0, 10.0, 1.0));
}

#[test]
fn test_serde_rect_prim() {
    roundtrip(&RectPrim { bbox: BBox::new(0.0, 0.0, 50.0, 20.0), fill_color: Some(Color::black()), stroke_color: None, stroke_width: 0.0 });
}

// --- Words ---

#[test]
fn test_serde_split_at_punctuation() {
    roundtrip(&SplitAtPunctuation::None);
    roundtrip(&SplitAtPunctuation::All);
    roundtrip(&SplitAtPunctuation::Custom(",.;".into()));
}

#[test]
fn test_serde_words_extract_settings() {
    roundtrip(&WordsExtractSettings::default());
}

#[test]
fn test_serde_word() {
    roundtrip(&Word { text: "Hello".into(), bbox: BBox::new(0.0, 0.0, 50.0, 12.0), chars: vec![sample_char()] });
}

// --- Edges ---

#[test]
fn test_serde_edge_source() {
    roundtrip(&EdgeSource::Line);
    roundtrip(&EdgeSource::RectTop);
    roundtrip(&EdgeSource::Stream);
}

#[test]
fn test_serde_edge() {
    roundtrip(&Edge {
        orientation: Orientation::Horizontal,
        x0: 0.0,
        y0: 10.0,
        x1: 100.0,
        y1: 10.0,
        stroke_width: 1.0,
        color: Some(Color::black()),
        source: EdgeSource::Line,
    });
}

// --- Table ---

#[test]
fn test_serde_strategy() {
    roundtrip(&Strategy::Lines);
    roundtrip(&Strategy::LinesStrict);
    roundtrip(&Strategy::Text);
}

#[test]
fn test_serde_table_settings() {
    roundtrip(&TableSettings::default());
}

#[test]
fn test_serde_intersection() {
    roundtrip(&Intersection { x: 10.0, y: 20.0 });
}

#[test]
fn test_serde_table_cell() {
    roundtrip(&TableCell { bbox: BBox::new(0.0, 0.0, 10.0, 10.0), text: "cell".into() });
}

#[test]
fn test_serde_cell_slot() {
    roundtrip(&CellSlot::Cell(TableCell { bbox: BBox::new(0.0, 0.0, 10.0, 10.0), text: "x".into() }));
    roundtrip(&CellSlot::Gap);
}

#[test]
fn test_serde_cell_group() {
    let group = CellGroup {
        cells: vec![CellSlot::Cell(TableCell { bbox: BBox::new(0.0, 0.0, 10.0, 10.0), text: "x".into() }), CellSlot::Gap],
        bbox: BBox::new(0.0, 0.0, 20.0, 10.0),
    };
    roundtrip(&group);
}

#[test]
fn test_serde_table() {
    let table = Table {
        bbox: BBox::new(0.0, 0.0, 20.0, 10.0),
        cells: vec![TableCell { bbox: BBox::new(0.0, 0.0, 10.0, 10.0), text: "a".into() }],
        rows: vec![],
        columns: vec![],
        page_index: Some(0),
        text_extracted: false,
    };
    roundtrip(&table);
}

#[test]
fn test_serde_edge_sets() {
    let sets = EdgeSets {
        horizontal: vec![Edge { orientation: Orientation::Horizontal, x0: 0.0, y0: 0.0, x1: 10.0, y1: 0.0, stroke_width: 1.0, color: None, source: EdgeSource::Line }],
        vertical: vec![],
    };
    roundtrip(&sets);
}
