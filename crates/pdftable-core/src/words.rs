//! Word reconstruction from characters.

use std::collections::BTreeMap;

use crate::geometry::{BBox, Point};
use crate::text::Char;

/// Punctuation-splitting mode for word reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitAtPunctuation {
    /// Never split on punctuation.
    #[default]
    None,
    /// Split at any Unicode punctuation codepoint.
    All,
    /// Split only at codepoints present in the given string.
    Custom(String),
}

fn is_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

fn matches_split(c: char, mode: &SplitAtPunctuation) -> bool {
    match mode {
        SplitAtPunctuation::None => false,
        SplitAtPunctuation::All => is_punctuation(c),
        SplitAtPunctuation::Custom(set) => set.contains(c),
    }
}

/// Expand a small, fixed table of common Latin ligatures, following the
/// common pdfplumber/pdfminer set.
fn expand_ligature(c: char) -> &'static str {
    match c {
        '\u{FB00}' => "ff",
        '\u{FB01}' => "fi",
        '\u{FB02}' => "fl",
        '\u{FB03}' => "ffi",
        '\u{FB04}' => "ffl",
        '\u{FB05}' => "st",
        '\u{FB06}' => "st",
        _ => "",
    }
}

/// Settings controlling word reconstruction from characters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordsExtractSettings {
    /// Maximum horizontal gap between characters to keep them in one word.
    pub x_tolerance: f64,
    /// Maximum vertical offset between characters to keep them in one word.
    pub y_tolerance: f64,
    /// Keep blank/whitespace characters inside words instead of splitting on them.
    pub keep_blank_chars: bool,
    /// Use content-stream order instead of spatial (top, then x) ordering.
    pub use_text_flow: bool,
    /// Read left-to-right (clockwise) within the canonical upright frame.
    pub text_read_in_clockwise: bool,
    /// Punctuation-splitting behavior.
    pub split_at_punctuation: SplitAtPunctuation,
    /// Expand ligature glyphs (e.g. "ﬁ") into their constituent letters.
    pub expand_ligatures: bool,
    /// Trim leading/trailing whitespace from the final word text.
    pub need_strip: bool,
}

impl Default for WordsExtractSettings {
    fn default() -> Self {
        Self {
            x_tolerance: 3.0,
            y_tolerance: 3.0,
            keep_blank_chars: false,
            use_text_flow: false,
            text_read_in_clockwise: true,
            split_at_punctuation: SplitAtPunctuation::None,
            expand_ligatures: true,
            need_strip: true,
        }
    }
}

/// A word reconstructed from one or more characters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The reconstructed text, post ligature-expansion/stripping.
    pub text: String,
    /// Union of the constituent chars' bounding boxes, in page space.
    pub bbox: BBox,
    /// The chars that make up this word, in reading order.
    pub chars: Vec<Char>,
}

/// Reconstructs words from a page's characters.
pub struct WordExtractor;

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum GroupKey {
    Class(i32),
    Arbitrary(u64),
}

fn group_key(ch: &Char) -> GroupKey {
    match ch.rotation_class() {
        Some(class) => GroupKey::Class(class),
        None => GroupKey::Arbitrary(ch.rotation.to_bits()),
    }
}

/// Rotate a point into the canonical upright frame for the given rotation
/// class. Used only to decide sort order and adjacency — the word's final
/// bounding box is always the union of the real, page-space char boxes.
fn to_upright(p: Point, class: i32) -> Point {
    match class {
        90 => Point::new(p.y, -p.x),
        180 => Point::new(-p.x, -p.y),
        270 => Point::new(-p.y, p.x),
        _ => p,
    }
}

impl WordExtractor {
    /// Extract words from the given characters using the specified settings.
    pub fn extract(chars: &[Char], settings: &WordsExtractSettings) -> Vec<Word> {
        if chars.is_empty() {
            return Vec::new();
        }

        let mut groups: BTreeMap<GroupKey, Vec<Char>> = BTreeMap::new();
        for ch in chars {
            groups.entry(group_key(ch)).or_default().push(ch.clone());
        }

        let mut words = Vec::new();
        for (key, group_chars) in groups {
            let class = match key {
                GroupKey::Class(c) => c,
                GroupKey::Arbitrary(_) => 0,
            };
            words.extend(Self::extract_group(&group_chars, class, settings));
        }
        words
    }

    fn extract_group(chars: &[Char], class: i32, settings: &WordsExtractSettings) -> Vec<Word> {
        let mut ordered: Vec<&Char> = chars.iter().collect();
        if !settings.use_text_flow {
            ordered.sort_by(|a, b| {
                let ua = to_upright(Point::new(a.bbox.x0, a.bbox.y0), class);
                let ub = to_upright(Point::new(b.bbox.x0, b.bbox.y0), class);
                let xa = if settings.text_read_in_clockwise { ua.x } else { -ua.x };
                let xb = if settings.text_read_in_clockwise { ub.x } else { -ub.x };
                ua.y.partial_cmp(&ub.y).unwrap().then(xa.partial_cmp(&xb).unwrap())
            });
        }

        let effective_x = |c: &Char| -> (f64, f64) {
            let p0 = to_upright(Point::new(c.bbox.x0, c.bbox.y0), class);
            let p1 = to_upright(Point::new(c.bbox.x1, c.bbox.y1), class);
            let (lo, hi) = (p0.x.min(p1.x), p0.x.max(p1.x));
            if settings.text_read_in_clockwise {
                (lo, hi)
            } else {
                (-hi, -lo)
            }
        };
        let effective_y = |c: &Char| -> f64 {
            to_upright(Point::new(c.bbox.x0, c.bbox.y0), class).y
        };

        let mut words = Vec::new();
        let mut current: Vec<Char> = Vec::new();

        let mut flush = |current: &mut Vec<Char>, words: &mut Vec<Word>| {
            if !current.is_empty() {
                words.push(Self::make_word(current, settings));
                current.clear();
            }
        };

        for &ch in &ordered {
            let is_blank = ch.is_blank();
            let is_split = !is_blank
                && ch.text.is_some_and(|c| matches_split(c, &settings.split_at_punctuation));

            if is_blank && !settings.keep_blank_chars {
                flush(&mut current, &mut words);
                continue;
            }

            if is_split {
                flush(&mut current, &mut words);
                words.push(Self::make_word(&[ch.clone()], settings));
                continue;
            }

            if let Some(last) = current.last() {
                let (_, last_x1) = effective_x(last);
                let (x0, _) = effective_x(ch);
                let x_gap = x0 - last_x1;
                let y_diff = (effective_y(ch) - effective_y(last)).abs();
                if x_gap > settings.x_tolerance || y_diff > settings.y_tolerance {
                    flush(&mut current, &mut words);
                }
            }

            current.push(ch.clone());
        }
        flush(&mut current, &mut words);

        words
    }

    fn make_word(chars: &[Char], settings: &WordsExtractSettings) -> Word {
        let mut text = String::new();
        for c in chars {
            if let Some(ch) = c.text {
                if settings.expand_ligatures {
                    let expansion = expand_ligature(ch);
                    if !expansion.is_empty() {
                        text.push_str(expansion);
                        continue;
                    }
                }
                text.push(ch);
            }
        }
        if settings.need_strip {
            text = text.trim().to_string();
        }
        let bbox = chars
            .iter()
            .map(|c| c.bbox)
            .reduce(|a, b| a.union(&b))
            .expect("make_word called with non-empty chars");
        Word { text, bbox, chars: chars.to_vec() }
    }
}
