//! Character data extracted from a PDF page.

use crate::geometry::BBox;

/// A single character extracted from a PDF page.
///
/// `text` is `None` for glyphs that don't map to a Unicode scalar value
/// (e.g. unmapped Type 3 glyphs) — such chars still occupy space and
/// contribute to word bounding boxes, but never contribute text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Char {
    /// The Unicode scalar this glyph represents, if any.
    pub text: Option<char>,
    /// Bounding box in top-left origin coordinates.
    pub bbox: BBox,
    /// Rotation of the glyph, in degrees, measured clockwise from upright.
    pub rotation: f64,
    /// Whether the glyph renders upright on the page (as opposed to being
    /// drawn sideways/upside-down by a rotated text matrix).
    pub upright: bool,
    /// Font name, carried through for diagnostics; unused by the pipeline.
    pub fontname: String,
    /// Font size in points, carried through for diagnostics; unused by the
    /// pipeline.
    pub size: f64,
}

impl Char {
    /// Rotation class: the nearest of 0/90/180/270 degrees within a small
    /// epsilon, or `None` for an arbitrary angle that doesn't snap to one of
    /// the four axis-aligned reading directions.
    pub fn rotation_class(&self) -> Option<i32> {
        const EPS: f64 = 1e-6;
        let normalized = self.rotation.rem_euclid(360.0);
        for class in [0, 90, 180, 270] {
            if (normalized - class as f64).abs() < EPS {
                return Some(class);
            }
        }
        None
    }

    /// Whether this char is whitespace. A glyph with no Unicode mapping is
    /// never considered blank.
    pub fn is_blank(&self) -> bool {
        match self.text {
            Some(c) => c.is_whitespace(),
            None => false,
        }
    }
}
