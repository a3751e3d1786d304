//! Drawn primitives ingested from a page: polylines and rectangles.
//!
//! These mirror what a PDF content-stream interpreter hands off after
//! painting: a [`LinePath`] is whatever a stroked path turned into (a
//! straight line most of the time, but it may contain curved segments that
//! simply don't contribute edges), and a [`RectPrim`] is a filled and/or
//! stroked rectangle.

use crate::geometry::{BBox, Color, Point};

/// A polyline as drawn on the page.
///
/// `straight[i]` describes the segment from `points[i]` to `points[i + 1]`;
/// `straight.len() == points.len().saturating_sub(1)`. Only straight
/// segments contribute edges during derivation — curved segments are kept
/// around for completeness but are never classified as horizontal/vertical.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinePath {
    /// Vertices of the path, in drawing order.
    pub points: Vec<Point>,
    /// Per-segment straightness flags, see struct docs.
    pub straight: Vec<bool>,
    /// Stroke width in page units.
    pub stroke_width: f64,
    /// Stroke color, if the path is stroked.
    pub stroke_color: Option<Color>,
}

impl LinePath {
    /// Convenience constructor for the common case of a single straight
    /// two-point segment.
    pub fn straight_segment(x0: f64, y0: f64, x1: f64, y1: f64, stroke_width: f64) -> Self {
        Self {
            points: vec![Point::new(x0, y0), Point::new(x1, y1)],
            straight: vec![true],
            stroke_width,
            stroke_color: Some(Color::black()),
        }
    }

    /// Iterate over the straight segments as `(start, end)` pairs.
    pub fn straight_segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .windows(2)
            .zip(self.straight.iter())
            .filter(|(_, is_straight)| **is_straight)
            .map(|(pair, _)| (pair[0], pair[1]))
    }
}

/// A filled and/or stroked rectangle as drawn on the page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectPrim {
    /// Bounding box of the rectangle.
    pub bbox: BBox,
    /// Fill color, if the rectangle is filled.
    pub fill_color: Option<Color>,
    /// Stroke color, if the rectangle is stroked.
    pub stroke_color: Option<Color>,
    /// Stroke width in page units.
    pub stroke_width: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_segment_has_one_segment() {
        let line = LinePath::straight_segment(0.0, 10.0, 100.0, 10.0, 1.0);
        let segs: Vec<_> = line.straight_segments().collect();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].0, Point::new(0.0, 10.0));
        assert_eq!(segs[0].1, Point::new(100.0, 10.0));
    }

    #[test]
    fn curved_segment_excluded_from_straight_segments() {
        let line = LinePath {
            points: vec![Point::new(0.0, 0.0), Point::new(50.0, 50.0), Point::new(100.0, 0.0)],
            straight: vec![true, false],
            stroke_width: 1.0,
            stroke_color: Some(Color::black()),
        };
        let segs: Vec<_> = line.straight_segments().collect();
        assert_eq!(segs.len(), 1);
    }

    #[test]
    fn rect_prim_holds_bbox_and_colors() {
        let rect = RectPrim {
            bbox: BBox::new(0.0, 0.0, 10.0, 10.0),
            fill_color: Some(Color::black()),
            stroke_color: None,
            stroke_width: 0.0,
        };
        assert_eq!(rect.bbox.width(), 10.0);
        assert!(rect.stroke_color.is_none());
    }
}
