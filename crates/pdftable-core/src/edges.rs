//! Edge derivation from drawn primitives and from word alignment.

use crate::geometry::{BBox, Color, Orientation, Point};
use crate::shapes::{LinePath, RectPrim};
use crate::words::Word;

/// Tolerance for classifying a segment as axis-aligned.
pub const EDGE_AXIS_TOLERANCE: f64 = 1e-6;

/// Where an edge came from, kept for diagnostics; it never influences
/// downstream pipeline stages beyond normalization's inherited color/width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeSource {
    /// A straight segment of a drawn line.
    Line,
    /// The top border of a rect.
    RectTop,
    /// The bottom border of a rect.
    RectBottom,
    /// The left border of a rect.
    RectLeft,
    /// The right border of a rect.
    RectRight,
    /// Synthesized from text alignment, not from a drawn primitive.
    Stream,
}

/// A horizontal or vertical edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Whether this is a horizontal or vertical edge.
    pub orientation: Orientation,
    /// Start x.
    pub x0: f64,
    /// Start y.
    pub y0: f64,
    /// End x.
    pub x1: f64,
    /// End y.
    pub y1: f64,
    /// Stroke width in page units.
    pub stroke_width: f64,
    /// Stroke (or fill, for a fill-only rect border) color.
    pub color: Option<Color>,
    /// What produced this edge.
    pub source: EdgeSource,
}

impl Edge {
    /// Length along the edge's own axis.
    pub fn length(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => (self.x1 - self.x0).abs(),
            Orientation::Vertical => (self.y1 - self.y0).abs(),
        }
    }

    /// The coordinate constant along this edge's axis (its `y` for a
    /// horizontal edge, its `x` for a vertical one).
    pub fn axis_coord(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.y0,
            Orientation::Vertical => self.x0,
        }
    }

    /// The span of this edge along its own direction: `(x0, x1)` for
    /// horizontal, `(y0, y1)` for vertical, always ordered low-to-high.
    pub fn span(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Horizontal => (self.x0.min(self.x1), self.x0.max(self.x1)),
            Orientation::Vertical => (self.y0.min(self.y1), self.y0.max(self.y1)),
        }
    }
}

/// Classify a segment's orientation; `None` for anything not axis-aligned
/// within [`EDGE_AXIS_TOLERANCE`].
fn classify_segment(a: Point, b: Point) -> Option<Orientation> {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    if dy < EDGE_AXIS_TOLERANCE {
        Some(Orientation::Horizontal)
    } else if dx < EDGE_AXIS_TOLERANCE {
        Some(Orientation::Vertical)
    } else {
        None
    }
}

fn edge_from_segment(a: Point, b: Point, stroke_width: f64, color: Option<Color>) -> Option<Edge> {
    let orientation = classify_segment(a, b)?;
    Some(Edge {
        orientation,
        x0: a.x,
        y0: a.y,
        x1: b.x,
        y1: b.y,
        stroke_width,
        color,
        source: EdgeSource::Line,
    })
}

/// Derive the (up to 4) border edges of a rect. `include_fill_only` decides
/// whether a rect with no stroke but a fill still contributes edges — true
/// under the `lines` strategy, false under `lines_strict`.
fn edges_from_rect(rect: &RectPrim, include_fill_only: bool) -> Vec<Edge> {
    let painted = rect.stroke_color.is_some() || (include_fill_only && rect.fill_color.is_some());
    if !painted {
        return Vec::new();
    }
    let color = rect.stroke_color.or(rect.fill_color);
    let b = &rect.bbox;
    vec![
        Edge {
            orientation: Orientation::Horizontal,
            x0: b.x0,
            y0: b.y0,
            x1: b.x1,
            y1: b.y0,
            stroke_width: rect.stroke_width,
            color,
            source: EdgeSource::RectTop,
        },
        Edge {
            orientation: Orientation::Horizontal,
            x0: b.x0,
            y0: b.y1,
            x1: b.x1,
            y1: b.y1,
            stroke_width: rect.stroke_width,
            color,
            source: EdgeSource::RectBottom,
        },
        Edge {
            orientation: Orientation::Vertical,
            x0: b.x0,
            y0: b.y0,
            x1: b.x0,
            y1: b.y1,
            stroke_width: rect.stroke_width,
            color,
            source: EdgeSource::RectLeft,
        },
        Edge {
            orientation: Orientation::Vertical,
            x0: b.x1,
            y0: b.y0,
            x1: b.x1,
            y1: b.y1,
            stroke_width: rect.stroke_width,
            color,
            source: EdgeSource::RectRight,
        },
    ]
}

/// Derive all edges from lines and rects, dropping anything shorter
/// than `prefilter_min_length` before it ever reaches normalization.
///
/// `include_fill_only_rects` corresponds to the `lines` strategy including
/// fill-only rects; `lines_strict` passes `false`.
pub fn derive_edges(
    lines: &[LinePath],
    rects: &[RectPrim],
    include_fill_only_rects: bool,
    prefilter_min_length: f64,
) -> Vec<Edge> {
    let mut edges = Vec::new();

    for line in lines {
        for (a, b) in line.straight_segments() {
            if let Some(edge) = edge_from_segment(a, b, line.stroke_width, line.stroke_color) {
                edges.push(edge);
            }
        }
    }

    for rect in rects {
        edges.extend(edges_from_rect(rect, include_fill_only_rects));
    }

    edges.retain(|e| e.length() >= prefilter_min_length);
    edges
}

/// Cluster word edge-coordinates for text-based edge synthesis.
///
/// `keys` pairs each word's clustering key (x-start/x-end/x-center, or the
/// y equivalents) with the word's extent along the cross axis. Equal-radius
/// clustering: sort by key, start a new cluster whenever the gap from the
/// running cluster mean exceeds `tolerance`.
fn cluster_keys(mut keys: Vec<(f64, f64, f64)>, tolerance: f64) -> Vec<(f64, f64, f64, usize)> {
    keys.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    let mut clusters: Vec<Vec<(f64, f64, f64)>> = Vec::new();
    for key in keys {
        match clusters.last_mut() {
            Some(cluster) => {
                let mean: f64 = cluster.iter().map(|k| k.0).sum::<f64>() / cluster.len() as f64;
                if (key.0 - mean).abs() <= tolerance {
                    cluster.push(key);
                    continue;
                }
                clusters.push(vec![key]);
            }
            None => clusters.push(vec![key]),
        }
    }
    clusters
        .into_iter()
        .map(|cluster| {
            let mean: f64 = cluster.iter().map(|k| k.0).sum::<f64>() / cluster.len() as f64;
            let lo = cluster.iter().map(|k| k.1).fold(f64::INFINITY, f64::min);
            let hi = cluster.iter().map(|k| k.2).fold(f64::NEG_INFINITY, f64::max);
            (mean, lo, hi, cluster.len())
        })
        .collect()
}

/// Synthesize vertical pseudo-edges from word x-alignment.
pub fn words_to_edges_vertical(words: &[Word], min_words: usize, snap_x_tolerance: f64) -> Vec<Edge> {
    let mut all_keys = Vec::new();
    for word in words {
        for x in [word.bbox.x0, word.bbox.x1, word.bbox.center().x] {
            all_keys.push((x, word.bbox.y0, word.bbox.y1));
        }
    }
    cluster_keys(all_keys, snap_x_tolerance)
        .into_iter()
        .filter(|(_, _, _, count)| *count >= min_words)
        .map(|(x, y0, y1, _)| Edge {
            orientation: Orientation::Vertical,
            x0: x,
            y0,
            x1: x,
            y1,
            stroke_width: 0.0,
            color: None,
            source: EdgeSource::Stream,
        })
        .collect()
}

/// Synthesize horizontal pseudo-edges from word y-alignment.
pub fn words_to_edges_horizontal(words: &[Word], min_words: usize, snap_y_tolerance: f64) -> Vec<Edge> {
    let mut all_keys = Vec::new();
    for word in words {
        for y in [word.bbox.y0, word.bbox.y1, word.bbox.center().y] {
            all_keys.push((y, word.bbox.x0, word.bbox.x1));
        }
    }
    cluster_keys(all_keys, snap_y_tolerance)
        .into_iter()
        .filter(|(_, _, _, count)| *count >= min_words)
        .map(|(y, x0, x1, _)| Edge {
            orientation: Orientation::Horizontal,
            x0,
            y0: y,
            x1,
            y1: y,
            stroke_width: 0.0,
            color: None,
            source: EdgeSource::Stream,
        })
        .collect()
}

/// Run both axes of text-based edge synthesis, honoring the respective
/// `min_words_*` thresholds; the `vertical`/`horizontal` flags gate whether
/// that axis runs at all (only the `text` strategy triggers it).
pub fn words_to_edges_stream(
    words: &[Word],
    vertical: bool,
    horizontal: bool,
    min_words_vertical: usize,
    min_words_horizontal: usize,
    snap_x_tolerance: f64,
    snap_y_tolerance: f64,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    if vertical {
        edges.extend(words_to_edges_vertical(words, min_words_vertical, snap_x_tolerance));
    }
    if horizontal {
        edges.extend(words_to_edges_horizontal(words, min_words_horizontal, snap_y_tolerance));
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;
    use crate::text::Char;

    fn make_word(text: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Word {
        Word {
            text: text.to_string(),
            bbox: BBox::new(x0, y0, x1, y1),
            chars: vec![Char {
                text: text.chars().next(),
                bbox: BBox::new(x0, y0, x1, y1),
                rotation: 0.0,
                upright: true,
                fontname: "Test".into(),
                size: 12.0,
            }],
        }
    }

    #[test]
    fn derive_edges_line_classification() {
        let lines = vec![
            LinePath::straight_segment(0.0, 50.0, 100.0, 50.0, 1.0),
            LinePath::straight_segment(50.0, 0.0, 50.0, 100.0, 1.0),
        ];
        let edges = derive_edges(&lines, &[], true, 0.0);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].orientation, Orientation::Horizontal);
        assert_eq!(edges[1].orientation, Orientation::Vertical);
    }

    #[test]
    fn derive_edges_diagonal_line_dropped() {
        let lines = vec![LinePath::straight_segment(0.0, 0.0, 100.0, 100.0, 1.0)];
        let edges = derive_edges(&lines, &[], true, 0.0);
        assert!(edges.is_empty());
    }

    #[test]
    fn derive_edges_rect_produces_four() {
        let rect = RectPrim {
            bbox: BBox::new(10.0, 20.0, 110.0, 70.0),
            fill_color: None,
            stroke_color: Some(Color::black()),
            stroke_width: 1.0,
        };
        let edges = derive_edges(&[], &[rect], true, 0.0);
        assert_eq!(edges.len(), 4);
    }

    #[test]
    fn fill_only_rect_included_under_lines_not_lines_strict() {
        let rect = RectPrim {
            bbox: BBox::new(10.0, 20.0, 110.0, 70.0),
            fill_color: Some(Color::black()),
            stroke_color: None,
            stroke_width: 0.0,
        };
        assert_eq!(derive_edges(&[], &[rect.clone()], true, 0.0).len(), 4);
        assert_eq!(derive_edges(&[], &[rect], false, 0.0).len(), 0);
    }

    #[test]
    fn prefilter_drops_short_edges() {
        let lines = vec![LinePath::straight_segment(0.0, 0.0, 2.0, 0.0, 1.0)];
        assert_eq!(derive_edges(&lines, &[], true, 1.0).len(), 1);
        assert_eq!(derive_edges(&lines, &[], true, 5.0).len(), 0);
    }

    #[test]
    fn words_to_edges_vertical_requires_min_words() {
        let words = vec![
            make_word("a", 10.0, 0.0, 20.0, 10.0),
            make_word("b", 10.0, 20.0, 20.0, 30.0),
        ];
        assert!(words_to_edges_vertical(&words, 3, 3.0).is_empty());
        assert_eq!(words_to_edges_vertical(&words, 2, 3.0).len() > 0, true);
    }

    #[test]
    fn words_to_edges_horizontal_clusters_by_row() {
        let words = vec![
            make_word("a", 0.0, 10.0, 10.0, 20.0),
            make_word("b", 20.0, 10.0, 30.0, 20.0),
        ];
        let edges = words_to_edges_horizontal(&words, 1, 3.0);
        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| e.orientation == Orientation::Horizontal));
    }
}
