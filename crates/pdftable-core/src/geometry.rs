//! Geometric primitives shared by every stage of the table-finding pipeline.

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Orientation of an axis-aligned geometric element.
///
/// There is no `Diagonal` variant here: a segment that is neither
/// horizontal nor vertical within tolerance does not produce an edge at
/// all, so callers never need to represent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Runs left-to-right at a fixed y.
    Horizontal,
    /// Runs top-to-bottom at a fixed x.
    Vertical,
}

/// Simple RGB color in `[0.0, 1.0]` per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel, `0.0..=1.0`.
    pub r: f64,
    /// Green channel, `0.0..=1.0`.
    pub g: f64,
    /// Blue channel, `0.0..=1.0`.
    pub b: f64,
}

impl Color {
    /// Construct a color from its channels.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// The color black, used as a default stroke/fill color when a drawn
    /// primitive doesn't specify one.
    pub fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Bounding box with top-left origin coordinates.
///
/// - `x0`: left edge
/// - `y0`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `y1`: bottom edge (distance from top of page)
///
/// The constructor normalizes its arguments so `x0 <= x1` and `y0 <= y1`
/// always hold, regardless of the order the caller supplied them in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    /// Left edge.
    pub x0: f64,
    /// Top edge (distance from top of page).
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge (distance from top of page).
    pub y1: f64,
}

impl BBox {
    /// Construct a box, normalizing argument order so `x0 <= x1` and
    /// `y0 <= y1` hold regardless of how the caller passed them.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Width (`x1 - x0`).
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height (`y1 - y0`).
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Whether all four coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }

    /// Geometric center of the box.
    pub fn center(&self) -> Point {
        Point::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Union of two bounding boxes (smallest box containing both).
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// The half-open membership test used to assign text to cells:
    /// a point on the min edges is inside, a point on the max edges is not.
    /// This is what keeps a point sitting exactly on a shared cell boundary
    /// from being counted in both cells.
    pub fn contains_half_open(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }

    /// Flip this box across a horizontal line at `page_height`, for
    /// converting a bottom-origin box into the top-origin convention used
    /// throughout this crate.
    pub fn flip_y(&self, page_height: f64) -> BBox {
        BBox::new(self.x0, page_height - self.y1, self.x1, page_height - self.y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_new() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, 4.0);
    }

    #[test]
    fn bbox_normalizes_swapped_coordinates() {
        let bbox = BBox::new(30.0, 40.0, 10.0, 20.0);
        assert_eq!(bbox, BBox::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn bbox_dimensions() {
        let bbox = BBox::new(10.0, 20.0, 50.0, 60.0);
        assert_eq!(bbox.width(), 40.0);
        assert_eq!(bbox.height(), 40.0);
    }

    #[test]
    fn bbox_union() {
        let a = BBox::new(10.0, 20.0, 30.0, 40.0);
        let b = BBox::new(5.0, 25.0, 35.0, 45.0);
        let u = a.union(&b);
        assert_eq!(u, BBox::new(5.0, 20.0, 35.0, 45.0));
    }

    #[test]
    fn bbox_half_open_containment_on_shared_boundary() {
        let left = BBox::new(0.0, 0.0, 10.0, 10.0);
        let right = BBox::new(10.0, 0.0, 20.0, 10.0);
        let on_boundary = Point::new(10.0, 5.0);
        assert!(!left.contains_half_open(on_boundary));
        assert!(right.contains_half_open(on_boundary));
    }

    #[test]
    fn bbox_flip_y() {
        let bbox = BBox::new(10.0, 20.0, 30.0, 50.0);
        let flipped = bbox.flip_y(100.0);
        assert_eq!(flipped, BBox::new(10.0, 50.0, 30.0, 80.0));
    }

    #[test]
    fn orientation_variants_distinct() {
        assert_ne!(Orientation::Horizontal, Orientation::Vertical);
    }

    #[test]
    fn color_default_is_black() {
        assert_eq!(Color::default(), Color::black());
    }
}
