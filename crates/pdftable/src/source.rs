//! The inbound boundary of the table-finding pipeline: an abstract page
//! capability plus the concrete, in-memory [`Page`] that exercises it.
//!
//! Production integrations bind [`PageSource`] to a real PDF runtime; this
//! crate never parses a PDF itself.

use pdftable_core::{BBox, Char, CoreError, LinePath, RectPrim};

/// The axis convention a page's drawn primitives were produced in.
///
/// [`BBox`] and the rest of this crate always use top-origin coordinates
/// (y increases downward, `y0` is closer to the top of the page). A
/// bottom-origin source (y increases upward) is flipped into that
/// convention during primitive ingestion, once, for the lifetime of
/// the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisConvention {
    /// y increases downward; no transform is applied.
    #[default]
    TopOrigin,
    /// y increases upward; flipped to top-origin as primitives are ingested.
    BottomOrigin,
}

/// Abstract capability a page must provide for the pipeline to run against
/// it. A production integration implements this over a real PDF
/// runtime's page object; [`Page`] is the crate's own in-memory
/// implementation for callers who already have extracted primitives.
///
/// Sequences may be iterated at most once per call — implementors are not
/// required to support restarting an iterator.
pub trait PageSource {
    /// Page width in page units.
    fn width(&self) -> f64;
    /// Page height in page units.
    fn height(&self) -> f64;
    /// Characters on the page.
    fn chars(&self) -> Box<dyn Iterator<Item = Char> + '_>;
    /// Drawn line paths on the page.
    fn lines(&self) -> Box<dyn Iterator<Item = LinePath> + '_>;
    /// Drawn rectangles on the page.
    fn rects(&self) -> Box<dyn Iterator<Item = RectPrim> + '_>;
    /// Whether the page is still usable. `false` once the host has released
    /// it, or — for [`Page`] specifically — whenever primitives have not yet
    /// been extracted.
    fn is_valid(&self) -> bool;
}

/// Lifecycle state of a [`Page`].
///
/// Transitions are irreversible within one page's lifetime:
/// `Unloaded → Loaded → PrimitivesExtracted → Cleared`. Each transition
/// method rejects being called out of order with [`CoreError::InvalidPageState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No geometry has been set yet.
    Unloaded,
    /// Width, height, and axis convention are known; primitives are not.
    Loaded,
    /// Primitives have been ingested and normalized. The only state
    /// `find_tables` and friends will run against.
    PrimitivesExtracted,
    /// The page has been released by the host; all primitives are dropped.
    Cleared,
}

fn drop_nan_or_zero_area(bbox: BBox) -> bool {
    bbox.is_finite() && bbox.width() > 0.0 && bbox.height() > 0.0
}

fn flip_char(mut ch: Char, page_height: f64, axis: AxisConvention) -> Option<Char> {
    if axis == AxisConvention::BottomOrigin {
        ch.bbox = ch.bbox.flip_y(page_height);
    }
    if !drop_nan_or_zero_area(ch.bbox) {
        return None;
    }
    Some(ch)
}

fn flip_line(mut line: LinePath, page_height: f64, axis: AxisConvention) -> Option<LinePath> {
    if axis == AxisConvention::BottomOrigin {
        for p in &mut line.points {
            p.y = page_height - p.y;
        }
    }
    if line.points.len() < 2 || line.points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return None;
    }
    Some(line)
}

fn flip_rect(mut rect: RectPrim, page_height: f64, axis: AxisConvention) -> Option<RectPrim> {
    if axis == AxisConvention::BottomOrigin {
        rect.bbox = rect.bbox.flip_y(page_height);
    }
    if !drop_nan_or_zero_area(rect.bbox) {
        return None;
    }
    Some(rect)
}

/// Normalize bboxes, drop NaN/zero-area
/// entities, and apply the bottom-origin transform if configured.
pub(crate) fn ingest(
    chars: Vec<Char>,
    lines: Vec<LinePath>,
    rects: Vec<RectPrim>,
    page_height: f64,
    axis: AxisConvention,
) -> (Vec<Char>, Vec<LinePath>, Vec<RectPrim>) {
    let chars = chars.into_iter().filter_map(|c| flip_char(c, page_height, axis)).collect();
    let lines = lines.into_iter().filter_map(|l| flip_line(l, page_height, axis)).collect();
    let rects = rects.into_iter().filter_map(|r| flip_rect(r, page_height, axis)).collect();
    (chars, lines, rects)
}

/// An in-memory page built from already-extracted primitives.
///
/// `Page` is the crate's own [`PageSource`] implementation for callers who
/// have chars/lines/rects in hand but no PDF runtime of their own (tests,
/// fixtures, or a caller whose backend isn't wired through a full
/// `PageSource` implementation). It models its lifecycle as an explicit
/// state enum rather than with nullable fields.
#[derive(Debug, Clone)]
pub struct Page {
    state: PageState,
    width: f64,
    height: f64,
    axis: AxisConvention,
    chars: Vec<Char>,
    lines: Vec<LinePath>,
    rects: Vec<RectPrim>,
}

impl Page {
    /// A page with no geometry yet (`Unloaded`).
    pub fn unloaded() -> Self {
        Self {
            state: PageState::Unloaded,
            width: 0.0,
            height: 0.0,
            axis: AxisConvention::TopOrigin,
            chars: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
        }
    }

    /// Set the page's dimensions and axis convention (`Unloaded → Loaded`).
    pub fn load(&mut self, width: f64, height: f64, axis: AxisConvention) -> Result<(), CoreError> {
        if self.state != PageState::Unloaded {
            return Err(CoreError::InvalidPageState);
        }
        self.width = width;
        self.height = height;
        self.axis = axis;
        self.state = PageState::Loaded;
        Ok(())
    }

    /// Ingest raw primitives, normalizing and flipping them according
    /// to the axis convention set by [`Page::load`] (`Loaded → PrimitivesExtracted`).
    pub fn extract_primitives(
        &mut self,
        chars: Vec<Char>,
        lines: Vec<LinePath>,
        rects: Vec<RectPrim>,
    ) -> Result<(), CoreError> {
        if self.state != PageState::Loaded {
            return Err(CoreError::InvalidPageState);
        }
        let (chars, lines, rects) = ingest(chars, lines, rects, self.height, self.axis);
        self.chars = chars;
        self.lines = lines;
        self.rects = rects;
        self.state = PageState::PrimitivesExtracted;
        Ok(())
    }

    /// Convenience constructor: load and extract in one step, for callers
    /// who already have final geometry and normalized primitives in hand.
    pub fn from_primitives(
        width: f64,
        height: f64,
        axis: AxisConvention,
        chars: Vec<Char>,
        lines: Vec<LinePath>,
        rects: Vec<RectPrim>,
    ) -> Self {
        let mut page = Self::unloaded();
        page.load(width, height, axis).expect("unloaded page always accepts load()");
        page.extract_primitives(chars, lines, rects).expect("loaded page always accepts extract_primitives()");
        page
    }

    /// Release the page's primitives (`→ Cleared`), from any prior state.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.lines.clear();
        self.rects.clear();
        self.state = PageState::Cleared;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PageState {
        self.state
    }
}

impl PageSource for Page {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn chars(&self) -> Box<dyn Iterator<Item = Char> + '_> {
        Box::new(self.chars.iter().cloned())
    }

    fn lines(&self) -> Box<dyn Iterator<Item = LinePath> + '_> {
        Box::new(self.lines.iter().cloned())
    }

    fn rects(&self) -> Box<dyn Iterator<Item = RectPrim> + '_> {
        Box::new(self.rects.iter().cloned())
    }

    fn is_valid(&self) -> bool {
        self.state == PageState::PrimitivesExtracted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_at(x0: f64, y0: f64, x1: f64, y1: f64) -> Char {
        Char { text: Some('a'), bbox: BBox::new(x0, y0, x1, y1), rotation: 0.0, upright: true, fontname: "F".into(), size: 10.0 }
    }

    #[test]
    fn state_machine_rejects_out_of_order_transitions() {
        let mut page = Page::unloaded();
        assert_eq!(page.state(), PageState::Unloaded);
        assert!(page.extract_primitives(vec![], vec![], vec![]).is_err());
        page.load(100.0, 200.0, AxisConvention::TopOrigin).unwrap();
        assert!(page.load(100.0, 200.0, AxisConvention::TopOrigin).is_err());
        page.extract_primitives(vec![], vec![], vec![]).unwrap();
        assert_eq!(page.state(), PageState::PrimitivesExtracted);
        assert!(page.is_valid());
        page.clear();
        assert_eq!(page.state(), PageState::Cleared);
        assert!(!page.is_valid());
    }

    #[test]
    fn extract_primitives_drops_nan_and_zero_area() {
        let mut page = Page::unloaded();
        page.load(100.0, 100.0, AxisConvention::TopOrigin).unwrap();
        let good = char_at(0.0, 0.0, 10.0, 10.0);
        let zero_area = char_at(5.0, 5.0, 5.0, 10.0);
        let nan = Char { bbox: BBox::new(f64::NAN, 0.0, 1.0, 1.0), ..char_at(0.0, 0.0, 1.0, 1.0) };
        page.extract_primitives(vec![good.clone(), zero_area, nan], vec![], vec![]).unwrap();
        let chars: Vec<Char> = page.chars().collect();
        assert_eq!(chars, vec![good]);
    }

    #[test]
    fn bottom_origin_flips_into_top_origin() {
        let mut page = Page::unloaded();
        page.load(100.0, 200.0, AxisConvention::BottomOrigin).unwrap();
        let ch = char_at(0.0, 10.0, 10.0, 20.0);
        page.extract_primitives(vec![ch], vec![], vec![]).unwrap();
        let chars: Vec<Char> = page.chars().collect();
        assert_eq!(chars[0].bbox, BBox::new(0.0, 180.0, 10.0, 190.0));
    }
}
