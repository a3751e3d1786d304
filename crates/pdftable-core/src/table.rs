//! Edge normalization, cell enumeration, table assembly, and text
//! assignment — the heart of the table-finding pipeline.

use std::collections::BTreeMap;

use crate::edges::{derive_edges, words_to_edges_stream, Edge};
use crate::error::CoreError;
use crate::geometry::{BBox, Orientation};
use crate::shapes::{LinePath, RectPrim};
use crate::words::{Word, WordsExtractSettings};

/// Per-axis edge-derivation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Visible ruling lines plus filled-but-unstroked rect edges.
    Lines,
    /// Visible ruling lines only (rects must be stroked to count).
    LinesStrict,
    /// No visible borders: infer edges from word alignment.
    Text,
}

/// Configuration for the table-finding pipeline. All tolerances default to
/// 3.0; see [`TableSettings::default`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSettings {
    pub vertical_strategy: Strategy,
    pub horizontal_strategy: Strategy,
    pub snap_x_tolerance: f64,
    pub snap_y_tolerance: f64,
    pub join_x_tolerance: f64,
    pub join_y_tolerance: f64,
    pub intersection_x_tolerance: f64,
    pub intersection_y_tolerance: f64,
    pub edge_min_length: f64,
    pub edge_min_length_prefilter: f64,
    pub min_words_vertical: usize,
    pub min_words_horizontal: usize,
    pub include_single_cell: bool,
    pub min_rows: Option<usize>,
    pub min_columns: Option<usize>,
    /// Word-reconstruction settings used when extracting cell text.
    pub text_settings: WordsExtractSettings,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            vertical_strategy: Strategy::LinesStrict,
            horizontal_strategy: Strategy::LinesStrict,
            snap_x_tolerance: 3.0,
            snap_y_tolerance: 3.0,
            join_x_tolerance: 3.0,
            join_y_tolerance: 3.0,
            intersection_x_tolerance: 3.0,
            intersection_y_tolerance: 3.0,
            edge_min_length: 3.0,
            edge_min_length_prefilter: 1.0,
            min_words_vertical: 3,
            min_words_horizontal: 1,
            include_single_cell: false,
            min_rows: None,
            min_columns: None,
            text_settings: WordsExtractSettings::default(),
        }
    }
}

impl TableSettings {
    /// Validate all numeric settings, failing fast on the first violation
    /// encountered in field declaration order (deterministic error messages).
    pub fn validate(&self) -> Result<(), CoreError> {
        let checks: [(&str, f64); 8] = [
            ("snap_x_tolerance", self.snap_x_tolerance),
            ("snap_y_tolerance", self.snap_y_tolerance),
            ("join_x_tolerance", self.join_x_tolerance),
            ("join_y_tolerance", self.join_y_tolerance),
            ("intersection_x_tolerance", self.intersection_x_tolerance),
            ("intersection_y_tolerance", self.intersection_y_tolerance),
            ("edge_min_length", self.edge_min_length),
            ("edge_min_length_prefilter", self.edge_min_length_prefilter),
        ];
        for (name, value) in checks {
            if value < 0.0 {
                return Err(CoreError::InvalidSettings(format!("{name} must be non-negative, got {value}")));
            }
        }
        if let Some(min_rows) = self.min_rows {
            if min_rows == 0 {
                return Err(CoreError::InvalidSettings("min_rows must be positive when set".into()));
            }
        }
        if let Some(min_columns) = self.min_columns {
            if min_columns == 0 {
                return Err(CoreError::InvalidSettings("min_columns must be positive when set".into()));
            }
        }
        Ok(())
    }
}

/// An intersection of one horizontal and one vertical edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    pub x: f64,
    pub y: f64,
}

/// A table cell, with its text populated only when extraction was requested.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableCell {
    pub bbox: BBox,
    pub text: String,
}

/// One cell-or-gap slot within a row or column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellSlot {
    Cell(TableCell),
    Gap,
}

/// An ordered row or column of cells, with explicit gap markers for
/// positions the table has no cell at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellGroup {
    pub cells: Vec<CellSlot>,
    pub bbox: BBox,
}

/// A detected table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub bbox: BBox,
    pub cells: Vec<TableCell>,
    pub rows: Vec<CellGroup>,
    pub columns: Vec<CellGroup>,
    pub page_index: Option<usize>,
    pub text_extracted: bool,
}

impl Table {
    /// Ratio of cells with non-empty text to total cells; `1.0` for a table
    /// with no cells or when every cell has text. A read-only diagnostic,
    /// not part of the pipeline's own decisions.
    pub fn accuracy(&self) -> f64 {
        if self.cells.is_empty() {
            return 1.0;
        }
        let populated = self.cells.iter().filter(|c| !c.text.is_empty()).count();
        populated as f64 / self.cells.len() as f64
    }
}

/// Per-axis derived and normalized edges, as returned by [`get_edges`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSets {
    pub horizontal: Vec<Edge>,
    pub vertical: Vec<Edge>,
}

fn split_by_orientation(edges: Vec<Edge>) -> (Vec<Edge>, Vec<Edge>) {
    let mut h = Vec::new();
    let mut v = Vec::new();
    for edge in edges {
        match edge.orientation {
            Orientation::Horizontal => h.push(edge),
            Orientation::Vertical => v.push(edge),
        }
    }
    (h, v)
}

/// Snap a single axis's edges: sort by coordinate, merge consecutive runs
/// within tolerance to their mean (a single deterministic left-to-right
/// sweep, per the purity/determinism requirement).
fn snap_axis(mut edges: Vec<Edge>, tolerance: f64) -> Vec<Edge> {
    edges.sort_by(|a, b| a.axis_coord().partial_cmp(&b.axis_coord()).unwrap());
    let mut runs: Vec<Vec<Edge>> = Vec::new();
    for edge in edges {
        let starts_new_run = match runs.last() {
            Some(run) => {
                let mean: f64 = run.iter().map(Edge::axis_coord).sum::<f64>() / run.len() as f64;
                (edge.axis_coord() - mean).abs() > tolerance
            }
            None => true,
        };
        if starts_new_run {
            runs.push(vec![edge]);
        } else {
            runs.last_mut().unwrap().push(edge);
        }
    }
    runs.into_iter()
        .flat_map(|run| {
            let mean: f64 = run.iter().map(Edge::axis_coord).sum::<f64>() / run.len() as f64;
            run.into_iter().map(move |mut edge| {
                match edge.orientation {
                    Orientation::Horizontal => {
                        edge.y0 = mean;
                        edge.y1 = mean;
                    }
                    Orientation::Vertical => {
                        edge.x0 = mean;
                        edge.x1 = mean;
                    }
                }
                edge
            })
        })
        .collect()
}

/// Snap horizontal and vertical edges toward shared boundaries.
pub fn snap_edges(edges: Vec<Edge>, snap_x_tolerance: f64, snap_y_tolerance: f64) -> Vec<Edge> {
    let (h, v) = split_by_orientation(edges);
    let mut result = snap_axis(h, snap_y_tolerance);
    result.extend(snap_axis(v, snap_x_tolerance));
    result
}

/// Merge collinear edges at the same (already-snapped) coordinate whose
/// gap along the edge's own direction is within `tolerance`.
pub fn join_edge_group(mut edges: Vec<Edge>, tolerance: f64) -> Vec<Edge> {
    if edges.is_empty() {
        return edges;
    }
    edges.sort_by(|a, b| a.span().0.partial_cmp(&b.span().0).unwrap());
    let mut merged: Vec<Edge> = Vec::new();
    for edge in edges {
        match merged.last_mut() {
            Some(last) => {
                let (lo, hi) = edge.span();
                let (_, last_hi) = last.span();
                if lo - last_hi <= tolerance {
                    let new_hi = hi.max(last_hi);
                    match last.orientation {
                        Orientation::Horizontal => {
                            last.x0 = last.x0.min(edge.x0);
                            last.x1 = new_hi;
                        }
                        Orientation::Vertical => {
                            last.y0 = last.y0.min(edge.y0);
                            last.y1 = new_hi;
                        }
                    }
                    last.stroke_width = last.stroke_width.max(edge.stroke_width);
                } else {
                    merged.push(edge);
                }
            }
            None => merged.push(edge),
        }
    }
    merged
}

fn join_edges(edges: Vec<Edge>, join_x_tolerance: f64, join_y_tolerance: f64) -> Vec<Edge> {
    let mut by_coord: BTreeMap<(u8, u64), Vec<Edge>> = BTreeMap::new();
    for edge in edges {
        let axis_tag = match edge.orientation {
            Orientation::Horizontal => 0u8,
            Orientation::Vertical => 1u8,
        };
        by_coord.entry((axis_tag, edge.axis_coord().to_bits())).or_default().push(edge);
    }
    let mut result = Vec::new();
    for ((axis_tag, _), group) in by_coord {
        let tolerance = if axis_tag == 0 { join_x_tolerance } else { join_y_tolerance };
        result.extend(join_edge_group(group, tolerance));
    }
    result
}

/// Final length filter: drop edges shorter than `edge_min_length`.
fn filter_min_length(edges: Vec<Edge>, edge_min_length: f64) -> Vec<Edge> {
    edges.into_iter().filter(|e| e.length() >= edge_min_length).collect()
}

fn normalize_edges(edges: Vec<Edge>, settings: &TableSettings) -> Vec<Edge> {
    let snapped = snap_edges(edges, settings.snap_x_tolerance, settings.snap_y_tolerance);
    let joined = join_edges(snapped, settings.join_x_tolerance, settings.join_y_tolerance);
    filter_min_length(joined, settings.edge_min_length)
}

/// `get_edges`: derive and normalize edges straight from drawn primitives,
/// ignoring any `text` strategy (no text-based synthesis).
pub fn get_edges(lines: &[LinePath], rects: &[RectPrim], settings: &TableSettings) -> EdgeSets {
    let include_fill_only =
        settings.vertical_strategy != Strategy::LinesStrict || settings.horizontal_strategy != Strategy::LinesStrict;
    let raw = derive_edges(lines, rects, include_fill_only, settings.edge_min_length_prefilter);
    let normalized = normalize_edges(raw, settings);
    let (horizontal, vertical) = split_by_orientation(normalized);
    EdgeSets { horizontal, vertical }
}

/// Derive the edges actually used for cell enumeration, respecting each
/// axis's own strategy (primitive-derived for `lines`/`lines_strict`,
/// text-synthesized for `text`).
pub fn derive_pipeline_edges(
    lines: &[LinePath],
    rects: &[RectPrim],
    words: &[Word],
    settings: &TableSettings,
) -> EdgeSets {
    let include_fill_only =
        settings.vertical_strategy != Strategy::LinesStrict || settings.horizontal_strategy != Strategy::LinesStrict;
    let primitive = derive_edges(lines, rects, include_fill_only, settings.edge_min_length_prefilter);
    let (mut prim_h, mut prim_v) = split_by_orientation(primitive);
    if settings.horizontal_strategy == Strategy::Text {
        prim_h.clear();
    }
    if settings.vertical_strategy == Strategy::Text {
        prim_v.clear();
    }

    let synthesized = words_to_edges_stream(
        words,
        settings.vertical_strategy == Strategy::Text,
        settings.horizontal_strategy == Strategy::Text,
        settings.min_words_vertical,
        settings.min_words_horizontal,
        settings.snap_x_tolerance,
        settings.snap_y_tolerance,
    );
    let (synth_h, synth_v) = split_by_orientation(synthesized);

    let mut all = Vec::new();
    all.extend(prim_h);
    all.extend(prim_v);
    all.extend(synth_h);
    all.extend(synth_v);

    let normalized = normalize_edges(all, settings);
    let (horizontal, vertical) = split_by_orientation(normalized);
    EdgeSets { horizontal, vertical }
}

/// Build the intersection set between horizontal and vertical edges.
pub fn edges_to_intersections(
    h_edges: &[Edge],
    v_edges: &[Edge],
    intersection_x_tolerance: f64,
    intersection_y_tolerance: f64,
) -> Vec<Intersection> {
    let mut seen: BTreeMap<(u64, u64), Intersection> = BTreeMap::new();
    for h in h_edges {
        let (hx0, hx1) = h.span();
        for v in v_edges {
            let vx = v.axis_coord();
            let (vy0, vy1) = v.span();
            let hy = h.axis_coord();
            if vx >= hx0 - intersection_x_tolerance
                && vx <= hx1 + intersection_x_tolerance
                && hy >= vy0 - intersection_y_tolerance
                && hy <= vy1 + intersection_y_tolerance
            {
                seen.insert((vx.to_bits(), hy.to_bits()), Intersection { x: vx, y: hy });
            }
        }
    }
    seen.into_values().collect()
}

fn unique_sorted(mut values: Vec<f64>, tolerance: f64) -> Vec<f64> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mut result: Vec<f64> = Vec::new();
    for v in values {
        if result.last().is_none_or(|last: &f64| (v - last).abs() > tolerance) {
            result.push(v);
        }
    }
    result
}

fn span_is_covered(edges_at_coord: &[&Edge], needed: (f64, f64), eps: f64) -> bool {
    let mut spans: Vec<(f64, f64)> = edges_at_coord.iter().map(|e| e.span()).collect();
    spans.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    let mut cursor = needed.0;
    for (lo, hi) in spans {
        if lo > cursor + eps {
            break;
        }
        cursor = cursor.max(hi);
        if cursor >= needed.1 - eps {
            return true;
        }
    }
    false
}

/// Enumerate the minimal rectangular cells formed by the edge grid.
pub fn intersections_to_cells(
    intersections: &[Intersection],
    h_edges: &[Edge],
    v_edges: &[Edge],
    intersection_x_tolerance: f64,
    intersection_y_tolerance: f64,
) -> Vec<BBox> {
    let xs = unique_sorted(intersections.iter().map(|i| i.x).collect(), intersection_x_tolerance);
    let ys = unique_sorted(intersections.iter().map(|i| i.y).collect(), intersection_y_tolerance);

    let has_intersection = |x: f64, y: f64| {
        intersections
            .iter()
            .any(|i| (i.x - x).abs() <= intersection_x_tolerance && (i.y - y).abs() <= intersection_y_tolerance)
    };

    let mut cells = Vec::new();
    for j in 0..ys.len().saturating_sub(1) {
        let (y0, y1) = (ys[j], ys[j + 1]);
        for i in 0..xs.len().saturating_sub(1) {
            let (x0, x1) = (xs[i], xs[i + 1]);

            if !(has_intersection(x0, y0)
                && has_intersection(x1, y0)
                && has_intersection(x0, y1)
                && has_intersection(x1, y1))
            {
                continue;
            }

            let at_y = |y: f64| -> Vec<&Edge> {
                h_edges.iter().filter(|e| (e.axis_coord() - y).abs() <= intersection_y_tolerance).collect()
            };
            let at_x = |x: f64| -> Vec<&Edge> {
                v_edges.iter().filter(|e| (e.axis_coord() - x).abs() <= intersection_x_tolerance).collect()
            };

            let top = at_y(y0);
            let bottom = at_y(y1);
            let left = at_x(x0);
            let right = at_x(x1);

            if span_is_covered(&top, (x0, x1), intersection_x_tolerance)
                && span_is_covered(&bottom, (x0, x1), intersection_x_tolerance)
                && span_is_covered(&left, (y0, y1), intersection_y_tolerance)
                && span_is_covered(&right, (y0, y1), intersection_y_tolerance)
            {
                cells.push(BBox::new(x0, y0, x1, y1));
            }
        }
    }
    cells
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn cells_adjacent(a: &BBox, b: &BBox, tol_x: f64, tol_y: f64) -> bool {
    let shares_vertical_border = close(a.x1, b.x0, tol_x) || close(b.x1, a.x0, tol_x);
    if shares_vertical_border && close(a.y0, b.y0, tol_y) && close(a.y1, b.y1, tol_y) {
        return true;
    }
    let shares_horizontal_border = close(a.y1, b.y0, tol_y) || close(b.y1, a.y0, tol_y);
    if shares_horizontal_border && close(a.x0, b.x0, tol_x) && close(a.x1, b.x1, tol_x) {
        return true;
    }
    false
}

fn overlap_ratio(a: (f64, f64), b: (f64, f64)) -> f64 {
    let inter = (a.1.min(b.1) - a.0.max(b.0)).max(0.0);
    let shorter = (a.1 - a.0).min(b.1 - b.0);
    if shorter <= 0.0 {
        0.0
    } else {
        inter / shorter
    }
}

/// Group indices into bands along one axis using >=50% interval overlap
/// against each band's first member, preserving first-seen band order.
fn group_by_overlap(indices: &[usize], interval_of: impl Fn(usize) -> (f64, f64)) -> Vec<Vec<usize>> {
    let mut bands: Vec<(f64, f64, Vec<usize>)> = Vec::new();
    for &idx in indices {
        let interval = interval_of(idx);
        if let Some(band) = bands.iter_mut().find(|(lo, hi, _)| overlap_ratio(interval, (*lo, *hi)) >= 0.5) {
            band.2.push(idx);
        } else {
            bands.push((interval.0, interval.1, vec![idx]));
        }
    }
    bands.into_iter().map(|(_, _, members)| members).collect()
}

/// Assemble cells into tables via connected components, then rows/columns
/// with gap markers. If `words` is provided, also runs text
/// assignment into the result.
pub fn cells_to_tables(
    cell_boxes: &[BBox],
    words: Option<&[Word]>,
    settings: &TableSettings,
    page_index: Option<usize>,
) -> Vec<Table> {
    let n = cell_boxes.len();
    let mut uf = UnionFind::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if cells_adjacent(&cell_boxes[i], &cell_boxes[j], settings.snap_x_tolerance, settings.snap_y_tolerance) {
                uf.union(i, j);
            }
        }
    }

    let mut components: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for i in 0..n {
        let root = uf.find(i);
        components.entry(root).or_default().push(i);
    }

    let mut tables = Vec::new();
    for (_, mut member_indices) in components {
        member_indices.sort_by(|&a, &b| {
            cell_boxes[a].y0.partial_cmp(&cell_boxes[b].y0).unwrap().then(cell_boxes[a].x0.partial_cmp(&cell_boxes[b].x0).unwrap())
        });

        if member_indices.len() == 1 && !settings.include_single_cell {
            continue;
        }

        let row_bands = group_by_overlap(&member_indices, |idx| (cell_boxes[idx].y0, cell_boxes[idx].y1));
        let col_bands = {
            let mut by_x = member_indices.clone();
            by_x.sort_by(|&a, &b| cell_boxes[a].x0.partial_cmp(&cell_boxes[b].x0).unwrap());
            group_by_overlap(&by_x, |idx| (cell_boxes[idx].x0, cell_boxes[idx].x1))
        };

        if let Some(min_rows) = settings.min_rows {
            if row_bands.len() < min_rows {
                continue;
            }
        }
        if let Some(min_columns) = settings.min_columns {
            if col_bands.len() < min_columns {
                continue;
            }
        }

        let make_cell = |idx: usize| TableCell { bbox: cell_boxes[idx], text: String::new() };

        let mut rows = Vec::new();
        for row in &row_bands {
            let row_set: std::collections::HashSet<usize> = row.iter().copied().collect();
            let mut slots = Vec::new();
            let mut bbox: Option<BBox> = None;
            for col in &col_bands {
                let found = col.iter().copied().find(|idx| row_set.contains(idx));
                match found {
                    Some(idx) => {
                        bbox = Some(bbox.map_or(cell_boxes[idx], |b| b.union(&cell_boxes[idx])));
                        slots.push(CellSlot::Cell(make_cell(idx)));
                    }
                    None => slots.push(CellSlot::Gap),
                }
            }
            rows.push(CellGroup { cells: slots, bbox: bbox.unwrap_or(cell_boxes[row[0]]) });
        }

        let mut columns = Vec::new();
        for col in &col_bands {
            let col_set: std::collections::HashSet<usize> = col.iter().copied().collect();
            let mut slots = Vec::new();
            let mut bbox: Option<BBox> = None;
            for row in &row_bands {
                let found = row.iter().copied().find(|idx| col_set.contains(idx));
                match found {
                    Some(idx) => {
                        bbox = Some(bbox.map_or(cell_boxes[idx], |b| b.union(&cell_boxes[idx])));
                        slots.push(CellSlot::Cell(make_cell(idx)));
                    }
                    None => slots.push(CellSlot::Gap),
                }
            }
            columns.push(CellGroup { cells: slots, bbox: bbox.unwrap_or(cell_boxes[col[0]]) });
        }

        let cells: Vec<TableCell> = member_indices.iter().map(|&idx| make_cell(idx)).collect();
        let outer_bbox = member_indices.iter().map(|&idx| cell_boxes[idx]).reduce(|a, b| a.union(&b)).unwrap();

        tables.push(Table {
            bbox: outer_bbox,
            cells,
            rows,
            columns,
            page_index,
            text_extracted: false,
        });
    }

    tables.sort_by(|a, b| a.bbox.y0.partial_cmp(&b.bbox.y0).unwrap().then(a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap()));

    if let Some(words) = words {
        for table in &mut tables {
            extract_text_for_cells(&mut table.cells, words, settings.text_settings.need_strip);
            for row in &mut table.rows {
                assign_text_to_group(row, words, settings.text_settings.need_strip);
            }
            for col in &mut table.columns {
                assign_text_to_group(col, words, settings.text_settings.need_strip);
            }
            table.text_extracted = true;
        }
    }

    tables
}

fn words_in_cell<'a>(bbox: &BBox, words: &'a [Word]) -> Vec<&'a Word> {
    let mut matched: Vec<&Word> = words.iter().filter(|w| bbox.contains_half_open(w.bbox.center())).collect();
    matched.sort_by(|a, b| a.bbox.y0.partial_cmp(&b.bbox.y0).unwrap().then(a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap()));
    matched
}

fn join_words(matched: &[&Word], need_strip: bool) -> String {
    let mut text = matched.iter().map(|w| w.text.as_str()).collect::<Vec<_>>().join(" ");
    if need_strip {
        text = text.trim().to_string();
    }
    text
}

/// Populate cell text by half-open bbox-center containment.
pub fn extract_text_for_cells(cells: &mut [TableCell], words: &[Word], need_strip: bool) {
    for cell in cells.iter_mut() {
        let matched = words_in_cell(&cell.bbox, words);
        cell.text = join_words(&matched, need_strip);
    }
}

fn assign_text_to_group(group: &mut CellGroup, words: &[Word], need_strip: bool) {
    for slot in group.cells.iter_mut() {
        if let CellSlot::Cell(cell) = slot {
            let matched = words_in_cell(&cell.bbox, words);
            cell.text = join_words(&matched, need_strip);
        }
    }
}

/// Orchestrates the full pipeline over a page's already-ingested
/// primitives and words.
pub struct TableFinder {
    lines: Vec<LinePath>,
    rects: Vec<RectPrim>,
    words: Vec<Word>,
    settings: TableSettings,
}

impl TableFinder {
    pub fn new(lines: Vec<LinePath>, rects: Vec<RectPrim>, settings: TableSettings) -> Self {
        Self { lines, rects, words: Vec::new(), settings }
    }

    /// Construct a finder that also has reconstructed words available, for
    /// the `text` strategy and for cell text assignment.
    pub fn new_with_words(lines: Vec<LinePath>, rects: Vec<RectPrim>, words: Vec<Word>, settings: TableSettings) -> Self {
        Self { lines, rects, words, settings }
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    /// Edges as derived for cell enumeration (honors per-axis strategy).
    pub fn edges(&self) -> EdgeSets {
        derive_pipeline_edges(&self.lines, &self.rects, &self.words, &self.settings)
    }

    pub fn find_all_cells_bboxes(&self) -> Vec<BBox> {
        let edge_sets = self.edges();
        let intersections = edges_to_intersections(
            &edge_sets.horizontal,
            &edge_sets.vertical,
            self.settings.intersection_x_tolerance,
            self.settings.intersection_y_tolerance,
        );
        intersections_to_cells(
            &intersections,
            &edge_sets.horizontal,
            &edge_sets.vertical,
            self.settings.intersection_x_tolerance,
            self.settings.intersection_y_tolerance,
        )
    }

    pub fn find_tables(&self, extract_text: bool, page_index: Option<usize>) -> Vec<Table> {
        let cells = self.find_all_cells_bboxes();
        let words = if extract_text { Some(self.words.as_slice()) } else { None };
        cells_to_tables(&cells, words, &self.settings, page_index)
    }
}
