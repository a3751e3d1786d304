//! Public entry points that wire a [`PageSource`] into the `pdftable-core`
//! pipeline: state/settings validation, word reconstruction, and
//! dispatch into the core's edge, cell, and table stages.

use pdftable_core::{
    derive_pipeline_edges, edges_to_intersections, intersections_to_cells, BBox, Char, CoreError, EdgeSets, LinePath,
    RectPrim, Strategy, Table, TableSettings, Word, WordExtractor,
};

use crate::cancel::CancelToken;
use crate::source::PageSource;

fn collect_primitives(page: &dyn PageSource) -> (Vec<Char>, Vec<LinePath>, Vec<RectPrim>) {
    (page.chars().collect(), page.lines().collect(), page.rects().collect())
}

/// Reconstruct words only when at least one axis uses the `text`
/// strategy, or when the caller asked to extract text (text assignment
/// needs words regardless of strategy). Avoids paying for word reconstruction on a
/// bordered table that never needs it.
fn words_for(chars: &[Char], settings: &TableSettings, need_words: bool) -> Vec<Word> {
    if need_words {
        WordExtractor::extract(chars, &settings.text_settings)
    } else {
        Vec::new()
    }
}

fn uses_text_strategy(settings: &TableSettings) -> bool {
    settings.vertical_strategy == Strategy::Text || settings.horizontal_strategy == Strategy::Text
}

/// `get_edges`: derive and normalize edges straight from drawn primitives,
/// ignoring any `text` strategy.
pub fn get_edges(page: &dyn PageSource, settings: &TableSettings) -> Result<EdgeSets, CoreError> {
    settings.validate()?;
    if !page.is_valid() {
        return Err(CoreError::InvalidPageState);
    }
    let lines: Vec<LinePath> = page.lines().collect();
    let rects: Vec<RectPrim> = page.rects().collect();
    Ok(pdftable_core::get_edges(&lines, &rects, settings))
}

/// `find_all_cells_bboxes`: run the full cell-enumeration pipeline.
pub fn find_all_cells_bboxes(page: &dyn PageSource, settings: &TableSettings) -> Result<Vec<BBox>, CoreError> {
    settings.validate()?;
    if !page.is_valid() {
        return Err(CoreError::InvalidPageState);
    }
    let (chars, lines, rects) = collect_primitives(page);
    let words = words_for(&chars, settings, uses_text_strategy(settings));
    let edges = derive_pipeline_edges(&lines, &rects, &words, settings);
    let intersections = edges_to_intersections(
        &edges.horizontal,
        &edges.vertical,
        settings.intersection_x_tolerance,
        settings.intersection_y_tolerance,
    );
    Ok(intersections_to_cells(
        &intersections,
        &edges.horizontal,
        &edges.vertical,
        settings.intersection_x_tolerance,
        settings.intersection_y_tolerance,
    ))
}

/// `find_tables_from_cells`: assemble already-enumerated cells into tables,
/// optionally running word reconstruction and text assignment when
/// `extract_text` is set. Page-level concerns outside the core pipeline
/// (document lifecycle, multi-page indexing) are the caller's
/// responsibility, so `page_index` is always `None` here.
pub fn find_tables_from_cells(
    cells: &[BBox],
    extract_text: bool,
    page: Option<&dyn PageSource>,
    settings: &TableSettings,
) -> Result<Vec<Table>, CoreError> {
    settings.validate()?;
    let words = if extract_text {
        let page = page.ok_or(CoreError::MissingPage)?;
        if !page.is_valid() {
            return Err(CoreError::InvalidPageState);
        }
        let chars: Vec<Char> = page.chars().collect();
        Some(WordExtractor::extract(&chars, &settings.text_settings))
    } else {
        None
    };
    Ok(pdftable_core::cells_to_tables(cells, words.as_deref(), settings, None))
}

/// `find_tables`: the full pipeline, from a page's drawn primitives to
/// assembled [`Table`]s.
pub fn find_tables(page: &dyn PageSource, extract_text: bool, settings: &TableSettings) -> Result<Vec<Table>, CoreError> {
    settings.validate()?;
    if !page.is_valid() {
        return Err(CoreError::InvalidPageState);
    }
    let (chars, lines, rects) = collect_primitives(page);
    let words = words_for(&chars, settings, extract_text || uses_text_strategy(settings));

    let edges = derive_pipeline_edges(&lines, &rects, &words, settings);
    let intersections = edges_to_intersections(
        &edges.horizontal,
        &edges.vertical,
        settings.intersection_x_tolerance,
        settings.intersection_y_tolerance,
    );
    let cells = intersections_to_cells(
        &intersections,
        &edges.horizontal,
        &edges.vertical,
        settings.intersection_x_tolerance,
        settings.intersection_y_tolerance,
    );
    let words_for_assignment = if extract_text { Some(words.as_slice()) } else { None };
    Ok(pdftable_core::cells_to_tables(&cells, words_for_assignment, settings, None))
}

/// `find_tables`, checking `cancel` between each pipeline stage. A token
/// fired after any checkpoint aborts the call with [`CoreError::Cancelled`]
/// and every intermediate built so far is dropped.
pub fn find_tables_cancellable(
    page: &dyn PageSource,
    extract_text: bool,
    settings: &TableSettings,
    cancel: &CancelToken,
) -> Result<Vec<Table>, CoreError> {
    settings.validate()?;
    if !page.is_valid() {
        return Err(CoreError::InvalidPageState);
    }
    cancel.check()?;
    let (chars, lines, rects) = collect_primitives(page);
    cancel.check()?;
    let words = words_for(&chars, settings, extract_text || uses_text_strategy(settings));
    cancel.check()?;

    let edges = derive_pipeline_edges(&lines, &rects, &words, settings);
    cancel.check()?;
    let intersections = edges_to_intersections(
        &edges.horizontal,
        &edges.vertical,
        settings.intersection_x_tolerance,
        settings.intersection_y_tolerance,
    );
    let cells = intersections_to_cells(
        &intersections,
        &edges.horizontal,
        &edges.vertical,
        settings.intersection_x_tolerance,
        settings.intersection_y_tolerance,
    );
    cancel.check()?;
    let words_for_assignment = if extract_text { Some(words.as_slice()) } else { None };
    Ok(pdftable_core::cells_to_tables(&cells, words_for_assignment, settings, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{AxisConvention, Page};

    fn bordered_2x2_page() -> Page {
        let lines = vec![
            LinePath::straight_segment(0.0, 0.0, 100.0, 0.0, 1.0),
            LinePath::straight_segment(0.0, 50.0, 100.0, 50.0, 1.0),
            LinePath::straight_segment(0.0, 100.0, 100.0, 100.0, 1.0),
            LinePath::straight_segment(0.0, 0.0, 0.0, 100.0, 1.0),
            LinePath::straight_segment(50.0, 0.0, 50.0, 100.0, 1.0),
            LinePath::straight_segment(100.0, 0.0, 100.0, 100.0, 1.0),
        ];
        Page::from_primitives(100.0, 100.0, AxisConvention::TopOrigin, vec![], lines, vec![])
    }

    #[test]
    fn find_tables_runs_full_pipeline() {
        let page = bordered_2x2_page();
        let settings = TableSettings::default();
        let tables = find_tables(&page, false, &settings).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].cells.len(), 4);
        assert!(!tables[0].text_extracted);
    }

    #[test]
    fn find_tables_rejects_invalid_settings() {
        let page = bordered_2x2_page();
        let settings = TableSettings { snap_x_tolerance: -1.0, ..TableSettings::default() };
        assert!(matches!(find_tables(&page, false, &settings), Err(CoreError::InvalidSettings(_))));
    }

    #[test]
    fn find_tables_rejects_page_before_extraction() {
        let page = Page::unloaded();
        let settings = TableSettings::default();
        assert!(matches!(find_tables(&page, false, &settings), Err(CoreError::InvalidPageState)));
    }

    #[test]
    fn find_tables_from_cells_requires_page_for_text_extraction() {
        let cells = vec![BBox::new(0.0, 0.0, 50.0, 50.0), BBox::new(50.0, 0.0, 100.0, 50.0)];
        let result = find_tables_from_cells(&cells, true, None, &TableSettings::default());
        assert!(matches!(result, Err(CoreError::MissingPage)));
    }

    #[test]
    fn find_all_cells_bboxes_matches_grid() {
        let page = bordered_2x2_page();
        let cells = find_all_cells_bboxes(&page, &TableSettings::default()).unwrap();
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn get_edges_ignores_text_strategy() {
        let page = Page::from_primitives(
            100.0,
            100.0,
            AxisConvention::TopOrigin,
            vec![],
            vec![LinePath::straight_segment(0.0, 0.0, 100.0, 0.0, 1.0)],
            vec![],
        );
        let settings = TableSettings { vertical_strategy: Strategy::Text, ..TableSettings::default() };
        let edges = get_edges(&page, &settings).unwrap();
        assert_eq!(edges.horizontal.len(), 1);
        assert!(edges.vertical.is_empty());
    }

    #[test]
    fn find_tables_cancellable_aborts_when_triggered() {
        let page = bordered_2x2_page();
        let settings = TableSettings::default();
        let cancel = CancelToken::new();
        cancel.cancel();
        assert!(matches!(find_tables_cancellable(&page, false, &settings, &cancel), Err(CoreError::Cancelled)));
    }

    #[test]
    fn find_tables_extracts_text_when_requested() {
        let lines = vec![
            LinePath::straight_segment(0.0, 0.0, 100.0, 0.0, 1.0),
            LinePath::straight_segment(0.0, 50.0, 100.0, 50.0, 1.0),
            LinePath::straight_segment(0.0, 0.0, 0.0, 50.0, 1.0),
            LinePath::straight_segment(100.0, 0.0, 100.0, 50.0, 1.0),
        ];
        let chars = vec![Char {
            text: Some('A'),
            bbox: BBox::new(10.0, 10.0, 20.0, 22.0),
            rotation: 0.0,
            upright: true,
            fontname: "F".into(),
            size: 12.0,
        }];
        let page = Page::from_primitives(100.0, 50.0, AxisConvention::TopOrigin, chars, lines, vec![]);
        let tables = find_tables(&page, true, &TableSettings::default()).unwrap();
        assert_eq!(tables.len(), 1);
        assert!(tables[0].text_extracted);
        assert_eq!(tables[0].cells[0].text, "A");
    }
}
