//! Page-level parallelism: `find_tables` is pure, CPU-bound geometry
//! with no shared mutable state, so running it across many pages
//! concurrently is safe as long as each call sees its own `PageSource`.
//! This module is a thin `rayon` convenience over that guarantee — it adds
//! no pipeline-internal parallelism, since the stages are memory-bound
//! enough that splitting within one page isn't worth the overhead.

use rayon::prelude::*;

use pdftable_core::{CoreError, Table, TableSettings};

use crate::pipeline;
use crate::source::PageSource;

/// Run [`pipeline::find_tables`] over every page concurrently, preserving
/// input order in the result vector.
pub fn find_tables_many<P: PageSource + Sync>(
    pages: &[P],
    extract_text: bool,
    settings: &TableSettings,
) -> Vec<Result<Vec<Table>, CoreError>> {
    pages.par_iter().map(|page| pipeline::find_tables(page, extract_text, settings)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{AxisConvention, Page};
    use pdftable_core::LinePath;

    fn bordered_page() -> Page {
        let lines = vec![
            LinePath::straight_segment(0.0, 0.0, 100.0, 0.0, 1.0),
            LinePath::straight_segment(0.0, 50.0, 100.0, 50.0, 1.0),
            LinePath::straight_segment(0.0, 0.0, 0.0, 50.0, 1.0),
            LinePath::straight_segment(100.0, 0.0, 100.0, 50.0, 1.0),
        ];
        Page::from_primitives(100.0, 50.0, AxisConvention::TopOrigin, vec![], lines, vec![])
    }

    #[test]
    fn find_tables_many_preserves_order() {
        let pages = vec![bordered_page(), bordered_page(), bordered_page()];
        let results = find_tables_many(&pages, false, &TableSettings::default());
        assert_eq!(results.len(), 3);
        for result in results {
            assert_eq!(result.unwrap().len(), 1);
        }
    }
}
