//! Locates tabular structures on text-based PDF pages and, optionally,
//! populates their cells with recovered text.
//!
//! This crate is the public-facing half of a two-crate split:
//! [`pdftable_core`] holds the backend-independent table-finding
//! algorithms; this crate adds the [`PageSource`] boundary a production
//! integration binds to a real PDF runtime, plus primitive ingestion and
//! the four public pipeline entry points.
//!
//! Binding to an actual PDF parser/renderer, document lifecycle
//! (open/password/page-iteration/release), and export formatting
//! (CSV/Markdown/HTML) are all outside this crate's scope — they're the
//! host integration's concern.
//!
//! # Quick Start
//!
//! ```
//! use pdftable::{AxisConvention, Page};
//! use pdftable_core::{LinePath, TableSettings};
//!
//! let lines = vec![
//!     LinePath::straight_segment(0.0, 0.0, 100.0, 0.0, 1.0),
//!     LinePath::straight_segment(0.0, 50.0, 100.0, 50.0, 1.0),
//!     LinePath::straight_segment(0.0, 0.0, 0.0, 50.0, 1.0),
//!     LinePath::straight_segment(100.0, 0.0, 100.0, 50.0, 1.0),
//! ];
//! let page = Page::from_primitives(100.0, 50.0, AxisConvention::TopOrigin, vec![], lines, vec![]);
//! let tables = pdftable::find_tables(&page, false, &TableSettings::default()).unwrap();
//! assert_eq!(tables.len(), 1);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Reserved for file-path conveniences a real backend integration would add. |
//! | `serde` | No | Adds `Serialize`/`Deserialize` to `pdftable-core`'s public data types. |
//! | `parallel` | No | Enables [`parallel::find_tables_many`] via rayon. |

#![deny(missing_docs)]

/// Optional cooperative cancellation between pipeline stages.
pub mod cancel;
/// Page-level parallelism convenience (requires the `parallel` feature).
#[cfg(feature = "parallel")]
pub mod parallel;
/// Wiring from a `PageSource` into the core pipeline.
pub mod pipeline;
/// The `PageSource` trait and the crate's own in-memory `Page`.
pub mod source;

pub use cancel::CancelToken;
pub use pipeline::{find_all_cells_bboxes, find_tables, find_tables_cancellable, find_tables_from_cells, get_edges};
pub use source::{AxisConvention, Page, PageState, PageSource};

#[cfg(test)]
mod tests {
    #[test]
    fn crate_compiles() {
        assert_eq!(2 + 2, 4);
    }
}
