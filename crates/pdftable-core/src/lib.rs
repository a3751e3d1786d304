//! Backend-independent algorithms for locating tabular structures on
//! text-based PDF pages.
//!
//! This crate never touches a PDF file directly — it operates purely on
//! already-extracted primitives (characters, drawn lines, drawn rects) and
//! has no required external dependencies. A caller supplies those
//! primitives (typically via the `pdftable` crate's `PageSource` trait) and
//! gets back [`table::Table`]s.
//!
//! # Modules
//!
//! - [`geometry`] — [`Point`], [`BBox`], [`Orientation`], [`Color`]
//! - [`text`] — [`Char`]
//! - [`shapes`] — [`LinePath`], [`RectPrim`]
//! - [`words`] — [`Word`], [`WordExtractor`], [`WordsExtractSettings`]
//! - [`edges`] — [`Edge`], [`EdgeSource`], edge derivation and text synthesis
//! - [`table`] — normalization, cell enumeration, table assembly, text assignment
//! - [`error`] — [`CoreError`]

#![deny(missing_docs)]

/// Edge derivation from drawn primitives and from word alignment.
pub mod edges;
/// Error types returned by the pipeline.
pub mod error;
/// Geometric primitives: Point, BBox, Orientation, Color.
pub mod geometry;
/// Drawn primitives: LinePath, RectPrim.
pub mod shapes;
/// Edge normalization, cell enumeration, table assembly, text assignment.
pub mod table;
/// Character data extracted from a page.
pub mod text;
/// Word reconstruction from characters.
pub mod words;

pub use edges::{
    derive_edges, words_to_edges_horizontal, words_to_edges_stream, words_to_edges_vertical, Edge, EdgeSource,
};
pub use error::CoreError;
pub use geometry::{BBox, Color, Orientation, Point};
pub use shapes::{LinePath, RectPrim};
pub use table::{
    cells_to_tables, derive_pipeline_edges, edges_to_intersections, extract_text_for_cells, get_edges,
    intersections_to_cells, join_edge_group, snap_edges, CellGroup, CellSlot, EdgeSets, Intersection, Strategy,
    Table, TableCell, TableFinder, TableSettings,
};
pub use text::Char;
pub use words::{SplitAtPunctuation, Word, WordExtractor, WordsExtractSettings};
