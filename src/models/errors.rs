//! Error types for table editing operations
//!
//! Structural edits never throw across the JS boundary; the API layer maps
//! these errors to no-ops with a logged warning.

use thiserror::Error;

/// Errors produced by table structure and interaction operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Requested table dimensions are outside the accepted range
    #[error("invalid table dimension {rows}x{cols} (must be between 1x1 and {max}x{max})")]
    InvalidDimension { rows: usize, cols: usize, max: usize },

    /// An operation needed more selected cells than were available
    #[error("no active cell selection (need at least {needed}, have {have})")]
    NoActiveSelection { needed: usize, have: usize },

    /// Deleting would remove the table's only row or column
    #[error("cannot delete the last {0} of a table")]
    LastRowOrColumn(&'static str),

    /// A transient gesture resource outlived its owning session
    #[error("orphaned {0} left behind by an interrupted gesture")]
    OrphanedResource(&'static str),

    /// No table registered under the given id
    #[error("unknown table id {0}")]
    UnknownTable(u32),

    /// No cell occupies the given grid position
    #[error("no cell at row {row}, col {col}")]
    CellNotFound { row: usize, col: usize },

    /// Background color string is not a #RRGGBB value
    #[error("invalid color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),

    /// A grid invariant check failed
    #[error(transparent)]
    Invariant(#[from] ValidationError),
}

/// Errors that can occur during grid invariant validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Cell anchor lies outside the grid bounds
    #[error("cell anchor ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    AnchorOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },

    /// A cell's span extends past the grid edge
    #[error("span of cell at ({row}, {col}) extends past the grid edge")]
    SpanOutOfBounds { row: usize, col: usize },

    /// Two cells claim the same grid position
    #[error("overlapping spans at position ({row}, {col})")]
    OverlappingSpans { row: usize, col: usize },

    /// A grid position is covered by no cell
    #[error("no cell covers position ({row}, {col})")]
    CoverageGap { row: usize, col: usize },

    /// A cell has a zero row or column span
    #[error("zero span on cell at ({row}, {col})")]
    ZeroSpan { row: usize, col: usize },

    /// Cell anchors are not in row-major order
    #[error("cells out of row-major order at index {index}")]
    UnsortedCells { index: usize },

    /// Sizing vectors do not match the grid dimensions
    #[error("sizing mismatch: {widths} widths / {heights} heights for {cols}x{rows} grid")]
    SizingMismatch { widths: usize, heights: usize, cols: usize, rows: usize },
}
