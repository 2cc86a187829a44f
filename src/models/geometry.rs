//! Grid addressing and geometry primitives
//!
//! Tables are addressed by zero-based (row, col) anchors. Rectangular
//! regions are normalized so callers never depend on drag direction.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

/// Identifier for a table registered with an editor instance
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TableId(pub u32);

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based (row, col) position of a cell anchor
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: usize,
    pub col: usize,
}

impl CellAddress {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Inclusive rectangular region of grid positions
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridRect {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl GridRect {
    /// Build a normalized rect from two corner addresses in any order
    pub fn from_corners(a: CellAddress, b: CellAddress) -> Self {
        Self {
            min_row: a.row.min(b.row),
            max_row: a.row.max(b.row),
            min_col: a.col.min(b.col),
            max_col: a.col.max(b.col),
        }
    }

    /// Single-position rect
    pub fn from_address(addr: CellAddress) -> Self {
        Self::from_corners(addr, addr)
    }

    /// Check whether a position lies inside the rect
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }

    /// Grow the rect to cover a span given by its anchor and exclusive ends
    pub fn expand_to_span(&mut self, row: usize, col: usize, end_row: usize, end_col: usize) {
        self.min_row = self.min_row.min(row);
        self.min_col = self.min_col.min(col);
        self.max_row = self.max_row.max(end_row.saturating_sub(1));
        self.max_col = self.max_col.max(end_col.saturating_sub(1));
    }

    /// Check whether a span overlaps this rect (anchor + exclusive ends)
    pub fn intersects_span(&self, row: usize, col: usize, end_row: usize, end_col: usize) -> bool {
        row <= self.max_row && end_row > self.min_row && col <= self.max_col && end_col > self.min_col
    }

    /// Number of rows covered
    pub fn row_count(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// Number of columns covered
    pub fn col_count(&self) -> usize {
        self.max_col - self.min_col + 1
    }
}

/// Axis a resize gesture operates on
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Axis {
    Column = 0,
    Row = 1,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Column => "column",
            Axis::Row => "row",
        }
    }
}

/// Side of the anchor row a new row is inserted on
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowPosition {
    Above,
    Below,
}

/// Side of the anchor column a new column is inserted on
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnPosition {
    Left,
    Right,
}
