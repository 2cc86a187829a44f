//! Table grid container
//!
//! The grid owns all cells of one table, stored row-major by anchor.
//! Column widths and row heights are bookkept here so resize commits
//! and structural edits stay in one place.

use serde::{Deserialize, Serialize};

use super::cell::TableCell;
use super::errors::ValidationError;
use super::geometry::CellAddress;

/// Width assigned to newly created columns, in pixels
pub const DEFAULT_COL_WIDTH: f32 = 100.0;
/// Height assigned to newly created rows, in pixels
pub const DEFAULT_ROW_HEIGHT: f32 = 40.0;

/// Rectangular grid of cells with span-aware occupancy
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TableGrid {
    /// Number of logical rows
    pub rows: usize,

    /// Number of logical columns
    pub cols: usize,

    /// Live cells, sorted row-major by anchor (row, col)
    pub cells: Vec<TableCell>,

    /// Per-column widths in pixels, length == cols
    pub col_widths: Vec<f32>,

    /// Per-row heights in pixels, length == rows
    pub row_heights: Vec<f32>,
}

impl TableGrid {
    /// Create a grid of unmerged, empty cells
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(TableCell::new(row, col));
            }
        }
        Self {
            rows,
            cols,
            cells,
            col_widths: vec![DEFAULT_COL_WIDTH; cols],
            row_heights: vec![DEFAULT_ROW_HEIGHT; rows],
        }
    }

    /// Number of live cells (merged regions count once)
    pub fn live_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Find the cell anchored exactly at (row, col)
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    /// Find the cell anchored exactly at (row, col), mutable
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.cells.iter_mut().find(|c| c.row == row && c.col == col)
    }

    /// Find the cell whose span covers (row, col)
    pub fn occupant_of(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.cells.iter().find(|c| c.covers(row, col))
    }

    /// Index into `cells` of the span covering (row, col)
    pub fn occupant_index_of(&self, row: usize, col: usize) -> Option<usize> {
        self.cells.iter().position(|c| c.covers(row, col))
    }

    /// Check whether (row, col) is covered by a span anchored elsewhere
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        self.occupant_of(row, col)
            .map(|c| c.row != row || c.col != col)
            .unwrap_or(false)
    }

    /// Insert a cell keeping row-major anchor order
    pub fn insert_sorted(&mut self, cell: TableCell) {
        let key = CellAddress::new(cell.row, cell.col);
        let pos = self
            .cells
            .partition_point(|c| CellAddress::new(c.row, c.col) < key);
        self.cells.insert(pos, cell);
    }

    /// Re-establish row-major anchor order after bulk anchor updates
    pub fn sort_cells(&mut self) {
        self.cells.sort_by_key(|c| (c.row, c.col));
    }

    /// Indices of all cells carrying the selection flag, row-major
    pub fn selected_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cells carrying the selection flag
    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_selected()).count()
    }

    /// Clear selection and edge flags on every cell
    pub fn clear_transient_flags(&mut self) {
        for cell in &mut self.cells {
            cell.clear_transient_flags();
        }
    }

    /// Total table width from the column sizing vector
    pub fn table_width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    /// Total table height from the row sizing vector
    pub fn table_height(&self) -> f32 {
        self.row_heights.iter().sum()
    }

    /// Check all grid invariants, returning the first violation found
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.col_widths.len() != self.cols || self.row_heights.len() != self.rows {
            return Err(ValidationError::SizingMismatch {
                widths: self.col_widths.len(),
                heights: self.row_heights.len(),
                cols: self.cols,
                rows: self.rows,
            });
        }

        for (index, cell) in self.cells.iter().enumerate() {
            if cell.row_span == 0 || cell.col_span == 0 {
                return Err(ValidationError::ZeroSpan { row: cell.row, col: cell.col });
            }
            if cell.row >= self.rows || cell.col >= self.cols {
                return Err(ValidationError::AnchorOutOfBounds {
                    row: cell.row,
                    col: cell.col,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            if cell.end_row() > self.rows || cell.end_col() > self.cols {
                return Err(ValidationError::SpanOutOfBounds { row: cell.row, col: cell.col });
            }
            if index > 0 {
                let prev = &self.cells[index - 1];
                if (cell.row, cell.col) <= (prev.row, prev.col) {
                    return Err(ValidationError::UnsortedCells { index });
                }
            }
        }

        // Every position must be covered by exactly one span
        let mut coverage = vec![false; self.rows * self.cols];
        for cell in &self.cells {
            for row in cell.row..cell.end_row() {
                for col in cell.col..cell.end_col() {
                    let slot = &mut coverage[row * self.cols + col];
                    if *slot {
                        return Err(ValidationError::OverlappingSpans { row, col });
                    }
                    *slot = true;
                }
            }
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                if !coverage[row * self.cols + col] {
                    return Err(ValidationError::CoverageGap { row, col });
                }
            }
        }

        Ok(())
    }
}
