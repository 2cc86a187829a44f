//! Rectangular cell selection
//!
//! Tracks the selected region of one table as a pair of anchor
//! addresses and recomputes the full selected set from scratch on every
//! change. Edge flags mark which sides of each selected cell lie on the
//! selection perimeter so the renderer can draw an outline.

use serde::{Deserialize, Serialize};

use crate::models::{
    CellAddress, GridRect, TableError, TableGrid, TableId, FLAG_EDGE_BOTTOM, FLAG_EDGE_LEFT,
    FLAG_EDGE_RIGHT, FLAG_EDGE_TOP,
};

/// Selection state for a rectangular region of cells
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CellSelection {
    /// Table the selection lives in
    pub table: Option<TableId>,

    /// Anchor the drag started from
    pub start: Option<CellAddress>,

    /// Anchor under the pointer now
    pub end: Option<CellAddress>,

    /// Whether a selection is active
    pub active: bool,
}

/// Serializable snapshot of the selection for the JS host
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SelectionSnapshot {
    pub active: bool,
    pub table: Option<TableId>,
    pub start: Option<CellAddress>,
    pub end: Option<CellAddress>,
    pub cell_count: usize,
}

impl CellSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounding rect of the current selection, drag direction independent
    pub fn rect(&self) -> Option<GridRect> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(GridRect::from_corners(start, end)),
            _ => None,
        }
    }

    /// Start a new selection at the cell covering `address`
    ///
    /// A click on a spanned-over position selects the span's anchor.
    pub fn begin(
        &mut self,
        table: TableId,
        grid: &mut TableGrid,
        address: CellAddress,
    ) -> Result<(), TableError> {
        let anchor = resolve_anchor(grid, address)?;
        self.table = Some(table);
        self.start = Some(anchor);
        self.end = Some(anchor);
        self.active = true;
        self.apply(grid);
        Ok(())
    }

    /// Extend the selection to the cell covering `address`
    pub fn extend(&mut self, grid: &mut TableGrid, address: CellAddress) -> Result<(), TableError> {
        if !self.active {
            return Err(TableError::NoActiveSelection { needed: 1, have: 0 });
        }
        let anchor = resolve_anchor(grid, address)?;
        self.end = Some(anchor);
        self.apply(grid);
        Ok(())
    }

    /// Clear the selection and all transient flags in the grid
    pub fn clear(&mut self, grid: &mut TableGrid) {
        grid.clear_transient_flags();
        self.table = None;
        self.start = None;
        self.end = None;
        self.active = false;
    }

    /// Drop the selection state without touching a grid
    ///
    /// Used when the owning table was deleted out from under the selection.
    pub fn reset(&mut self) {
        self.table = None;
        self.start = None;
        self.end = None;
        self.active = false;
    }

    /// Snapshot for the JS host
    pub fn snapshot(&self, grid: &TableGrid) -> SelectionSnapshot {
        SelectionSnapshot {
            active: self.active,
            table: self.table,
            start: self.start,
            end: self.end,
            cell_count: grid.selected_count(),
        }
    }

    /// Recompute selected and edge flags from scratch
    fn apply(&self, grid: &mut TableGrid) {
        grid.clear_transient_flags();
        let rect = match self.rect() {
            Some(rect) => rect,
            None => return,
        };

        let selected: Vec<usize> = grid
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| rect.contains(c.row, c.col))
            .map(|(i, _)| i)
            .collect();
        for &i in &selected {
            grid.cells[i].set_selected(true);
        }

        // Edge pass runs after the selected set is settled. A side is a
        // perimeter edge when any position beyond it lacks a selected
        // occupant (span-aware).
        let mut edges: Vec<(usize, u8)> = Vec::with_capacity(selected.len());
        for &i in &selected {
            let cell = &grid.cells[i];
            let mut flags = 0u8;

            if cell.row == 0 {
                flags |= FLAG_EDGE_TOP;
            } else {
                for col in cell.col..cell.end_col() {
                    if !is_selected_at(grid, cell.row - 1, col) {
                        flags |= FLAG_EDGE_TOP;
                        break;
                    }
                }
            }

            if cell.end_row() >= grid.rows {
                flags |= FLAG_EDGE_BOTTOM;
            } else {
                for col in cell.col..cell.end_col() {
                    if !is_selected_at(grid, cell.end_row(), col) {
                        flags |= FLAG_EDGE_BOTTOM;
                        break;
                    }
                }
            }

            if cell.col == 0 {
                flags |= FLAG_EDGE_LEFT;
            } else {
                for row in cell.row..cell.end_row() {
                    if !is_selected_at(grid, row, cell.col - 1) {
                        flags |= FLAG_EDGE_LEFT;
                        break;
                    }
                }
            }

            if cell.end_col() >= grid.cols {
                flags |= FLAG_EDGE_RIGHT;
            } else {
                for row in cell.row..cell.end_row() {
                    if !is_selected_at(grid, row, cell.end_col()) {
                        flags |= FLAG_EDGE_RIGHT;
                        break;
                    }
                }
            }

            edges.push((i, flags));
        }
        for (i, flags) in edges {
            grid.cells[i].flags |= flags;
        }
    }
}

/// Resolve a grid position to the anchor of the cell covering it
fn resolve_anchor(grid: &TableGrid, address: CellAddress) -> Result<CellAddress, TableError> {
    grid.occupant_of(address.row, address.col)
        .map(|c| CellAddress::new(c.row, c.col))
        .ok_or(TableError::CellNotFound { row: address.row, col: address.col })
}

fn is_selected_at(grid: &TableGrid, row: usize, col: usize) -> bool {
    grid.occupant_of(row, col).map(|c| c.is_selected()).unwrap_or(false)
}
