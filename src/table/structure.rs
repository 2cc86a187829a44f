//! Structural table mutations
//!
//! Row/column insertion and deletion, merge and split, and sizing
//! bookkeeping. All renumbering is computed against the pre-mutation
//! index the operation targets, and every operation leaves the grid
//! with unique anchors and full span coverage.

use crate::models::{
    is_valid_hex_color, CellAddress, ColumnPosition, GridRect, RowPosition, TableCell, TableError,
    TableGrid, DEFAULT_COL_WIDTH, DEFAULT_ROW_HEIGHT,
};

/// Upper sanity bound for table dimensions
pub const MAX_TABLE_DIM: usize = 100;

/// Build a fresh grid of unmerged cells
pub fn insert_table(rows: usize, cols: usize) -> Result<TableGrid, TableError> {
    if rows == 0 || cols == 0 || rows > MAX_TABLE_DIM || cols > MAX_TABLE_DIM {
        return Err(TableError::InvalidDimension { rows, cols, max: MAX_TABLE_DIM });
    }
    Ok(TableGrid::new(rows, cols))
}

/// Insert a row above or below the anchor cell's span
///
/// Spans crossing the seam are widened instead of duplicated; every
/// uncovered column in the new row gets a fresh unmerged cell.
pub fn insert_row(
    grid: &mut TableGrid,
    position: RowPosition,
    anchor: CellAddress,
) -> Result<(), TableError> {
    let insert_at = {
        let target = grid
            .occupant_of(anchor.row, anchor.col)
            .ok_or(TableError::CellNotFound { row: anchor.row, col: anchor.col })?;
        match position {
            RowPosition::Above => target.row,
            RowPosition::Below => target.end_row(),
        }
    };

    // Renumber against the pre-mutation seam index
    for i in 0..grid.cells.len() {
        if grid.cells[i].row >= insert_at {
            grid.cells[i].row += 1;
        } else if grid.cells[i].end_row() > insert_at {
            grid.cells[i].row_span += 1;
        }
    }
    grid.rows += 1;
    grid.row_heights.insert(insert_at, DEFAULT_ROW_HEIGHT);

    fill_uncovered_row(grid, insert_at);
    Ok(())
}

/// Insert a column left or right of the anchor cell's span
pub fn insert_column(
    grid: &mut TableGrid,
    position: ColumnPosition,
    anchor: CellAddress,
) -> Result<(), TableError> {
    let insert_at = {
        let target = grid
            .occupant_of(anchor.row, anchor.col)
            .ok_or(TableError::CellNotFound { row: anchor.row, col: anchor.col })?;
        match position {
            ColumnPosition::Left => target.col,
            ColumnPosition::Right => target.end_col(),
        }
    };

    for i in 0..grid.cells.len() {
        if grid.cells[i].col >= insert_at {
            grid.cells[i].col += 1;
        } else if grid.cells[i].end_col() > insert_at {
            grid.cells[i].col_span += 1;
        }
    }
    grid.cols += 1;
    grid.col_widths.insert(insert_at, DEFAULT_COL_WIDTH);

    fill_uncovered_column(grid, insert_at);
    Ok(())
}

/// Delete the anchor's row, refusing on a one-row table
pub fn delete_row(grid: &mut TableGrid, anchor: CellAddress) -> Result<(), TableError> {
    if grid.rows <= 1 {
        return Err(TableError::LastRowOrColumn("row"));
    }
    if anchor.row >= grid.rows || anchor.col >= grid.cols {
        return Err(TableError::CellNotFound { row: anchor.row, col: anchor.col });
    }
    let target = anchor.row;

    let mut i = 0;
    while i < grid.cells.len() {
        let cell = &mut grid.cells[i];
        if cell.row == target && cell.row_span == 1 {
            grid.cells.remove(i);
            continue;
        }
        if cell.row == target {
            // Span starts in the deleted row: re-anchor the remainder
            cell.row_span -= 1;
        } else if cell.row < target && cell.end_row() > target {
            cell.row_span -= 1;
        } else if cell.row > target {
            cell.row -= 1;
        }
        i += 1;
    }
    grid.rows -= 1;
    grid.row_heights.remove(target);
    grid.sort_cells();
    grid.clear_transient_flags();
    Ok(())
}

/// Delete the anchor's column, refusing on a one-column table
pub fn delete_column(grid: &mut TableGrid, anchor: CellAddress) -> Result<(), TableError> {
    if grid.cols <= 1 {
        return Err(TableError::LastRowOrColumn("column"));
    }
    if anchor.row >= grid.rows || anchor.col >= grid.cols {
        return Err(TableError::CellNotFound { row: anchor.row, col: anchor.col });
    }
    let target = anchor.col;

    let mut i = 0;
    while i < grid.cells.len() {
        let cell = &mut grid.cells[i];
        if cell.col == target && cell.col_span == 1 {
            grid.cells.remove(i);
            continue;
        }
        if cell.col == target {
            cell.col_span -= 1;
        } else if cell.col < target && cell.end_col() > target {
            cell.col_span -= 1;
        } else if cell.col > target {
            cell.col -= 1;
        }
        i += 1;
    }
    grid.cols -= 1;
    grid.col_widths.remove(target);
    grid.sort_cells();
    grid.clear_transient_flags();
    Ok(())
}

/// Merge the selected cells into their bounding rectangle
///
/// The rect is closed over any spans that stick out of it, so the
/// result is always a single span-consistent region. The top-left cell
/// in the rect survives and takes the space-joined content of every
/// absorbed cell. Returns the survivor's anchor.
pub fn merge_selected(grid: &mut TableGrid) -> Result<CellAddress, TableError> {
    let selected = grid.selected_indices();
    if selected.len() < 2 {
        return Err(TableError::NoActiveSelection { needed: 2, have: selected.len() });
    }

    let first = &grid.cells[selected[0]];
    let mut rect = GridRect {
        min_row: first.row,
        max_row: first.end_row() - 1,
        min_col: first.col,
        max_col: first.end_col() - 1,
    };
    for &i in &selected[1..] {
        let c = &grid.cells[i];
        rect.expand_to_span(c.row, c.col, c.end_row(), c.end_col());
    }
    // Close over spans that cross the rect boundary
    loop {
        let mut grew = false;
        for c in &grid.cells {
            if rect.intersects_span(c.row, c.col, c.end_row(), c.end_col()) {
                let before = rect;
                rect.expand_to_span(c.row, c.col, c.end_row(), c.end_col());
                if rect != before {
                    grew = true;
                }
            }
        }
        if !grew {
            break;
        }
    }

    // Row-major scan: first cell in the rect survives, contents join in order
    let mut survivor: Option<usize> = None;
    let mut contents: Vec<String> = Vec::new();
    for (i, c) in grid.cells.iter().enumerate() {
        if rect.contains(c.row, c.col) {
            if survivor.is_none() {
                survivor = Some(i);
            }
            if !c.content.is_empty() {
                contents.push(c.content.clone());
            }
        }
    }
    let survivor = match survivor {
        Some(i) => i,
        None => return Err(TableError::NoActiveSelection { needed: 2, have: 0 }),
    };

    {
        let cell = &mut grid.cells[survivor];
        cell.row = rect.min_row;
        cell.col = rect.min_col;
        cell.row_span = rect.row_count();
        cell.col_span = rect.col_count();
        cell.content = contents.join(" ");
    }

    let mut index = 0;
    grid.cells.retain(|c| {
        let keep = index == survivor || !rect.contains(c.row, c.col);
        index += 1;
        keep
    });
    grid.sort_cells();
    grid.clear_transient_flags();
    Ok(CellAddress::new(rect.min_row, rect.min_col))
}

/// Split every selected merged cell back into 1x1 cells
///
/// Synthesized cells are inserted in row-major anchor order. Returns
/// the number of cells created.
pub fn split_selected(grid: &mut TableGrid) -> Result<usize, TableError> {
    let selected = grid.selected_indices();
    if selected.is_empty() {
        return Err(TableError::NoActiveSelection { needed: 1, have: 0 });
    }

    let mut new_cells = Vec::new();
    for &i in &selected {
        let cell = &mut grid.cells[i];
        if !cell.is_merged() {
            continue;
        }
        let (row, col, end_row, end_col) = (cell.row, cell.col, cell.end_row(), cell.end_col());
        cell.row_span = 1;
        cell.col_span = 1;
        for r in row..end_row {
            for c in col..end_col {
                if r == row && c == col {
                    continue;
                }
                new_cells.push(TableCell::new(r, c));
            }
        }
    }

    let created = new_cells.len();
    for cell in new_cells {
        grid.insert_sorted(cell);
    }
    Ok(created)
}

/// Apply a background color to every selected cell
pub fn set_selected_background(grid: &mut TableGrid, color: &str) -> Result<usize, TableError> {
    if !is_valid_hex_color(color) {
        return Err(TableError::InvalidColor(color.to_string()));
    }
    let selected = grid.selected_indices();
    if selected.is_empty() {
        return Err(TableError::NoActiveSelection { needed: 1, have: 0 });
    }
    for &i in &selected {
        grid.cells[i].background = Some(color.to_string());
    }
    Ok(selected.len())
}

/// Sync one cell's plain-text content mirror
pub fn set_cell_content(
    grid: &mut TableGrid,
    address: CellAddress,
    text: &str,
) -> Result<(), TableError> {
    let index = grid
        .occupant_index_of(address.row, address.col)
        .ok_or(TableError::CellNotFound { row: address.row, col: address.col })?;
    grid.cells[index].content = text.to_string();
    Ok(())
}

/// Commit a column width into the sizing vector
pub fn set_column_width(grid: &mut TableGrid, col: usize, width: f32) -> Result<(), TableError> {
    if col >= grid.cols {
        return Err(TableError::CellNotFound { row: 0, col });
    }
    grid.col_widths[col] = width;
    Ok(())
}

/// Commit a row height into the sizing vector
pub fn set_row_height(grid: &mut TableGrid, row: usize, height: f32) -> Result<(), TableError> {
    if row >= grid.rows {
        return Err(TableError::CellNotFound { row, col: 0 });
    }
    grid.row_heights[row] = height;
    Ok(())
}

/// Create unmerged cells for every uncovered column of a row
fn fill_uncovered_row(grid: &mut TableGrid, row: usize) {
    let mut new_cells = Vec::new();
    for col in 0..grid.cols {
        if grid.occupant_of(row, col).is_none() {
            new_cells.push(TableCell::new(row, col));
        }
    }
    for cell in new_cells {
        grid.insert_sorted(cell);
    }
}

/// Create unmerged cells for every uncovered row of a column
fn fill_uncovered_column(grid: &mut TableGrid, col: usize) {
    let mut new_cells = Vec::new();
    for row in 0..grid.rows {
        if grid.occupant_of(row, col).is_none() {
            new_cells.push(TableCell::new(row, col));
        }
    }
    for cell in new_cells {
        grid.insert_sorted(cell);
    }
}
