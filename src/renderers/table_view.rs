//! Table layout pass
//!
//! Walks a grid and produces a `TableDisplayList` with pixel geometry,
//! CSS classes, and data attributes. Pure function of the grid state;
//! selection and merge styling ride on the cell flags.

use std::collections::HashMap;

use crate::models::{EditorOptions, TableCell, TableGrid, TableId};
use crate::renderers::display_list::{RenderCell, TableDisplayList};

/// Build the display list for one table
pub fn render_table(id: TableId, grid: &TableGrid, options: &EditorOptions) -> TableDisplayList {
    let col_offsets = prefix_sums(&grid.col_widths);
    let row_offsets = prefix_sums(&grid.row_heights);

    let mut cells = Vec::with_capacity(grid.cells.len());
    for cell in &grid.cells {
        cells.push(render_cell(id, grid, cell, &col_offsets, &row_offsets, options));
    }

    TableDisplayList {
        table: id,
        rows: grid.rows,
        cols: grid.cols,
        width: grid.table_width(),
        height: grid.table_height(),
        col_widths: grid.col_widths.clone(),
        row_heights: grid.row_heights.clone(),
        cells,
    }
}

fn render_cell(
    id: TableId,
    grid: &TableGrid,
    cell: &TableCell,
    col_offsets: &[f32],
    row_offsets: &[f32],
    options: &EditorOptions,
) -> RenderCell {
    // Build CSS classes
    let mut classes = vec![format!("{}-cell", options.class_prefix)];
    if cell.is_merged() {
        classes.push("merged".to_string());
    }
    if cell.is_selected() {
        classes.push("selected".to_string());
    }

    // Selection perimeter classes
    if cell.has_edge_top() {
        classes.push("sel-edge-top".to_string());
    }
    if cell.has_edge_right() {
        classes.push("sel-edge-right".to_string());
    }
    if cell.has_edge_bottom() {
        classes.push("sel-edge-bottom".to_string());
    }
    if cell.has_edge_left() {
        classes.push("sel-edge-left".to_string());
    }

    // Build data attributes
    let mut dataset = HashMap::new();
    dataset.insert("tableId".to_string(), id.0.to_string());
    dataset.insert("row".to_string(), cell.row.to_string());
    dataset.insert("col".to_string(), cell.col.to_string());
    dataset.insert("rowSpan".to_string(), cell.row_span.to_string());
    dataset.insert("colSpan".to_string(), cell.col_span.to_string());

    let x = col_offsets.get(cell.col).copied().unwrap_or(0.0);
    let y = row_offsets.get(cell.row).copied().unwrap_or(0.0);
    let w = span_size(&grid.col_widths, cell.col, cell.col_span);
    let h = span_size(&grid.row_heights, cell.row, cell.row_span);

    RenderCell {
        content: cell.content.clone(),
        row: cell.row,
        col: cell.col,
        row_span: cell.row_span,
        col_span: cell.col_span,
        x,
        y,
        w,
        h,
        classes,
        dataset,
        background: cell.background.clone(),
    }
}

/// Offsets of each track edge; offsets[i] is where track i starts
fn prefix_sums(sizes: &[f32]) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut total = 0.0;
    for &size in sizes {
        offsets.push(total);
        total += size;
    }
    offsets
}

fn span_size(sizes: &[f32], start: usize, span: usize) -> f32 {
    sizes
        .iter()
        .skip(start)
        .take(span)
        .sum()
}
