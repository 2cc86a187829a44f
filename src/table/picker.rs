//! Table size picker
//!
//! Hover-preview grid for choosing an N x M table. Commits below the
//! configured minimum are rejected and leave the picker open.

use serde::{Deserialize, Serialize};

use crate::models::EditorOptions;

/// Preview rectangle and readout for the hovered size
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PickerPreview {
    pub rows: usize,
    pub cols: usize,
    pub label: String,
}

impl PickerPreview {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            label: format!("{} × {}", rows, cols),
        }
    }
}

/// Open picker popup state
#[derive(Clone, Debug, PartialEq)]
pub struct TablePicker {
    max_rows: usize,
    max_cols: usize,
    min_rows: usize,
    min_cols: usize,
    hovered: Option<(usize, usize)>,
}

impl TablePicker {
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            max_rows: options.picker_rows,
            max_cols: options.picker_cols,
            min_rows: options.picker_min_rows,
            min_cols: options.picker_min_cols,
            hovered: None,
        }
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    /// Update the hover position (zero-based grid cell) and return the
    /// preview rectangle anchored at the top-left.
    pub fn hover(&mut self, row: usize, col: usize) -> PickerPreview {
        let row = row.min(self.max_rows.saturating_sub(1));
        let col = col.min(self.max_cols.saturating_sub(1));
        self.hovered = Some((row, col));
        PickerPreview::new(row + 1, col + 1)
    }

    /// Current preview, if the pointer has entered the grid
    pub fn preview(&self) -> Option<PickerPreview> {
        self.hovered.map(|(row, col)| PickerPreview::new(row + 1, col + 1))
    }

    /// Commit the hovered cell as a (rows, cols) pair
    ///
    /// Returns None when the size is below the configured minimum; the
    /// picker stays open in that case.
    pub fn commit(&mut self, row: usize, col: usize) -> Option<(usize, usize)> {
        let rows = row + 1;
        let cols = col + 1;
        if rows < self.min_rows || cols < self.min_cols {
            return None;
        }
        if rows > self.max_rows || cols > self.max_cols {
            return None;
        }
        Some((rows, cols))
    }
}
