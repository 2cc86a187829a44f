//! Table cell data structure
//!
//! A cell is always anchored at the top-left (row, col) of its span.
//! Positions covered by a span greater than 1x1 are not separate live
//! cells; they are implicitly occupied by the anchor.

use serde::{Deserialize, Serialize};

/// Selection flag
pub const FLAG_SELECTED: u8 = 0x01;
/// Selection perimeter edge flags
pub const FLAG_EDGE_TOP: u8 = 0x02;
pub const FLAG_EDGE_RIGHT: u8 = 0x04;
pub const FLAG_EDGE_BOTTOM: u8 = 0x08;
pub const FLAG_EDGE_LEFT: u8 = 0x10;

/// Check that a color string is a #RRGGBB hex value
pub fn is_valid_hex_color(color: &str) -> bool {
    let mut chars = color.chars();
    chars.next() == Some('#') && color.len() == 7 && chars.all(|c| c.is_ascii_hexdigit())
}

/// One live cell of a table grid
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TableCell {
    /// Row index of the anchor (0-based)
    pub row: usize,

    /// Column index of the anchor (0-based)
    pub col: usize,

    /// Number of rows covered by this cell (>= 1)
    pub row_span: usize,

    /// Number of columns covered by this cell (>= 1)
    pub col_span: usize,

    /// Plain-text mirror of the engine-owned cell content
    pub content: String,

    /// Background color as a #RRGGBB hex string
    pub background: Option<String>,

    /// Bit flags for transient UI state (selection, perimeter edges)
    #[serde(skip)]
    pub flags: u8,
}

impl TableCell {
    /// Create a new unmerged, empty cell anchored at (row, col)
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
            content: String::new(),
            background: None,
            flags: 0,
        }
    }

    /// Exclusive end row of this cell's span
    pub fn end_row(&self) -> usize {
        self.row + self.row_span
    }

    /// Exclusive end column of this cell's span
    pub fn end_col(&self) -> usize {
        self.col + self.col_span
    }

    /// Check if this cell's span covers the given position
    pub fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.end_row() && col >= self.col && col < self.end_col()
    }

    /// Check if this cell spans more than one grid position
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }

    /// Check if this cell is currently selected
    pub fn is_selected(&self) -> bool {
        self.flags & FLAG_SELECTED != 0
    }

    /// Set selection flag
    pub fn set_selected(&mut self, selected: bool) {
        if selected {
            self.flags |= FLAG_SELECTED;
        } else {
            self.flags &= !FLAG_SELECTED;
        }
    }

    /// Check if this cell's top side lies on the selection perimeter
    pub fn has_edge_top(&self) -> bool {
        self.flags & FLAG_EDGE_TOP != 0
    }

    /// Check if this cell's right side lies on the selection perimeter
    pub fn has_edge_right(&self) -> bool {
        self.flags & FLAG_EDGE_RIGHT != 0
    }

    /// Check if this cell's bottom side lies on the selection perimeter
    pub fn has_edge_bottom(&self) -> bool {
        self.flags & FLAG_EDGE_BOTTOM != 0
    }

    /// Check if this cell's left side lies on the selection perimeter
    pub fn has_edge_left(&self) -> bool {
        self.flags & FLAG_EDGE_LEFT != 0
    }

    /// Set a perimeter edge flag
    pub fn set_edge(&mut self, flag: u8, on: bool) {
        if on {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }

    /// Clear selection and all edge flags
    pub fn clear_transient_flags(&mut self) {
        self.flags = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_unmerged() {
        let cell = TableCell::new(2, 3);
        assert_eq!(cell.row, 2);
        assert_eq!(cell.col, 3);
        assert_eq!(cell.row_span, 1);
        assert_eq!(cell.col_span, 1);
        assert!(!cell.is_merged());
        assert_eq!(cell.flags, 0);
    }

    #[test]
    fn test_span_coverage() {
        let mut cell = TableCell::new(1, 1);
        cell.row_span = 2;
        cell.col_span = 3;
        assert!(cell.covers(1, 1));
        assert!(cell.covers(2, 3)); // Bottom-right covered position
        assert!(!cell.covers(3, 1)); // end_row is exclusive
        assert!(!cell.covers(1, 4));
        assert!(!cell.covers(0, 1));
    }

    #[test]
    fn test_selection_flag_roundtrip() {
        let mut cell = TableCell::new(0, 0);
        cell.set_selected(true);
        assert!(cell.is_selected());
        cell.set_selected(false);
        assert!(!cell.is_selected());
    }

    #[test]
    fn test_edge_flags_independent() {
        let mut cell = TableCell::new(0, 0);
        cell.set_edge(FLAG_EDGE_TOP, true);
        cell.set_edge(FLAG_EDGE_LEFT, true);
        assert!(cell.has_edge_top());
        assert!(cell.has_edge_left());
        assert!(!cell.has_edge_right());
        assert!(!cell.has_edge_bottom());

        cell.clear_transient_flags();
        assert!(!cell.has_edge_top());
        assert!(!cell.has_edge_left());
    }

    #[test]
    fn test_flags_not_serialized() {
        let mut cell = TableCell::new(0, 0);
        cell.set_selected(true);
        let json = serde_json::to_string(&cell).unwrap();
        assert!(!json.contains("flags"));
        let back: TableCell = serde_json::from_str(&json).unwrap();
        assert!(!back.is_selected());
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(is_valid_hex_color("#ff0000"));
        assert!(is_valid_hex_color("#AbCdEf"));
        assert!(!is_valid_hex_color("ff0000"));
        assert!(!is_valid_hex_color("#ff000"));
        assert!(!is_valid_hex_color("#ff00000"));
        assert!(!is_valid_hex_color("#gg0000"));
        assert!(!is_valid_hex_color("red"));
        assert!(!is_valid_hex_color(""));
    }
}
