//! Display List for Table Rendering
//!
//! This module defines the output structure returned from the table layout
//! pass to JavaScript. The TableDisplayList contains all pre-calculated
//! positions, dimensions, and classes needed for JavaScript to render DOM
//! elements without any layout calculations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::TableId;

/// Top-level display list for one table
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TableDisplayList {
    /// Which table this was built from
    pub table: TableId,

    /// Grid rows
    pub rows: usize,

    /// Grid columns
    pub cols: usize,

    /// Total width in pixels (sum of column widths)
    pub width: f32,

    /// Total height in pixels (sum of row heights)
    pub height: f32,

    /// Per-column widths, indexed by column
    pub col_widths: Vec<f32>,

    /// Per-row heights, indexed by row
    pub row_heights: Vec<f32>,

    /// All live cells with positions and styles, row-major order
    pub cells: Vec<RenderCell>,
}

/// A single cell with all rendering information
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderCell {
    /// Plain-text content mirror
    pub content: String,

    /// Anchor row
    pub row: usize,

    /// Anchor column
    pub col: usize,

    /// Rows covered
    pub row_span: usize,

    /// Columns covered
    pub col_span: usize,

    /// X position (left edge)
    pub x: f32,

    /// Y position (top edge)
    pub y: f32,

    /// Width (full span)
    pub w: f32,

    /// Height (full span)
    pub h: f32,

    /// CSS class names to apply
    pub classes: Vec<String>,

    /// Data attributes (data-* attributes)
    pub dataset: HashMap<String, String>,

    /// Background color, if one was applied
    pub background: Option<String>,
}
