//! Editor configuration options
//!
//! Deserialized from the JS options object at construction. Missing
//! fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

/// Configuration for one editor instance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    /// Rows shown in the table size picker grid
    pub picker_rows: usize,

    /// Columns shown in the table size picker grid
    pub picker_cols: usize,

    /// Smallest table the picker may commit
    pub picker_min_rows: usize,
    pub picker_min_cols: usize,

    /// Minimum committed column width in pixels
    pub min_col_width: f32,

    /// Minimum committed row height in pixels
    pub min_row_height: f32,

    /// Resize watchdog timeout in milliseconds
    pub watchdog_ms: u32,

    /// Orphaned-guide sweep interval in milliseconds
    pub sweep_interval_ms: u32,

    /// CSS class prefix for transient helper elements
    pub class_prefix: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            picker_rows: 10,
            picker_cols: 10,
            picker_min_rows: 1,
            picker_min_cols: 1,
            min_col_width: crate::table::resize::CELL_MIN_WIDTH,
            min_row_height: crate::table::resize::CELL_MIN_HEIGHT,
            watchdog_ms: crate::table::resize::RESIZE_WATCHDOG_MS,
            sweep_interval_ms: crate::table::resize::ORPHAN_SWEEP_INTERVAL_MS,
            class_prefix: "qte".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EditorOptions::default();
        assert_eq!(options.picker_rows, 10);
        assert_eq!(options.picker_cols, 10);
        assert_eq!(options.min_col_width, 40.0);
        assert_eq!(options.min_row_height, 30.0);
        assert_eq!(options.watchdog_ms, 10_000);
        assert_eq!(options.sweep_interval_ms, 2_000);
        assert_eq!(options.class_prefix, "qte");
    }

    #[test]
    fn test_partial_object_fills_defaults() {
        let options: EditorOptions = serde_json::from_str(r#"{"picker_rows": 6}"#).unwrap();
        assert_eq!(options.picker_rows, 6);
        assert_eq!(options.picker_cols, 10);
        assert_eq!(options.class_prefix, "qte");
    }
}
