//! Shared helpers for the WASM API surface
//!
//! Serde glue, argument validation, and the logging macros used by every
//! exported table operation live here.

#[cfg(target_arch = "wasm32")]
use serde::de::DeserializeOwned;
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::models::{Axis, ColumnPosition, RowPosition};
use crate::table::menu::MenuCommand;
use crate::table::structure::MAX_TABLE_DIM;

// ============================================================================
// Logging Macros
// ============================================================================
//
// Routed through the `log` facade; console_log forwards to the browser
// console, and native test runs can capture them instead.

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        ::log::debug!("[WASM] {}", format_args!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        ::log::info!("[WASM] {}", format_args!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        ::log::warn!("[WASM] ⚠️ {}", format_args!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        ::log::error!("[WASM] ❌ {}", format_args!($($arg)*))
    };
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript, logging and throwing on failure
#[cfg(target_arch = "wasm32")]
pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| validation_error(format!("{}: {}", context, e)))
}

/// Serialize a value to JavaScript, logging and throwing on failure
#[cfg(target_arch = "wasm32")]
pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| validation_error(format!("{}: {}", context, e)))
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Validate a #rrggbb hex color string
pub fn validate_hex_color(color: &str) -> Result<(), String> {
    if !crate::models::is_valid_hex_color(color) {
        return Err(format!(
            "Invalid color: '{}' (expected #rrggbb hex notation)",
            color
        ));
    }
    Ok(())
}

/// Validate requested table dimensions
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<(), String> {
    if rows == 0 || cols == 0 || rows > MAX_TABLE_DIM || cols > MAX_TABLE_DIM {
        return Err(format!(
            "Invalid table dimensions: {}x{} (must be 1-{} each)",
            rows, cols, MAX_TABLE_DIM
        ));
    }
    Ok(())
}

/// Convert a row position keyword to the enum
pub fn row_position_from_str(position: &str) -> Result<RowPosition, String> {
    match position {
        "above" => Ok(RowPosition::Above),
        "below" => Ok(RowPosition::Below),
        _ => Err(format!(
            "Invalid row position: '{}' (must be 'above' or 'below')",
            position
        )),
    }
}

/// Convert a column position keyword to the enum
pub fn column_position_from_str(position: &str) -> Result<ColumnPosition, String> {
    match position {
        "left" => Ok(ColumnPosition::Left),
        "right" => Ok(ColumnPosition::Right),
        _ => Err(format!(
            "Invalid column position: '{}' (must be 'left' or 'right')",
            position
        )),
    }
}

/// Convert an axis number to the enum (0 = column, 1 = row)
pub fn axis_from_u8(axis: u8) -> Result<Axis, String> {
    match axis {
        0 => Ok(Axis::Column),
        1 => Ok(Axis::Row),
        _ => Err(format!("Invalid axis value: {} (must be 0 or 1)", axis)),
    }
}

/// Convert a menu command number to the enum
pub fn menu_command_from_u8(command: u8) -> Result<MenuCommand, String> {
    MenuCommand::from_u8(command)
        .ok_or_else(|| format!("Invalid menu command value: {}", command))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log a caller-contract violation and build the JsValue to throw
#[cfg(target_arch = "wasm32")]
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    crate::wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}
