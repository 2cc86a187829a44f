//! Shared types for the WASM API
//!
//! This module contains common result types used across multiple API modules.

use crate::models::{Axis, TableId};

/// Result of a structural edit operation
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct EditOutcome {
    pub table: TableId,
    pub rows: usize,
    pub cols: usize,
    /// Cells created or absorbed by the operation, when meaningful
    pub affected: usize,
}

/// Result of finishing a resize drag
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct ResizeResult {
    pub table: TableId,
    pub axis: Axis,
    pub index: usize,
    pub size: f32,
}
