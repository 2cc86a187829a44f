//! Table Editor WASM API
//!
//! This module provides the JavaScript-facing API for the table editor.
//! It includes shared utilities for serialization, validation, error
//! handling, and logging, plus the exported `TableEditor` struct.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `types`: Result structs returned across the boundary
//! - `editor`: The exported `TableEditor` instance (wasm32 only)

pub mod helpers;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod editor;

pub use types::{EditOutcome, ResizeResult};

#[cfg(target_arch = "wasm32")]
pub use editor::TableEditor;
