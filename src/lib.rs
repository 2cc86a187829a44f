//! Table Editor WASM Module
//!
//! This is the main WASM module for the rich text editor's table support.
//! It provides grid-based cell selection, structural mutation, interactive
//! resize, and the insertion picker behind a JavaScript-facing API.

pub mod api;
pub mod editor;
pub mod engine;
pub mod models;
pub mod renderers;
pub mod table;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod dom;

// Re-export commonly used types
pub use editor::EditorCore;
pub use models::*;
pub use table::{CellSelection, ResizeController, TablePicker};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Table editor WASM module initialized");
}
