//! Renderers module for the table editor
//!
//! This module contains the layout pass that converts grid state into
//! a pre-positioned display list for the JavaScript host to render.

pub mod display_list;
pub mod table_view;

// Re-export commonly used types
pub use display_list::{RenderCell, TableDisplayList};
pub use table_view::render_table;
