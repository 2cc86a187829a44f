//! Models module for the table editor
//!
//! This module contains the data model for the grid-based table
//! architecture: cells, grids, addressing, and configuration.

pub mod cell;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod options;

// Re-export commonly used types
pub use cell::*;
pub use errors::*;
pub use geometry::*;
pub use grid::*;
pub use options::EditorOptions;
