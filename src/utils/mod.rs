//! Utility modules for the table editor
//!
//! This module contains utility functions and helpers for
//! various aspects of the editor.

pub mod perf;

// Re-export commonly used types
pub use perf::*;
