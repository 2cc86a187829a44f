//! Table editing components
//!
//! Structural mutation, cell selection, drag-resize, the size picker,
//! and the context menu. Each component owns its state and receives
//! the grid it operates on; nothing here touches the DOM directly.

pub mod menu;
pub mod picker;
pub mod resize;
pub mod selection;
pub mod structure;

// Re-export commonly used types
pub use menu::{build_entries, ContextMenuState, MenuCommand, MenuEntry};
pub use picker::{PickerPreview, TablePicker};
pub use resize::{CancelReason, GestureHost, ResizeCommit, ResizeController, ResizeSession};
pub use selection::{CellSelection, SelectionSnapshot};
