//! Browser DOM integration
//!
//! Only compiled for wasm32; native builds and tests drive the editor
//! through test doubles instead.

pub mod gesture;

pub use gesture::{DomGestureHost, DragCallbacks};
