//! WASM API for the table editor
//!
//! This module provides the JavaScript-facing `TableEditor` struct. One
//! instance per editor; all state lives on the instance. Domain errors
//! from edit operations never throw across the boundary: they are logged
//! and mapped to a no-op return so a stray toolbar click cannot take the
//! host down.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::api::helpers::{
    axis_from_u8, column_position_from_str, menu_command_from_u8, row_position_from_str,
    serialize, validate_dimensions, validate_hex_color, validation_error,
};
use crate::api::types::{EditOutcome, ResizeResult};
use crate::dom::{DomGestureHost, DragCallbacks};
use crate::editor::{ColorPickerProvider, EditorCore};
use crate::engine::js::JsTextEngine;
use crate::models::{EditorOptions, TableId};
use crate::table::resize::CancelReason;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Color picker backed by a synchronous JS callback
///
/// The callback receives the current color (or null) and returns a
/// #rrggbb string, or null when the user dismissed it.
struct JsColorPicker {
    callback: Function,
}

impl ColorPickerProvider for JsColorPicker {
    fn pick_color(&self, current: Option<&str>) -> Option<String> {
        let arg = match current {
            Some(color) => JsValue::from_str(color),
            None => JsValue::NULL,
        };
        match self.callback.call1(&JsValue::NULL, &arg) {
            Ok(value) => {
                let picked = value.as_string()?;
                if validate_hex_color(&picked).is_err() {
                    wasm_warn!("color picker returned invalid color '{}'", picked);
                    return None;
                }
                Some(picked)
            }
            Err(_) => {
                wasm_warn!("color picker callback threw, ignoring");
                None
            }
        }
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// The table editor instance exported to JavaScript
#[wasm_bindgen]
pub struct TableEditor {
    core: Rc<RefCell<EditorCore>>,
    host: Rc<RefCell<DomGestureHost>>,

    // Listener closures handed to the gesture host as Function clones.
    // They must outlive every attach/detach cycle, so they live here.
    drag_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    blur_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
    key_closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    watchdog_closure: Option<Closure<dyn FnMut()>>,
    sweep_closure: Option<Closure<dyn FnMut()>>,
    sweep_interval: Option<i32>,
}

#[wasm_bindgen]
impl TableEditor {
    /// Create an editor bound to a rich-text engine delegate
    ///
    /// # Parameters
    /// - `engine`: JS object implementing the engine methods
    ///   (getSelection, insertEmbed, insertText, deleteText, formatText,
    ///   setSelection, embedIndex)
    /// - `options`: optional configuration object; missing fields use
    ///   the built-in defaults
    #[wasm_bindgen(constructor)]
    pub fn new(engine: JsValue, options: JsValue) -> Result<TableEditor, JsValue> {
        let options: EditorOptions = if options.is_undefined() || options.is_null() {
            EditorOptions::default()
        } else {
            crate::api::helpers::deserialize(options, "Invalid editor options")?
        };

        let delegate: js_sys::Object = engine
            .dyn_into()
            .map_err(|_| validation_error("Engine delegate must be an object"))?;

        let host = DomGestureHost::new(&options.class_prefix)?;
        let sweep_interval_ms = options.sweep_interval_ms;

        let core = Rc::new(RefCell::new(EditorCore::new(
            Box::new(JsTextEngine::new(delegate)),
            options,
        )));
        let host = Rc::new(RefCell::new(host));

        let mut editor = TableEditor {
            core,
            host,
            drag_closures: Vec::new(),
            blur_closure: None,
            key_closure: None,
            watchdog_closure: None,
            sweep_closure: None,
            sweep_interval: None,
        };
        editor.wire_gesture_callbacks();
        editor.start_sweep_interval(sweep_interval_ms);

        wasm_info!("TableEditor created");
        Ok(editor)
    }

    fn wire_gesture_callbacks(&mut self) {
        // Mouse move: track the drag along the session axis
        let move_closure = {
            let core = self.core.clone();
            let host = self.host.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let mut host = host.borrow_mut();
                core.borrow_mut().resize_move_at(
                    &mut *host,
                    event.client_x() as f32,
                    event.client_y() as f32,
                );
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        // Mouse up: clean commit
        let up_closure = {
            let core = self.core.clone();
            let host = self.host.clone();
            Closure::wrap(Box::new(move |_event: MouseEvent| {
                let mut host = host.borrow_mut();
                core.borrow_mut().finish_resize(&mut *host);
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        // Mouse leave: pointer left the document entirely
        let leave_closure = {
            let core = self.core.clone();
            let host = self.host.clone();
            Closure::wrap(Box::new(move |_event: MouseEvent| {
                let mut host = host.borrow_mut();
                core.borrow_mut()
                    .cancel_resize(&mut *host, CancelReason::PointerLost);
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        // Window blur
        let blur_closure = {
            let core = self.core.clone();
            let host = self.host.clone();
            Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let mut host = host.borrow_mut();
                core.borrow_mut()
                    .cancel_resize(&mut *host, CancelReason::WindowBlur);
            }) as Box<dyn FnMut(web_sys::Event)>)
        };

        // Escape during a drag
        let key_closure = {
            let core = self.core.clone();
            let host = self.host.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    let mut host = host.borrow_mut();
                    core.borrow_mut()
                        .cancel_resize(&mut *host, CancelReason::Escape);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };

        // Watchdog timeout
        let watchdog_closure = {
            let core = self.core.clone();
            let host = self.host.clone();
            Closure::wrap(Box::new(move || {
                let mut host = host.borrow_mut();
                core.borrow_mut()
                    .cancel_resize(&mut *host, CancelReason::Watchdog);
            }) as Box<dyn FnMut()>)
        };

        let callbacks = DragCallbacks {
            mouse_move: move_closure.as_ref().unchecked_ref::<Function>().clone(),
            mouse_up: up_closure.as_ref().unchecked_ref::<Function>().clone(),
            mouse_leave: leave_closure.as_ref().unchecked_ref::<Function>().clone(),
            window_blur: blur_closure.as_ref().unchecked_ref::<Function>().clone(),
            key_down: key_closure.as_ref().unchecked_ref::<Function>().clone(),
        };
        let watchdog_fn = watchdog_closure.as_ref().unchecked_ref::<Function>().clone();

        {
            let mut host = self.host.borrow_mut();
            host.set_drag_callbacks(callbacks);
            host.set_watchdog_callback(watchdog_fn);
        }
        self.drag_closures.push(move_closure);
        self.drag_closures.push(up_closure);
        self.drag_closures.push(leave_closure);
        self.blur_closure = Some(blur_closure);
        self.key_closure = Some(key_closure);
        self.watchdog_closure = Some(watchdog_closure);
    }

    fn start_sweep_interval(&mut self, interval_ms: u32) {
        let core = self.core.clone();
        let host = self.host.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut host = host.borrow_mut();
            core.borrow_mut().sweep_orphans(&mut *host);
        }) as Box<dyn FnMut()>);

        if let Some(window) = web_sys::window() {
            match window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms as i32,
            ) {
                Ok(handle) => self.sweep_interval = Some(handle),
                Err(_) => wasm_warn!("could not start orphan sweep interval"),
            }
        }
        self.sweep_closure = Some(closure);
    }

    // ========================================================================
    // Table lifecycle
    // ========================================================================

    /// Create a table and insert its embed at the cursor
    ///
    /// # Returns
    /// EditOutcome object, or null if the dimensions were rejected
    #[wasm_bindgen(js_name = insertTable)]
    pub fn insert_table(&self, rows: usize, cols: usize) -> Result<JsValue, JsValue> {
        wasm_info!("insertTable called: {}x{}", rows, cols);
        if let Err(msg) = validate_dimensions(rows, cols) {
            wasm_warn!("{}", msg);
            return Ok(JsValue::NULL);
        }
        match self.core.borrow_mut().insert_table(rows, cols) {
            Ok(id) => serialize(
                &EditOutcome {
                    table: id,
                    rows,
                    cols,
                    affected: rows * cols,
                },
                "EditOutcome serialization error",
            ),
            Err(e) => {
                wasm_warn!("insertTable rejected: {}", e);
                Ok(JsValue::NULL)
            }
        }
    }

    #[wasm_bindgen(js_name = deleteTable)]
    pub fn delete_table(&self, table_id: u32) -> bool {
        wasm_info!("deleteTable called: table={}", table_id);
        let mut host = self.host.borrow_mut();
        match self
            .core
            .borrow_mut()
            .delete_table(&mut *host, TableId(table_id))
        {
            Ok(()) => true,
            Err(e) => {
                wasm_warn!("deleteTable rejected: {}", e);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = tableCount)]
    pub fn table_count(&self) -> usize {
        self.core.borrow().table_count()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    #[wasm_bindgen(js_name = beginCellSelection)]
    pub fn begin_cell_selection(&self, table_id: u32, row: usize, col: usize) -> bool {
        wasm_log!("beginCellSelection: table={} ({},{})", table_id, row, col);
        match self
            .core
            .borrow_mut()
            .begin_cell_selection(TableId(table_id), row, col)
        {
            Ok(()) => true,
            Err(e) => {
                wasm_warn!("beginCellSelection rejected: {}", e);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = extendCellSelection)]
    pub fn extend_cell_selection(&self, row: usize, col: usize) -> bool {
        match self.core.borrow_mut().extend_cell_selection(row, col) {
            Ok(()) => true,
            Err(e) => {
                wasm_warn!("extendCellSelection rejected: {}", e);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = clearCellSelection)]
    pub fn clear_cell_selection(&self) {
        self.core.borrow_mut().clear_cell_selection();
    }

    /// Current selection snapshot, or null when none is active
    #[wasm_bindgen(js_name = getSelection)]
    pub fn get_selection(&self) -> Result<JsValue, JsValue> {
        match self.core.borrow().selection_snapshot() {
            Some(snapshot) => serialize(&snapshot, "Selection serialization error"),
            None => Ok(JsValue::NULL),
        }
    }

    // ========================================================================
    // Structural operations
    // ========================================================================

    /// Insert a row relative to the selection anchor
    ///
    /// # Parameters
    /// - `position`: "above" or "below"
    #[wasm_bindgen(js_name = insertRow)]
    pub fn insert_row(&self, position: &str) -> Result<bool, JsValue> {
        wasm_info!("insertRow called: position='{}'", position);
        let position = row_position_from_str(position).map_err(validation_error)?;
        let mut host = self.host.borrow_mut();
        match self.core.borrow_mut().insert_row(&mut *host, position) {
            Ok(()) => Ok(true),
            Err(e) => {
                wasm_warn!("insertRow rejected: {}", e);
                Ok(false)
            }
        }
    }

    /// Insert a column relative to the selection anchor
    ///
    /// # Parameters
    /// - `position`: "left" or "right"
    #[wasm_bindgen(js_name = insertColumn)]
    pub fn insert_column(&self, position: &str) -> Result<bool, JsValue> {
        wasm_info!("insertColumn called: position='{}'", position);
        let position = column_position_from_str(position).map_err(validation_error)?;
        let mut host = self.host.borrow_mut();
        match self.core.borrow_mut().insert_column(&mut *host, position) {
            Ok(()) => Ok(true),
            Err(e) => {
                wasm_warn!("insertColumn rejected: {}", e);
                Ok(false)
            }
        }
    }

    #[wasm_bindgen(js_name = deleteRow)]
    pub fn delete_row(&self) -> bool {
        wasm_info!("deleteRow called");
        let mut host = self.host.borrow_mut();
        match self.core.borrow_mut().delete_row(&mut *host) {
            Ok(()) => true,
            Err(e) => {
                wasm_warn!("deleteRow rejected: {}", e);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = deleteColumn)]
    pub fn delete_column(&self) -> bool {
        wasm_info!("deleteColumn called");
        let mut host = self.host.borrow_mut();
        match self.core.borrow_mut().delete_column(&mut *host) {
            Ok(()) => true,
            Err(e) => {
                wasm_warn!("deleteColumn rejected: {}", e);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = mergeSelectedCells)]
    pub fn merge_selected_cells(&self) -> bool {
        wasm_info!("mergeSelectedCells called");
        let mut host = self.host.borrow_mut();
        match self.core.borrow_mut().merge_selected_cells(&mut *host) {
            Ok(anchor) => {
                wasm_log!("  merged into ({},{})", anchor.row, anchor.col);
                true
            }
            Err(e) => {
                wasm_warn!("mergeSelectedCells rejected: {}", e);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = splitSelectedCells)]
    pub fn split_selected_cells(&self) -> bool {
        wasm_info!("splitSelectedCells called");
        let mut host = self.host.borrow_mut();
        match self.core.borrow_mut().split_selected_cells(&mut *host) {
            Ok(created) => {
                wasm_log!("  split created {} cells", created);
                true
            }
            Err(e) => {
                wasm_warn!("splitSelectedCells rejected: {}", e);
                false
            }
        }
    }

    /// Apply a background color to the selected cells
    ///
    /// Invalid colors are rejected with a warning and no mutation.
    #[wasm_bindgen(js_name = setSelectedCellsBackground)]
    pub fn set_selected_cells_background(&self, color: &str) -> bool {
        wasm_info!("setSelectedCellsBackground called: color='{}'", color);
        if let Err(msg) = validate_hex_color(color) {
            wasm_warn!("{}", msg);
            return false;
        }
        match self.core.borrow_mut().set_selected_cells_background(color) {
            Ok(count) => {
                wasm_log!("  painted {} cells", count);
                true
            }
            Err(e) => {
                wasm_warn!("setSelectedCellsBackground rejected: {}", e);
                false
            }
        }
    }

    /// Sync engine-owned cell text into the grid's plain-text mirror
    #[wasm_bindgen(js_name = setCellContent)]
    pub fn set_cell_content(&self, table_id: u32, row: usize, col: usize, text: &str) -> bool {
        match self
            .core
            .borrow_mut()
            .set_cell_content(TableId(table_id), row, col, text)
        {
            Ok(()) => true,
            Err(e) => {
                wasm_warn!("setCellContent rejected: {}", e);
                false
            }
        }
    }

    // ========================================================================
    // Table picker
    // ========================================================================

    #[wasm_bindgen(js_name = openTablePicker)]
    pub fn open_table_picker(&self) {
        wasm_info!("openTablePicker called");
        self.core.borrow_mut().open_table_picker();
    }

    /// Hover feedback while moving over the picker grid
    ///
    /// # Returns
    /// PickerPreview object, or null when no picker is open
    #[wasm_bindgen(js_name = pickerHover)]
    pub fn picker_hover(&self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        match self.core.borrow_mut().picker_hover(row, col) {
            Some(preview) => serialize(&preview, "PickerPreview serialization error"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Commit the hovered size; false when below the configured minimum
    /// (the picker stays open)
    #[wasm_bindgen(js_name = pickerCommit)]
    pub fn picker_commit(&self, row: usize, col: usize) -> bool {
        wasm_info!("pickerCommit called: ({},{})", row, col);
        match self.core.borrow_mut().picker_commit(row, col) {
            Ok(Some(id)) => {
                wasm_info!("  picker committed table {}", id);
                true
            }
            Ok(None) => false,
            Err(e) => {
                wasm_warn!("pickerCommit rejected: {}", e);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = closeTablePicker)]
    pub fn close_table_picker(&self) -> bool {
        self.core.borrow_mut().close_table_picker()
    }

    // ========================================================================
    // Context menu
    // ========================================================================

    /// Open the context menu for a cell
    ///
    /// # Returns
    /// Array of menu entries with computed enabled flags
    #[wasm_bindgen(js_name = openContextMenu)]
    pub fn open_context_menu(
        &self,
        table_id: u32,
        row: usize,
        col: usize,
    ) -> Result<JsValue, JsValue> {
        wasm_info!("openContextMenu called: table={} ({},{})", table_id, row, col);
        match self
            .core
            .borrow_mut()
            .open_context_menu(TableId(table_id), row, col)
        {
            Ok(entries) => serialize(&entries, "Menu serialization error"),
            Err(e) => {
                wasm_warn!("openContextMenu rejected: {}", e);
                Ok(JsValue::NULL)
            }
        }
    }

    /// Run a command from the open menu
    #[wasm_bindgen(js_name = applyMenuCommand)]
    pub fn apply_menu_command(&self, command: u8) -> Result<bool, JsValue> {
        wasm_info!("applyMenuCommand called: command={}", command);
        let command = menu_command_from_u8(command).map_err(validation_error)?;
        let mut host = self.host.borrow_mut();
        match self.core.borrow_mut().apply_menu_command(&mut *host, command) {
            Ok(()) => Ok(true),
            Err(e) => {
                wasm_warn!("applyMenuCommand rejected: {}", e);
                Ok(false)
            }
        }
    }

    #[wasm_bindgen(js_name = closeContextMenu)]
    pub fn close_context_menu(&self) {
        self.core.borrow_mut().close_context_menu();
    }

    /// Install a color picker capability
    ///
    /// The callback is invoked synchronously with the current color (or
    /// null) and returns a #rrggbb string or null.
    #[wasm_bindgen(js_name = registerColorPicker)]
    pub fn register_color_picker(&self, callback: Function) {
        self.core
            .borrow_mut()
            .register_color_picker(Box::new(JsColorPicker { callback }));
    }

    // ========================================================================
    // Resize
    // ========================================================================

    /// Begin a resize drag on a column or row boundary
    ///
    /// # Parameters
    /// - `axis`: 0 for column, 1 for row
    /// - `index`: track index being resized
    /// - `coord`: pointer coordinate on the drag axis (clientX/clientY)
    #[wasm_bindgen(js_name = beginResize)]
    pub fn begin_resize(
        &self,
        table_id: u32,
        axis: u8,
        index: usize,
        coord: f32,
    ) -> Result<bool, JsValue> {
        wasm_info!(
            "beginResize called: table={} axis={} index={}",
            table_id,
            axis,
            index
        );
        let axis = axis_from_u8(axis).map_err(validation_error)?;
        let mut host = self.host.borrow_mut();
        match self
            .core
            .borrow_mut()
            .begin_resize(&mut *host, TableId(table_id), axis, index, coord)
        {
            Ok(()) => Ok(true),
            Err(e) => {
                wasm_warn!("beginResize rejected: {}", e);
                Ok(false)
            }
        }
    }

    /// Relay a pointer move along the drag axis
    #[wasm_bindgen(js_name = resizeMove)]
    pub fn resize_move(&self, coord: f32) {
        let mut host = self.host.borrow_mut();
        self.core.borrow_mut().resize_move(&mut *host, coord);
    }

    /// Finish the drag and commit the new size
    ///
    /// # Returns
    /// ResizeResult object, or null when no drag was active
    #[wasm_bindgen(js_name = finishResize)]
    pub fn finish_resize(&self) -> Result<JsValue, JsValue> {
        let commit = {
            let mut host = self.host.borrow_mut();
            self.core.borrow_mut().finish_resize(&mut *host)
        };
        match commit {
            Some(commit) => serialize(
                &ResizeResult {
                    table: commit.table,
                    axis: commit.axis,
                    index: commit.index,
                    size: commit.size,
                },
                "ResizeResult serialization error",
            ),
            None => Ok(JsValue::NULL),
        }
    }

    /// Abandon the drag without committing
    #[wasm_bindgen(js_name = cancelResize)]
    pub fn cancel_resize(&self) -> bool {
        let mut host = self.host.borrow_mut();
        self.core
            .borrow_mut()
            .cancel_resize(&mut *host, CancelReason::Escape)
    }

    /// Remove leaked guide elements; returns how many were removed
    #[wasm_bindgen(js_name = sweepOrphans)]
    pub fn sweep_orphans(&self) -> usize {
        let mut host = self.host.borrow_mut();
        self.core.borrow_mut().sweep_orphans(&mut *host)
    }

    // ========================================================================
    // Rendering and engine passthroughs
    // ========================================================================

    /// Build the display list for one table
    #[wasm_bindgen(js_name = renderTable)]
    pub fn render_table(&self, table_id: u32) -> Result<JsValue, JsValue> {
        let start = now_ms();
        let result = match self.core.borrow().render(TableId(table_id)) {
            Ok(list) => serialize(&list, "DisplayList serialization error"),
            Err(e) => {
                wasm_warn!("renderTable rejected: {}", e);
                Ok(JsValue::NULL)
            }
        };
        self.core
            .borrow_mut()
            .record_timing("renderTable", (now_ms() - start) as f32);
        result
    }

    /// Average time spent in an operation, in milliseconds
    #[wasm_bindgen(js_name = getAverageTime)]
    pub fn get_average_time(&self, operation: &str) -> Option<f32> {
        self.core.borrow().average_timing(operation)
    }

    /// Apply a format to the engine's current selection
    #[wasm_bindgen(js_name = formatSelection)]
    pub fn format_selection(&self, format: &str, value: JsValue) -> bool {
        let value: serde_json::Value = match crate::api::helpers::deserialize(
            value,
            "Invalid format value",
        ) {
            Ok(v) => v,
            Err(_) => return false,
        };
        match self.core.borrow_mut().format_selection(format, value) {
            Ok(()) => true,
            Err(e) => {
                wasm_warn!("formatSelection rejected: {}", e);
                false
            }
        }
    }

    /// Insert text at the engine cursor, replacing any selected range
    ///
    /// # Returns
    /// The document index after the inserted text, or -1 when rejected
    #[wasm_bindgen(js_name = insertTextAtCursor)]
    pub fn insert_text_at_cursor(&self, text: &str) -> i32 {
        match self.core.borrow_mut().insert_text_at_cursor(text) {
            Ok(index) => index as i32,
            Err(e) => {
                wasm_warn!("insertTextAtCursor rejected: {}", e);
                -1
            }
        }
    }

    /// Debugging snapshot of the whole instance
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        serialize(&self.core.borrow().state_dump(), "State serialization error")
    }

    /// Tear down timers, guides, and any active drag
    #[wasm_bindgen(js_name = destroy)]
    pub fn destroy(&mut self) {
        wasm_info!("TableEditor destroyed");
        {
            let mut host = self.host.borrow_mut();
            let mut core = self.core.borrow_mut();
            core.cancel_resize(&mut *host, CancelReason::Superseded);
            core.close_context_menu();
            core.close_table_picker();
            core.sweep_orphans(&mut *host);
        }
        self.stop_sweep_interval();
    }

    fn stop_sweep_interval(&mut self) {
        if let Some(handle) = self.sweep_interval.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }
}

impl Drop for TableEditor {
    fn drop(&mut self) {
        self.stop_sweep_interval();
    }
}
