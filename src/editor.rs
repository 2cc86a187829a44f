//! Editor instance state
//!
//! `EditorCore` owns everything one editor needs: the table registry,
//! the cell selection, the resize controller, the open picker, the
//! per-table menu registry, and the engine executor. There is no
//! module-level state; two editor instances never share anything.

use std::collections::HashMap;

use serde::Serialize;

use crate::engine::{CommandExecutor, TextEngine};
use crate::models::{
    Axis, CellAddress, ColumnPosition, EditorOptions, RowPosition, TableError, TableGrid, TableId,
};
use crate::renderers::{render_table, TableDisplayList};
use crate::table::menu::{ContextMenuState, MenuCommand, MenuEntry};
use crate::table::picker::{PickerPreview, TablePicker};
use crate::table::resize::{GestureHost, ResizeCommit, ResizeController};
use crate::table::selection::{CellSelection, SelectionSnapshot};
use crate::table::structure;
use crate::utils::PerformanceMonitor;

/// Host-provided color chooser capability
pub trait ColorPickerProvider {
    /// Ask the host to pick a color, seeded with the current one.
    /// None means the user dismissed the picker.
    fn pick_color(&self, current: Option<&str>) -> Option<String>;
}

/// Typed registry of optional host capabilities
#[derive(Default)]
pub struct CapabilityRegistry {
    color_picker: Option<Box<dyn ColorPickerProvider>>,
}

impl CapabilityRegistry {
    pub fn register_color_picker(&mut self, provider: Box<dyn ColorPickerProvider>) {
        log::info!("color picker capability registered");
        self.color_picker = Some(provider);
    }

    pub fn has_color_picker(&self) -> bool {
        self.color_picker.is_some()
    }

    pub fn pick_color(&self, current: Option<&str>) -> Option<String> {
        self.color_picker.as_ref().and_then(|p| p.pick_color(current))
    }
}

/// Summary of one registered table
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TableSummary {
    pub table: TableId,
    pub rows: usize,
    pub cols: usize,
    pub live_cells: usize,
    pub width: f32,
    pub height: f32,
}

/// Debugging snapshot of the whole editor instance
#[derive(Serialize, Clone, Debug)]
pub struct EditorStateDump {
    pub tables: Vec<TableSummary>,
    pub selection: Option<SelectionSnapshot>,
    pub resize_active: bool,
    pub picker_open: bool,
    pub open_menu: Option<TableId>,
}

/// All state for one editor instance
pub struct EditorCore {
    options: EditorOptions,
    tables: HashMap<TableId, TableGrid>,
    next_table_id: u32,
    selection: CellSelection,
    resize: ResizeController,
    picker: Option<TablePicker>,
    menus: HashMap<TableId, ContextMenuState>,
    executor: CommandExecutor,
    capabilities: CapabilityRegistry,
    last_background: Option<String>,
    perf: PerformanceMonitor,
}

impl EditorCore {
    pub fn new(engine: Box<dyn TextEngine>, options: EditorOptions) -> Self {
        let resize = ResizeController::with_limits(
            options.min_col_width,
            options.min_row_height,
            options.watchdog_ms,
        );
        Self {
            options,
            tables: HashMap::new(),
            next_table_id: 1,
            selection: CellSelection::new(),
            resize,
            picker: None,
            menus: HashMap::new(),
            executor: CommandExecutor::new(engine),
            capabilities: CapabilityRegistry::default(),
            last_background: None,
            perf: PerformanceMonitor::new(),
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn table(&self, id: TableId) -> Result<&TableGrid, TableError> {
        self.tables.get(&id).ok_or(TableError::UnknownTable(id.0))
    }

    /// Registered table ids in ascending order
    pub fn table_ids(&self) -> Vec<TableId> {
        let mut ids: Vec<TableId> = self.tables.keys().copied().collect();
        ids.sort();
        ids
    }

    // ------------------------------------------------------------------
    // Table lifecycle
    // ------------------------------------------------------------------

    /// Create a table and insert its embed at the engine cursor
    pub fn insert_table(&mut self, rows: usize, cols: usize) -> Result<TableId, TableError> {
        let grid = structure::insert_table(rows, cols)?;
        let id = TableId(self.next_table_id);
        self.next_table_id += 1;
        self.tables.insert(id, grid);
        self.executor.insert_table_embed(id, rows, cols);
        log::info!("table {} inserted ({}x{})", id, rows, cols);
        Ok(id)
    }

    /// Remove a table, its menu state, and its engine embed
    pub fn delete_table(&mut self, host: &mut dyn GestureHost, id: TableId) -> Result<(), TableError> {
        if self.tables.remove(&id).is_none() {
            return Err(TableError::UnknownTable(id.0));
        }
        self.resize.cancel_if_table(host, id);
        self.menus.remove(&id);
        if self.selection.table == Some(id) {
            self.selection.reset();
        }
        self.executor.remove_table_embed(id);
        log::info!("table {} deleted", id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Cell selection
    // ------------------------------------------------------------------

    pub fn begin_cell_selection(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
    ) -> Result<(), TableError> {
        // An open menu's entries were computed against the old selection
        self.close_context_menu();
        if let Some(prev) = self.selection.table {
            if prev != table {
                match self.tables.get_mut(&prev) {
                    Some(grid) => self.selection.clear(grid),
                    None => self.selection.reset(),
                }
            }
        }
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        self.selection.begin(table, grid, CellAddress::new(row, col))
    }

    pub fn extend_cell_selection(&mut self, row: usize, col: usize) -> Result<(), TableError> {
        let table = self
            .selection
            .table
            .ok_or(TableError::NoActiveSelection { needed: 1, have: 0 })?;
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        self.selection.extend(grid, CellAddress::new(row, col))
    }

    pub fn clear_cell_selection(&mut self) {
        if let Some(table) = self.selection.table {
            match self.tables.get_mut(&table) {
                Some(grid) => self.selection.clear(grid),
                None => self.selection.reset(),
            }
        }
    }

    pub fn selection_snapshot(&self) -> Option<SelectionSnapshot> {
        let table = self.selection.table?;
        let grid = self.tables.get(&table)?;
        Some(self.selection.snapshot(grid))
    }

    /// Table and start anchor of the active selection
    fn selection_context(&self) -> Result<(TableId, CellAddress), TableError> {
        match (self.selection.table, self.selection.start) {
            (Some(table), Some(anchor)) => Ok((table, anchor)),
            _ => Err(TableError::NoActiveSelection { needed: 1, have: 0 }),
        }
    }

    // ------------------------------------------------------------------
    // Structural operations
    //
    // Each one resolves its anchor from the active selection, applies
    // the mutation, cancels any resize touching the table, and clears
    // the selection (indices may have shifted under it).
    // ------------------------------------------------------------------

    pub fn insert_row(
        &mut self,
        host: &mut dyn GestureHost,
        position: RowPosition,
    ) -> Result<(), TableError> {
        let (table, anchor) = self.selection_context()?;
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        structure::insert_row(grid, position, anchor)?;
        self.selection.clear(grid);
        self.resize.cancel_if_table(host, table);
        Ok(())
    }

    pub fn insert_column(
        &mut self,
        host: &mut dyn GestureHost,
        position: ColumnPosition,
    ) -> Result<(), TableError> {
        let (table, anchor) = self.selection_context()?;
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        structure::insert_column(grid, position, anchor)?;
        self.selection.clear(grid);
        self.resize.cancel_if_table(host, table);
        Ok(())
    }

    pub fn delete_row(&mut self, host: &mut dyn GestureHost) -> Result<(), TableError> {
        let (table, anchor) = self.selection_context()?;
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        structure::delete_row(grid, anchor)?;
        self.selection.reset();
        self.resize.cancel_if_table(host, table);
        Ok(())
    }

    pub fn delete_column(&mut self, host: &mut dyn GestureHost) -> Result<(), TableError> {
        let (table, anchor) = self.selection_context()?;
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        structure::delete_column(grid, anchor)?;
        self.selection.reset();
        self.resize.cancel_if_table(host, table);
        Ok(())
    }

    /// Merge the selected cells, returning the survivor's anchor
    pub fn merge_selected_cells(
        &mut self,
        host: &mut dyn GestureHost,
    ) -> Result<CellAddress, TableError> {
        let (table, _) = self.selection_context()?;
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        let survivor = structure::merge_selected(grid)?;
        self.selection.reset();
        self.resize.cancel_if_table(host, table);
        Ok(survivor)
    }

    /// Split selected merged cells, returning how many cells were created
    pub fn split_selected_cells(&mut self, host: &mut dyn GestureHost) -> Result<usize, TableError> {
        let (table, _) = self.selection_context()?;
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        let created = structure::split_selected(grid)?;
        self.selection.clear(grid);
        self.resize.cancel_if_table(host, table);
        Ok(created)
    }

    /// Apply a background color to the selected cells
    ///
    /// Side-effect only; the selection survives.
    pub fn set_selected_cells_background(&mut self, color: &str) -> Result<usize, TableError> {
        let (table, _) = self.selection_context()?;
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        let count = structure::set_selected_background(grid, color)?;
        self.last_background = Some(color.to_string());
        Ok(count)
    }

    /// Sync the plain-text mirror of one cell
    pub fn set_cell_content(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<(), TableError> {
        let grid = self
            .tables
            .get_mut(&table)
            .ok_or(TableError::UnknownTable(table.0))?;
        structure::set_cell_content(grid, CellAddress::new(row, col), text)
    }

    // ------------------------------------------------------------------
    // Table picker
    // ------------------------------------------------------------------

    /// Open the size picker, replacing any open picker or menu
    pub fn open_table_picker(&mut self) {
        self.close_context_menu();
        self.picker = Some(TablePicker::new(&self.options));
    }

    pub fn picker_is_open(&self) -> bool {
        self.picker.is_some()
    }

    pub fn picker_hover(&mut self, row: usize, col: usize) -> Option<PickerPreview> {
        self.picker.as_mut().map(|p| p.hover(row, col))
    }

    /// Last hover preview of the open picker, if the pointer entered it
    pub fn picker_preview(&self) -> Option<PickerPreview> {
        self.picker.as_ref().and_then(|p| p.preview())
    }

    /// Commit the hovered size; Some(id) means a table was created and
    /// the picker closed, None leaves the picker open (or none was open).
    pub fn picker_commit(&mut self, row: usize, col: usize) -> Result<Option<TableId>, TableError> {
        let committed = match self.picker.as_mut() {
            Some(picker) => picker.commit(row, col),
            None => return Ok(None),
        };
        match committed {
            Some((rows, cols)) => {
                let id = self.insert_table(rows, cols)?;
                self.picker = None;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// Close the picker without committing. Returns whether it was open.
    pub fn close_table_picker(&mut self) -> bool {
        self.picker.take().is_some()
    }

    // ------------------------------------------------------------------
    // Context menu
    // ------------------------------------------------------------------

    /// Open the context menu for a cell, selecting it if needed
    pub fn open_context_menu(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
    ) -> Result<Vec<MenuEntry>, TableError> {
        self.picker = None;
        for state in self.menus.values_mut() {
            state.open = false;
        }

        let already_selected = {
            let grid = self.tables.get(&table).ok_or(TableError::UnknownTable(table.0))?;
            grid.occupant_of(row, col)
                .ok_or(TableError::CellNotFound { row, col })?
                .is_selected()
        };
        if !already_selected {
            self.begin_cell_selection(table, row, col)?;
        }

        let grid = self.tables.get(&table).ok_or(TableError::UnknownTable(table.0))?;
        let state = ContextMenuState::open_at(table, CellAddress::new(row, col), grid);
        let entries = state.entries.clone();
        self.menus.insert(table, state);
        Ok(entries)
    }

    pub fn open_menu(&self) -> Option<&ContextMenuState> {
        self.menus.values().find(|m| m.open)
    }

    /// Close whichever menu is open (same path as Escape/outside click)
    pub fn close_context_menu(&mut self) {
        for state in self.menus.values_mut() {
            state.open = false;
        }
    }

    /// Run a menu command against the open menu's table
    pub fn apply_menu_command(
        &mut self,
        host: &mut dyn GestureHost,
        command: MenuCommand,
    ) -> Result<(), TableError> {
        let table = self
            .open_menu()
            .map(|m| m.table)
            .ok_or(TableError::NoActiveSelection { needed: 1, have: 0 })?;

        let result = match command {
            MenuCommand::InsertRowAbove => self.insert_row(host, RowPosition::Above),
            MenuCommand::InsertRowBelow => self.insert_row(host, RowPosition::Below),
            MenuCommand::InsertColumnLeft => self.insert_column(host, ColumnPosition::Left),
            MenuCommand::InsertColumnRight => self.insert_column(host, ColumnPosition::Right),
            MenuCommand::DeleteRow => self.delete_row(host),
            MenuCommand::DeleteColumn => self.delete_column(host),
            MenuCommand::MergeCells => self.merge_selected_cells(host).map(|_| ()),
            MenuCommand::SplitCells => self.split_selected_cells(host).map(|_| ()),
            MenuCommand::SetBackground => self.apply_background_capability(),
            MenuCommand::DeleteTable => self.delete_table(host, table),
        };
        self.close_context_menu();
        result
    }

    /// Route SetBackground through the registered color picker, falling
    /// back to the last explicitly applied color.
    fn apply_background_capability(&mut self) -> Result<(), TableError> {
        let current = self.last_background.clone();
        let color = if self.capabilities.has_color_picker() {
            self.capabilities.pick_color(current.as_deref())
        } else {
            current
        };
        match color {
            Some(color) => self.set_selected_cells_background(&color).map(|_| ()),
            // Dismissed picker or nothing to fall back to
            None => Ok(()),
        }
    }

    pub fn register_color_picker(&mut self, provider: Box<dyn ColorPickerProvider>) {
        self.capabilities.register_color_picker(provider);
    }

    // ------------------------------------------------------------------
    // Resize
    // ------------------------------------------------------------------

    pub fn begin_resize(
        &mut self,
        host: &mut dyn GestureHost,
        table: TableId,
        axis: Axis,
        index: usize,
        coord: f32,
    ) -> Result<(), TableError> {
        let grid = self.tables.get(&table).ok_or(TableError::UnknownTable(table.0))?;
        let bound = match axis {
            Axis::Column => grid.cols,
            Axis::Row => grid.rows,
        };
        if index >= bound {
            return Err(match axis {
                Axis::Column => TableError::CellNotFound { row: 0, col: index },
                Axis::Row => TableError::CellNotFound { row: index, col: 0 },
            });
        }
        self.resize.begin(host, table, axis, index, coord);
        Ok(())
    }

    pub fn resize_move(&mut self, host: &mut dyn GestureHost, coord: f32) {
        self.resize.update(host, coord);
    }

    /// Pointer-move entry for the DOM path; picks the coordinate for
    /// the active session's axis.
    pub fn resize_move_at(&mut self, host: &mut dyn GestureHost, x: f32, y: f32) {
        if let Some(axis) = self.resize.session_axis() {
            let coord = match axis {
                Axis::Column => x,
                Axis::Row => y,
            };
            self.resize.update(host, coord);
        }
    }

    /// Clean pointer-up: commit the size into the grid bookkeeping
    pub fn finish_resize(&mut self, host: &mut dyn GestureHost) -> Option<ResizeCommit> {
        let commit = self.resize.commit(host)?;
        match self.tables.get_mut(&commit.table) {
            Some(grid) => {
                let applied = match commit.axis {
                    Axis::Column => structure::set_column_width(grid, commit.index, commit.size),
                    Axis::Row => structure::set_row_height(grid, commit.index, commit.size),
                };
                if let Err(e) = applied {
                    log::warn!("resize commit dropped: {}", e);
                }
            }
            None => log::warn!("resize commit for unknown table {}", commit.table),
        }
        Some(commit)
    }

    pub fn cancel_resize(
        &mut self,
        host: &mut dyn GestureHost,
        reason: crate::table::resize::CancelReason,
    ) -> bool {
        self.resize.cancel(host, reason)
    }

    pub fn resize_is_active(&self) -> bool {
        self.resize.is_dragging()
    }

    pub fn resize_session(&self) -> Option<&crate::table::resize::ResizeSession> {
        self.resize.session()
    }

    /// Periodic orphaned-guide sweep
    pub fn sweep_orphans(&mut self, host: &mut dyn GestureHost) -> usize {
        self.resize.sweep(host)
    }

    // ------------------------------------------------------------------
    // Engine passthroughs
    // ------------------------------------------------------------------

    pub fn format_selection(&mut self, format: &str, value: serde_json::Value) -> Result<(), TableError> {
        self.executor.format_selection(format, value)
    }

    pub fn insert_text_at_cursor(&mut self, text: &str) -> Result<usize, TableError> {
        self.executor.insert_text_at_cursor(text)
    }

    // ------------------------------------------------------------------
    // Rendering and introspection
    // ------------------------------------------------------------------

    pub fn render(&self, id: TableId) -> Result<TableDisplayList, TableError> {
        let grid = self.table(id)?;
        Ok(render_table(id, grid, &self.options))
    }

    pub fn state_dump(&self) -> EditorStateDump {
        let tables = self
            .table_ids()
            .into_iter()
            .filter_map(|id| {
                self.tables.get(&id).map(|grid| TableSummary {
                    table: id,
                    rows: grid.rows,
                    cols: grid.cols,
                    live_cells: grid.live_cell_count(),
                    width: grid.table_width(),
                    height: grid.table_height(),
                })
            })
            .collect();
        EditorStateDump {
            tables,
            selection: self.selection_snapshot(),
            resize_active: self.resize.is_dragging(),
            picker_open: self.picker.is_some(),
            open_menu: self.open_menu().map(|m| m.table),
        }
    }

    pub fn record_timing(&mut self, operation: &str, duration_ms: f32) {
        self.perf.record_measurement(operation, duration_ms);
    }

    pub fn average_timing(&self, operation: &str) -> Option<f32> {
        self.perf.get_average_time(operation)
    }
}
