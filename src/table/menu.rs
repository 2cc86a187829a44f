//! Table context menu
//!
//! Commands cross the JS boundary as numeric values; entry enablement
//! is recomputed from the grid and selection each time a menu opens.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::models::{CellAddress, TableGrid, TableId};

/// Commands the context menu and toolbar can invoke
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuCommand {
    InsertRowAbove = 0,
    InsertRowBelow = 1,
    InsertColumnLeft = 2,
    InsertColumnRight = 3,
    DeleteRow = 4,
    DeleteColumn = 5,
    MergeCells = 6,
    SplitCells = 7,
    SetBackground = 8,
    DeleteTable = 9,
}

impl MenuCommand {
    pub fn from_u8(value: u8) -> Option<MenuCommand> {
        match value {
            0 => Some(MenuCommand::InsertRowAbove),
            1 => Some(MenuCommand::InsertRowBelow),
            2 => Some(MenuCommand::InsertColumnLeft),
            3 => Some(MenuCommand::InsertColumnRight),
            4 => Some(MenuCommand::DeleteRow),
            5 => Some(MenuCommand::DeleteColumn),
            6 => Some(MenuCommand::MergeCells),
            7 => Some(MenuCommand::SplitCells),
            8 => Some(MenuCommand::SetBackground),
            9 => Some(MenuCommand::DeleteTable),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::InsertRowAbove => "Insert row above",
            MenuCommand::InsertRowBelow => "Insert row below",
            MenuCommand::InsertColumnLeft => "Insert column left",
            MenuCommand::InsertColumnRight => "Insert column right",
            MenuCommand::DeleteRow => "Delete row",
            MenuCommand::DeleteColumn => "Delete column",
            MenuCommand::MergeCells => "Merge cells",
            MenuCommand::SplitCells => "Split cells",
            MenuCommand::SetBackground => "Cell background",
            MenuCommand::DeleteTable => "Delete table",
        }
    }
}

/// Default menu layout, in display order
pub static DEFAULT_MENU: Lazy<Vec<MenuCommand>> = Lazy::new(|| {
    vec![
        MenuCommand::InsertRowAbove,
        MenuCommand::InsertRowBelow,
        MenuCommand::InsertColumnLeft,
        MenuCommand::InsertColumnRight,
        MenuCommand::DeleteRow,
        MenuCommand::DeleteColumn,
        MenuCommand::MergeCells,
        MenuCommand::SplitCells,
        MenuCommand::SetBackground,
        MenuCommand::DeleteTable,
    ]
});

/// One menu entry with its computed enablement
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuEntry {
    pub command: MenuCommand,
    pub label: String,
    pub enabled: bool,
}

/// Per-table context menu state, owned by the editor's menu registry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContextMenuState {
    pub table: TableId,
    pub anchor: CellAddress,
    pub open: bool,
    pub entries: Vec<MenuEntry>,
}

impl ContextMenuState {
    pub fn open_at(table: TableId, anchor: CellAddress, grid: &TableGrid) -> Self {
        Self {
            table,
            anchor,
            open: true,
            entries: build_entries(grid),
        }
    }
}

/// Compute entry enablement from the grid and its selection flags
pub fn build_entries(grid: &TableGrid) -> Vec<MenuEntry> {
    let selected = grid.selected_count();
    let any_merged_selected = grid.cells.iter().any(|c| c.is_selected() && c.is_merged());

    DEFAULT_MENU
        .iter()
        .map(|&command| {
            let enabled = match command {
                MenuCommand::DeleteRow => grid.rows > 1,
                MenuCommand::DeleteColumn => grid.cols > 1,
                MenuCommand::MergeCells => selected >= 2,
                MenuCommand::SplitCells => any_merged_selected,
                MenuCommand::SetBackground => selected >= 1,
                _ => true,
            };
            MenuEntry {
                command,
                label: command.label().to_string(),
                enabled,
            }
        })
        .collect()
}
