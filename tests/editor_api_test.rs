// Test the editor core: table lifecycle, picker, menus, resize, engine calls

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use table_editor_wasm::editor::{ColorPickerProvider, EditorCore};
use table_editor_wasm::engine::{EditSource, EngineRange, TextEngine};
use table_editor_wasm::models::{Axis, EditorOptions, TableError, TableId};
use table_editor_wasm::table::menu::MenuCommand;
use table_editor_wasm::table::resize::{
    CancelReason, GestureHost, GuideHandle, ListenerSet, TimerHandle,
};

/// One recorded engine mutation
#[derive(Clone, Debug, PartialEq)]
enum EngineCall {
    InsertEmbed { index: usize, embed_type: String, table_id: u32 },
    InsertText { index: usize, text: String },
    DeleteText { index: usize, length: usize },
    FormatText { index: usize, length: usize, format: String },
    SetSelection { index: usize, length: usize },
}

/// Engine fake that records every mutation and remembers embed positions
struct RecordingEngine {
    calls: Rc<RefCell<Vec<EngineCall>>>,
    selection: Option<EngineRange>,
    embeds: HashMap<u32, usize>,
}

impl RecordingEngine {
    fn boxed(selection: Option<EngineRange>) -> (Box<dyn TextEngine>, Rc<RefCell<Vec<EngineCall>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let engine = RecordingEngine {
            calls: Rc::clone(&calls),
            selection,
            embeds: HashMap::new(),
        };
        (Box::new(engine), calls)
    }
}

impl TextEngine for RecordingEngine {
    fn selection(&self) -> Option<EngineRange> {
        self.selection
    }

    fn insert_embed(&mut self, index: usize, embed_type: &str, value: serde_json::Value, _source: EditSource) {
        let table_id = value["tableId"].as_u64().unwrap_or(0) as u32;
        self.embeds.insert(table_id, index);
        self.calls.borrow_mut().push(EngineCall::InsertEmbed {
            index,
            embed_type: embed_type.to_string(),
            table_id,
        });
    }

    fn insert_text(&mut self, index: usize, text: &str, _source: EditSource) {
        self.calls.borrow_mut().push(EngineCall::InsertText {
            index,
            text: text.to_string(),
        });
    }

    fn delete_text(&mut self, index: usize, length: usize, _source: EditSource) {
        self.calls.borrow_mut().push(EngineCall::DeleteText { index, length });
    }

    fn format_text(
        &mut self,
        index: usize,
        length: usize,
        format: &str,
        _value: serde_json::Value,
        _source: EditSource,
    ) {
        self.calls.borrow_mut().push(EngineCall::FormatText {
            index,
            length,
            format: format.to_string(),
        });
    }

    fn set_selection(&mut self, index: usize, length: usize) {
        self.calls.borrow_mut().push(EngineCall::SetSelection { index, length });
    }

    fn embed_index(&self, _embed_type: &str, embed_id: u32) -> Option<usize> {
        self.embeds.get(&embed_id).copied()
    }
}

/// Minimal gesture host; exact resource balance is covered elsewhere
#[derive(Default)]
struct FakeHost {
    start_size: f32,
    attached: u32,
    detached: u32,
}

impl GestureHost for FakeHost {
    fn read_start_size(&self, _table: TableId, _axis: Axis, _index: usize) -> f32 {
        self.start_size
    }
    fn show_guide(&mut self, _table: TableId, _axis: Axis, _coord: f32) -> GuideHandle {
        1
    }
    fn move_guide(&mut self, _guide: GuideHandle, _coord: f32) {}
    fn remove_guide(&mut self, _guide: GuideHandle) {}
    fn attach_drag_listeners(&mut self) -> ListenerSet {
        self.attached += 1;
        self.attached
    }
    fn detach_drag_listeners(&mut self, _set: ListenerSet) {
        self.detached += 1;
    }
    fn arm_watchdog(&mut self, _ms: u32) -> TimerHandle {
        1
    }
    fn clear_watchdog(&mut self, _timer: TimerHandle) {}
    fn sweep_orphan_guides(&mut self) -> usize {
        0
    }
}

/// Color picker fake returning a fixed answer
struct FixedColorPicker(Option<&'static str>);

impl ColorPickerProvider for FixedColorPicker {
    fn pick_color(&self, _current: Option<&str>) -> Option<String> {
        self.0.map(str::to_string)
    }
}

fn editor_with_cursor(index: usize) -> (EditorCore, Rc<RefCell<Vec<EngineCall>>>) {
    let (engine, calls) = RecordingEngine::boxed(Some(EngineRange { index, length: 0 }));
    (EditorCore::new(engine, EditorOptions::default()), calls)
}

#[test]
fn test_insert_table_embeds_at_engine_cursor() {
    let (mut core, calls) = editor_with_cursor(5);

    let id = core.insert_table(2, 3).unwrap();

    assert_eq!(id, TableId(1), "table ids start at 1");
    assert_eq!(core.table_count(), 1);
    assert_eq!(
        *calls.borrow(),
        vec![
            EngineCall::InsertEmbed {
                index: 5,
                embed_type: "table".to_string(),
                table_id: 1
            },
            EngineCall::SetSelection { index: 6, length: 0 },
        ],
        "cursor moves past the embed after insertion"
    );

    let second = core.insert_table(1, 1).unwrap();
    assert_eq!(second, TableId(2), "ids are never reused");
}

#[test]
fn test_insert_table_without_cursor_embeds_at_origin() {
    let (engine, calls) = RecordingEngine::boxed(None);
    let mut core = EditorCore::new(engine, EditorOptions::default());

    core.insert_table(1, 1).unwrap();

    assert!(matches!(
        calls.borrow()[0],
        EngineCall::InsertEmbed { index: 0, .. }
    ));
}

#[test]
fn test_insert_table_rejects_bad_dimensions_without_side_effects() {
    let (mut core, calls) = editor_with_cursor(0);

    let result = core.insert_table(0, 5);

    assert!(matches!(result, Err(TableError::InvalidDimension { .. })));
    assert_eq!(core.table_count(), 0);
    assert!(calls.borrow().is_empty(), "a rejected insert must not touch the engine");
}

#[test]
fn test_delete_table_removes_embed_and_detaches_selection() {
    let (mut core, calls) = editor_with_cursor(5);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();
    core.begin_cell_selection(id, 0, 0).unwrap();

    core.delete_table(&mut host, id).unwrap();

    assert_eq!(core.table_count(), 0);
    assert!(core.selection_snapshot().is_none(), "selection must not outlive its table");
    assert!(calls
        .borrow()
        .contains(&EngineCall::DeleteText { index: 5, length: 1 }));
    assert!(matches!(
        core.delete_table(&mut host, id),
        Err(TableError::UnknownTable(1))
    ));
}

#[test]
fn test_picker_flow_creates_table_and_closes() {
    let (mut core, _calls) = editor_with_cursor(0);

    core.open_table_picker();
    assert!(core.picker_is_open());

    let preview = core.picker_hover(2, 3).unwrap();
    assert_eq!(preview.rows, 3);
    assert_eq!(preview.cols, 4);
    assert_eq!(preview.label, "3 × 4");

    let id = core.picker_commit(2, 3).unwrap().expect("commit should create a table");
    assert!(!core.picker_is_open(), "commit closes the picker");

    let grid = core.table(id).unwrap();
    assert_eq!(grid.rows, 3);
    assert_eq!(grid.cols, 4);
}

#[test]
fn test_reopening_the_picker_replaces_it() {
    let (mut core, _calls) = editor_with_cursor(0);

    core.open_table_picker();
    core.picker_hover(4, 4);
    assert!(core.picker_preview().is_some());

    // A second open discards the first picker's hover state
    core.open_table_picker();
    assert!(core.picker_is_open());
    assert_eq!(core.picker_preview(), None);
}

#[test]
fn test_picker_commit_below_minimum_stays_open() {
    let options = EditorOptions {
        picker_min_rows: 2,
        picker_min_cols: 2,
        ..Default::default()
    };
    let (engine, _calls) = RecordingEngine::boxed(None);
    let mut core = EditorCore::new(engine, options);

    core.open_table_picker();
    let committed = core.picker_commit(0, 0).unwrap();

    assert_eq!(committed, None);
    assert!(core.picker_is_open(), "a rejected commit leaves the picker open");
    assert_eq!(core.table_count(), 0);
}

#[test]
fn test_picker_commit_without_open_picker_is_a_noop() {
    let (mut core, _calls) = editor_with_cursor(0);
    assert_eq!(core.picker_commit(1, 1).unwrap(), None);
    assert_eq!(core.table_count(), 0);
}

#[test]
fn test_open_context_menu_selects_cell_and_computes_enablement() {
    let (mut core, _calls) = editor_with_cursor(0);
    let id = core.insert_table(2, 2).unwrap();

    let entries = core.open_context_menu(id, 1, 1).unwrap();

    let snapshot = core.selection_snapshot().unwrap();
    assert_eq!(snapshot.cell_count, 1, "opening on an unselected cell selects it");

    let enabled = |cmd: MenuCommand| entries.iter().find(|e| e.command == cmd).unwrap().enabled;
    assert!(enabled(MenuCommand::DeleteRow));
    assert!(enabled(MenuCommand::DeleteColumn));
    assert!(enabled(MenuCommand::SetBackground));
    assert!(enabled(MenuCommand::DeleteTable));
    assert!(!enabled(MenuCommand::MergeCells), "one selected cell cannot merge");
    assert!(!enabled(MenuCommand::SplitCells), "nothing merged is selected");

    assert_eq!(core.open_menu().map(|m| m.table), Some(id));
}

#[test]
fn test_menu_on_minimal_table_disables_structure_deletes() {
    let (mut core, _calls) = editor_with_cursor(0);
    let id = core.insert_table(1, 1).unwrap();

    let entries = core.open_context_menu(id, 0, 0).unwrap();

    let enabled = |cmd: MenuCommand| entries.iter().find(|e| e.command == cmd).unwrap().enabled;
    assert!(!enabled(MenuCommand::DeleteRow));
    assert!(!enabled(MenuCommand::DeleteColumn));
    assert!(enabled(MenuCommand::InsertRowBelow));
    assert!(enabled(MenuCommand::DeleteTable));
}

#[test]
fn test_open_context_menu_keeps_existing_selection() {
    let (mut core, _calls) = editor_with_cursor(0);
    let id = core.insert_table(2, 2).unwrap();
    core.begin_cell_selection(id, 0, 0).unwrap();
    core.extend_cell_selection(1, 1).unwrap();

    let entries = core.open_context_menu(id, 0, 0).unwrap();

    let snapshot = core.selection_snapshot().unwrap();
    assert_eq!(snapshot.cell_count, 4, "right-click inside a selection keeps it");
    let merge = entries.iter().find(|e| e.command == MenuCommand::MergeCells).unwrap();
    assert!(merge.enabled);
}

#[test]
fn test_menu_command_inserts_row_and_closes_menu() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();
    core.open_context_menu(id, 0, 0).unwrap();

    core.apply_menu_command(&mut host, MenuCommand::InsertRowBelow).unwrap();

    assert_eq!(core.table(id).unwrap().rows, 3);
    assert!(core.open_menu().is_none(), "a command closes the menu");
    assert!(
        core.selection_snapshot().is_none(),
        "structural commands invalidate the selection"
    );
}

#[test]
fn test_menu_command_delete_table() {
    let (mut core, calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();
    core.open_context_menu(id, 0, 0).unwrap();

    core.apply_menu_command(&mut host, MenuCommand::DeleteTable).unwrap();

    assert_eq!(core.table_count(), 0);
    assert!(core.open_menu().is_none());
    assert!(calls
        .borrow()
        .iter()
        .any(|c| matches!(c, EngineCall::DeleteText { .. })));
}

#[test]
fn test_menu_command_without_open_menu_is_rejected() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    core.insert_table(2, 2).unwrap();

    let result = core.apply_menu_command(&mut host, MenuCommand::DeleteRow);
    assert!(matches!(result, Err(TableError::NoActiveSelection { .. })));
}

#[test]
fn test_beginning_a_selection_closes_the_open_menu() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let first = core.insert_table(2, 2).unwrap();
    let second = core.insert_table(3, 3).unwrap();

    core.open_context_menu(first, 0, 0).unwrap();
    assert_eq!(core.open_menu().map(|m| m.table), Some(first));

    // Re-anchoring on another table invalidates the entries the menu
    // computed against the old selection
    core.begin_cell_selection(second, 1, 1).unwrap();
    assert!(core.open_menu().is_none());

    let result = core.apply_menu_command(&mut host, MenuCommand::DeleteRow);
    assert!(matches!(result, Err(TableError::NoActiveSelection { .. })));
    assert_eq!(core.table(first).unwrap().rows, 2, "the stale menu ran nothing");
    assert_eq!(core.table(second).unwrap().rows, 3);
}

#[test]
fn test_failed_menu_command_still_closes_menu() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();
    core.open_context_menu(id, 0, 0).unwrap();

    // One selected cell cannot merge
    let result = core.apply_menu_command(&mut host, MenuCommand::MergeCells);

    assert!(matches!(result, Err(TableError::NoActiveSelection { needed: 2, .. })));
    assert!(core.open_menu().is_none(), "the menu closes even when the command fails");
    assert_eq!(core.table(id).unwrap().live_cell_count(), 4);
}

#[test]
fn test_set_background_uses_registered_color_picker() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();
    core.register_color_picker(Box::new(FixedColorPicker(Some("#ff0000"))));
    core.open_context_menu(id, 0, 0).unwrap();

    core.apply_menu_command(&mut host, MenuCommand::SetBackground).unwrap();

    let grid = core.table(id).unwrap();
    assert_eq!(grid.cell_at(0, 0).unwrap().background.as_deref(), Some("#ff0000"));
    assert_eq!(grid.cell_at(0, 1).unwrap().background, None);
}

#[test]
fn test_set_background_falls_back_to_last_applied_color() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();

    // No picker registered; an explicit apply seeds the fallback color
    core.begin_cell_selection(id, 0, 0).unwrap();
    core.set_selected_cells_background("#00ff00").unwrap();

    core.open_context_menu(id, 1, 1).unwrap();
    core.apply_menu_command(&mut host, MenuCommand::SetBackground).unwrap();

    let grid = core.table(id).unwrap();
    assert_eq!(grid.cell_at(1, 1).unwrap().background.as_deref(), Some("#00ff00"));
}

#[test]
fn test_set_background_dismissed_picker_changes_nothing() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();
    core.register_color_picker(Box::new(FixedColorPicker(None)));
    core.open_context_menu(id, 0, 0).unwrap();

    core.apply_menu_command(&mut host, MenuCommand::SetBackground).unwrap();

    let grid = core.table(id).unwrap();
    assert!(grid.cells.iter().all(|c| c.background.is_none()));
}

#[test]
fn test_malformed_color_is_rejected_without_painting() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();
    core.register_color_picker(Box::new(FixedColorPicker(Some("red"))));
    core.open_context_menu(id, 0, 0).unwrap();

    let err = core
        .apply_menu_command(&mut host, MenuCommand::SetBackground)
        .unwrap_err();
    assert!(matches!(err, TableError::InvalidColor(ref c) if c == "red"));

    let grid = core.table(id).unwrap();
    assert!(grid.cells.iter().all(|c| c.background.is_none()));

    // The bad color never becomes the fallback for later applies
    core.register_color_picker(Box::new(FixedColorPicker(None)));
    core.open_context_menu(id, 1, 1).unwrap();
    core.apply_menu_command(&mut host, MenuCommand::SetBackground).unwrap();
    let grid = core.table(id).unwrap();
    assert!(grid.cells.iter().all(|c| c.background.is_none()));
}

#[test]
fn test_background_apply_keeps_selection_alive() {
    let (mut core, _calls) = editor_with_cursor(0);
    let id = core.insert_table(2, 2).unwrap();
    core.begin_cell_selection(id, 0, 0).unwrap();
    core.extend_cell_selection(0, 1).unwrap();

    let count = core.set_selected_cells_background("#336699").unwrap();

    assert_eq!(count, 2);
    let snapshot = core.selection_snapshot().unwrap();
    assert_eq!(snapshot.cell_count, 2, "coloring cells is not a structural edit");
}

#[test]
fn test_structural_edit_cancels_drag_on_same_table_only() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost {
        start_size: 100.0,
        ..Default::default()
    };
    let first = core.insert_table(2, 2).unwrap();
    let second = core.insert_table(2, 2).unwrap();

    core.begin_resize(&mut host, second, Axis::Column, 0, 300.0).unwrap();

    // Mutating the first table leaves the second table's drag alone
    core.begin_cell_selection(first, 0, 0).unwrap();
    core.delete_row(&mut host).unwrap();
    assert!(core.resize_is_active());
    assert_eq!(host.detached, 0);

    // Mutating the dragged table tears the session down
    core.begin_cell_selection(second, 0, 0).unwrap();
    core.delete_row(&mut host).unwrap();
    assert!(!core.resize_is_active());
    assert_eq!(host.detached, 1);

    // The interrupted drag must not have committed a size
    let grid = core.table(second).unwrap();
    assert!(grid.col_widths.iter().all(|&w| w == 100.0));
}

#[test]
fn test_finish_resize_commits_into_sizing_vector() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost {
        start_size: 100.0,
        ..Default::default()
    };
    let id = core.insert_table(2, 2).unwrap();

    core.begin_resize(&mut host, id, Axis::Column, 0, 300.0).unwrap();
    core.resize_move(&mut host, 340.0);
    let commit = core.finish_resize(&mut host).unwrap();

    assert_eq!(commit.size, 140.0);
    assert_eq!(core.table(id).unwrap().col_widths[0], 140.0);
    assert!(core.finish_resize(&mut host).is_none());
}

#[test]
fn test_resize_move_at_picks_the_session_axis_coordinate() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost {
        start_size: 100.0,
        ..Default::default()
    };
    let id = core.insert_table(2, 2).unwrap();

    core.begin_resize(&mut host, id, Axis::Column, 0, 100.0).unwrap();
    core.resize_move_at(&mut host, 150.0, 999.0);
    assert_eq!(core.resize_session().unwrap().delta, 50.0, "column drags follow x");
    core.cancel_resize(&mut host, CancelReason::Escape);

    core.begin_resize(&mut host, id, Axis::Row, 0, 200.0).unwrap();
    core.resize_move_at(&mut host, 999.0, 260.0);
    assert_eq!(core.resize_session().unwrap().delta, 60.0, "row drags follow y");
}

#[test]
fn test_begin_resize_validates_table_and_index() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();

    assert!(matches!(
        core.begin_resize(&mut host, TableId(99), Axis::Column, 0, 0.0),
        Err(TableError::UnknownTable(99))
    ));
    assert!(matches!(
        core.begin_resize(&mut host, id, Axis::Column, 5, 0.0),
        Err(TableError::CellNotFound { row: 0, col: 5 })
    ));
    assert!(matches!(
        core.begin_resize(&mut host, id, Axis::Row, 7, 0.0),
        Err(TableError::CellNotFound { row: 7, col: 0 })
    ));
    assert!(!core.resize_is_active());
    assert_eq!(host.attached, 0, "a rejected begin must not acquire resources");
}

#[test]
fn test_selection_moving_to_another_table_clears_the_old_grid() {
    let (mut core, _calls) = editor_with_cursor(0);
    let first = core.insert_table(2, 2).unwrap();
    let second = core.insert_table(2, 2).unwrap();

    core.begin_cell_selection(first, 0, 0).unwrap();
    core.extend_cell_selection(1, 1).unwrap();
    assert_eq!(core.table(first).unwrap().selected_count(), 4);

    core.begin_cell_selection(second, 0, 0).unwrap();

    assert_eq!(core.table(first).unwrap().selected_count(), 0);
    let snapshot = core.selection_snapshot().unwrap();
    assert_eq!(snapshot.table, Some(second));
    assert_eq!(snapshot.cell_count, 1);
}

#[test]
fn test_merge_through_editor_resets_selection() {
    let (mut core, _calls) = editor_with_cursor(0);
    let mut host = FakeHost::default();
    let id = core.insert_table(2, 2).unwrap();
    core.begin_cell_selection(id, 0, 0).unwrap();
    core.extend_cell_selection(1, 1).unwrap();

    let survivor = core.merge_selected_cells(&mut host).unwrap();

    assert_eq!((survivor.row, survivor.col), (0, 0));
    assert!(core.selection_snapshot().is_none());
    assert_eq!(core.table(id).unwrap().live_cell_count(), 1);
}

#[test]
fn test_insert_text_at_cursor_replaces_engine_range() {
    let (engine, calls) = RecordingEngine::boxed(Some(EngineRange { index: 3, length: 4 }));
    let mut core = EditorCore::new(engine, EditorOptions::default());

    let after = core.insert_text_at_cursor("hi").unwrap();

    assert_eq!(after, 5);
    assert_eq!(
        *calls.borrow(),
        vec![
            EngineCall::DeleteText { index: 3, length: 4 },
            EngineCall::InsertText { index: 3, text: "hi".to_string() },
            EngineCall::SetSelection { index: 5, length: 0 },
        ]
    );
}

#[test]
fn test_format_selection_requires_engine_range() {
    let (engine, _calls) = RecordingEngine::boxed(None);
    let mut core = EditorCore::new(engine, EditorOptions::default());
    assert!(matches!(
        core.format_selection("bold", serde_json::json!(true)),
        Err(TableError::NoActiveSelection { .. })
    ));

    let (engine, calls) = RecordingEngine::boxed(Some(EngineRange { index: 2, length: 6 }));
    let mut core = EditorCore::new(engine, EditorOptions::default());
    core.format_selection("bold", serde_json::json!(true)).unwrap();
    assert_eq!(
        *calls.borrow(),
        vec![EngineCall::FormatText {
            index: 2,
            length: 6,
            format: "bold".to_string()
        }]
    );
}

#[test]
fn test_state_dump_reflects_live_state() {
    let (mut core, _calls) = editor_with_cursor(0);
    let id = core.insert_table(2, 3).unwrap();
    core.open_context_menu(id, 0, 0).unwrap();

    let dump = core.state_dump();
    assert_eq!(dump.tables.len(), 1);
    assert_eq!(dump.tables[0].rows, 2);
    assert_eq!(dump.tables[0].cols, 3);
    assert_eq!(dump.tables[0].live_cells, 6);
    assert_eq!(dump.open_menu, Some(id));
    assert!(!dump.picker_open);
    assert!(!dump.resize_active);
    assert!(dump.selection.is_some());

    // Opening the picker closes the menu; both never show open at once
    core.open_table_picker();
    let dump = core.state_dump();
    assert!(dump.picker_open);
    assert_eq!(dump.open_menu, None);

    // And the reverse: opening a menu closes the picker
    core.open_context_menu(id, 1, 1).unwrap();
    let dump = core.state_dump();
    assert!(!dump.picker_open);
    assert_eq!(dump.open_menu, Some(id));
}

#[test]
fn test_timing_averages_by_operation() {
    let (mut core, _calls) = editor_with_cursor(0);
    core.record_timing("renderTable", 2.0);
    core.record_timing("renderTable", 4.0);

    assert_eq!(core.average_timing("renderTable"), Some(3.0));
    assert_eq!(core.average_timing("insertTable"), None);
}
