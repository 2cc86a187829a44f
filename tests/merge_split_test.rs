// Test merging selections into spans and splitting spans back apart

use table_editor_wasm::models::{CellAddress, TableError, TableGrid, TableId};
use table_editor_wasm::table::selection::CellSelection;
use table_editor_wasm::table::structure;

/// Helper to select a rectangle from one address to another
fn select(grid: &mut TableGrid, from: (usize, usize), to: (usize, usize)) -> CellSelection {
    let mut selection = CellSelection::new();
    selection
        .begin(TableId(1), grid, CellAddress::new(from.0, from.1))
        .expect("begin should succeed");
    if from != to {
        selection
            .extend(grid, CellAddress::new(to.0, to.1))
            .expect("extend should succeed");
    }
    selection
}

fn set_content(grid: &mut TableGrid, row: usize, col: usize, text: &str) {
    structure::set_cell_content(grid, CellAddress::new(row, col), text).unwrap();
}

#[test]
fn test_merge_survivor_takes_rect_and_joined_content() {
    let mut grid = structure::insert_table(3, 3).unwrap();
    set_content(&mut grid, 0, 0, "a");
    set_content(&mut grid, 0, 1, "b");
    set_content(&mut grid, 1, 0, "c");
    set_content(&mut grid, 1, 1, "d");

    select(&mut grid, (0, 0), (1, 1));
    let survivor = structure::merge_selected(&mut grid).unwrap();

    assert_eq!(survivor, CellAddress::new(0, 0));
    let merged = grid.cell_at(0, 0).unwrap();
    assert_eq!(merged.row_span, 2);
    assert_eq!(merged.col_span, 2);
    assert_eq!(merged.content, "a b c d", "contents join in row-major order");
    assert_eq!(grid.live_cell_count(), 6, "4 cells collapsed into 1, 5 untouched");
    grid.validate().unwrap();
}

#[test]
fn test_merge_skips_empty_contents_when_joining() {
    let mut grid = structure::insert_table(2, 2).unwrap();
    set_content(&mut grid, 0, 0, "left");
    set_content(&mut grid, 1, 1, "right");

    select(&mut grid, (0, 0), (1, 1));
    structure::merge_selected(&mut grid).unwrap();

    assert_eq!(grid.cell_at(0, 0).unwrap().content, "left right");
}

#[test]
fn test_merge_needs_at_least_two_cells() {
    let mut grid = structure::insert_table(2, 2).unwrap();
    select(&mut grid, (0, 0), (0, 0));

    let result = structure::merge_selected(&mut grid);
    assert!(matches!(
        result,
        Err(TableError::NoActiveSelection { needed: 2, have: 1 })
    ));
    assert_eq!(grid.live_cell_count(), 4, "rejected merge must not mutate");
}

#[test]
fn test_merge_closes_rect_over_protruding_span() {
    let mut grid = structure::insert_table(2, 2).unwrap();
    // First make (0,0) a 1x2 horizontal span
    select(&mut grid, (0, 0), (0, 1));
    structure::merge_selected(&mut grid).unwrap();

    // Selecting the span plus (1,0) gives an L-shaped region; the rect
    // must grow until it also swallows (1,1)
    select(&mut grid, (0, 0), (1, 0));
    let survivor = structure::merge_selected(&mut grid).unwrap();

    assert_eq!(survivor, CellAddress::new(0, 0));
    let merged = grid.cell_at(0, 0).unwrap();
    assert_eq!(merged.row_span, 2);
    assert_eq!(merged.col_span, 2);
    assert_eq!(grid.live_cell_count(), 1);
    grid.validate().unwrap();
}

#[test]
fn test_merge_clears_transient_flags() {
    let mut grid = structure::insert_table(2, 2).unwrap();
    select(&mut grid, (0, 0), (1, 1));
    structure::merge_selected(&mut grid).unwrap();
    assert_eq!(grid.selected_count(), 0, "merge invalidates the selection flags");
}

#[test]
fn test_split_restores_unit_cells() {
    let mut grid = structure::insert_table(3, 3).unwrap();
    set_content(&mut grid, 1, 1, "x");
    set_content(&mut grid, 1, 2, "y");
    select(&mut grid, (1, 1), (2, 2));
    structure::merge_selected(&mut grid).unwrap();

    select(&mut grid, (1, 1), (1, 1));
    let created = structure::split_selected(&mut grid).unwrap();

    assert_eq!(created, 3, "a 2x2 span splits into 1 kept + 3 new cells");
    let kept = grid.cell_at(1, 1).unwrap();
    assert_eq!(kept.row_span, 1);
    assert_eq!(kept.col_span, 1);
    assert_eq!(kept.content, "x y", "the kept cell holds the joined content");
    assert_eq!(grid.cell_at(1, 2).unwrap().content, "");
    assert_eq!(grid.cell_at(2, 1).unwrap().content, "");
    assert_eq!(grid.live_cell_count(), 9);
    grid.validate().unwrap();
}

#[test]
fn test_split_only_touches_merged_cells() {
    let mut grid = structure::insert_table(2, 3).unwrap();
    select(&mut grid, (0, 0), (0, 1));
    structure::merge_selected(&mut grid).unwrap();

    // Select the span and an ordinary neighbor together
    select(&mut grid, (0, 0), (0, 2));
    let created = structure::split_selected(&mut grid).unwrap();

    assert_eq!(created, 1, "only the 1x2 span contributes a new cell");
    grid.validate().unwrap();
}

#[test]
fn test_split_with_no_merged_cells_is_a_noop() {
    let mut grid = structure::insert_table(2, 2).unwrap();
    select(&mut grid, (0, 0), (1, 1));
    assert_eq!(structure::split_selected(&mut grid).unwrap(), 0);
    assert_eq!(grid.live_cell_count(), 4);
}

#[test]
fn test_split_without_selection_is_rejected() {
    let mut grid = structure::insert_table(2, 2).unwrap();
    let result = structure::split_selected(&mut grid);
    assert!(matches!(
        result,
        Err(TableError::NoActiveSelection { needed: 1, have: 0 })
    ));
}

#[test]
fn test_merge_then_split_round_trip_keeps_grid_valid() {
    let mut grid = structure::insert_table(4, 4).unwrap();
    set_content(&mut grid, 0, 0, "head");

    select(&mut grid, (0, 0), (2, 2));
    structure::merge_selected(&mut grid).unwrap();
    grid.validate().unwrap();

    select(&mut grid, (0, 0), (0, 0));
    let created = structure::split_selected(&mut grid).unwrap();
    assert_eq!(created, 8, "a 3x3 span splits into 1 kept + 8 new cells");
    assert_eq!(grid.live_cell_count(), 16);
    assert_eq!(grid.cell_at(0, 0).unwrap().content, "head");
    grid.validate().unwrap();
}
