//! End-to-end editing scenarios

use labeled_grid::{
    AddColumn, Cell, ColumnTarget, Error, GridInit, GridOptions, LabeledGrid, Matrix,
    MissingTarget, Position,
};
use pretty_assertions::assert_eq;

fn matrix(rows: &[&[&str]]) -> Matrix {
    rows.iter()
        .map(|row| row.iter().map(|v| Cell::from(*v)).collect())
        .collect()
}

/// 2x2 grid with no labels
fn scenario_a() -> LabeledGrid {
    LabeledGrid::new(GridInit::new().with_data(matrix(&[&["a", "b"], &["c", "d"]])))
}

#[test]
fn test_construction_pads_labels() {
    let grid = scenario_a();
    assert_eq!(grid.column_labels(), ["", ""]);
    assert_eq!(grid.row_labels(), ["", ""]);
}

#[test]
fn test_add_labeled_row() {
    let mut grid = scenario_a();
    grid.add_row(Some("R3"), None).unwrap();

    assert_eq!(
        grid.state().data,
        matrix(&[&["a", "b"], &["c", "d"], &["", ""]])
    );
    assert_eq!(grid.row_labels(), ["", "", "R3"]);
    assert_eq!(grid.column_labels(), ["", ""]);
}

#[test]
fn test_insert_column_before_index() {
    let mut grid = scenario_a();
    let at = grid
        .add_column(AddColumn {
            column_label: None,
            position: Position::Before,
            target: Some(ColumnTarget::Index(1)),
        })
        .unwrap();

    assert_eq!(at, 1);
    assert_eq!(
        grid.state().data,
        matrix(&[&["a", "", "b"], &["c", "", "d"]])
    );
    assert_eq!(grid.column_labels(), ["", "", ""]);
}

#[test]
fn test_unknown_label_appends_by_default() {
    let mut grid = scenario_a();
    let at = grid.add_column(AddColumn::new().before("NoSuchLabel")).unwrap();

    assert_eq!(at, 2);
    assert_eq!(
        grid.state().data,
        matrix(&[&["a", "b", ""], &["c", "d", ""]])
    );
}

#[test]
fn test_unknown_label_errors_when_configured() {
    let mut grid = LabeledGrid::with_options(
        GridInit::new()
            .with_data(matrix(&[&["a", "b"]]))
            .with_column_labels(["A", "B"]),
        GridOptions::default().with_missing_target(MissingTarget::Error),
    )
    .unwrap();

    assert_eq!(
        grid.add_column(AddColumn::new().after("C")),
        Err(Error::TargetNotFound("C".to_string()))
    );
    assert_eq!(grid.column_labels(), ["A", "B"]);
}

#[test]
fn test_index_zero_is_a_real_target() {
    let mut grid = scenario_a();
    grid.add_column(AddColumn::new().labeled("first").before(0usize)).unwrap();
    grid.add_column(AddColumn::new().labeled("second").after(0usize)).unwrap();

    assert_eq!(grid.column_labels(), ["first", "second", "", ""]);
    assert_eq!(
        grid.state().data,
        matrix(&[&["", "", "a", "b"], &["", "", "c", "d"]])
    );
}

#[test]
fn test_long_labels_clamp_cells_and_label_separately() {
    let mut grid = LabeledGrid::new(
        GridInit::new()
            .with_data(matrix(&[&["a"]]))
            .with_column_labels(["A", "B", "C"]),
    );

    let at = grid.add_column(AddColumn::new().labeled("X").after("B")).unwrap();

    // Label lands after "B"; the one-cell row clamps to its end
    assert_eq!(at, 2);
    assert_eq!(grid.column_labels(), ["A", "B", "X", "C"]);
    assert_eq!(grid.state().data, matrix(&[&["a", ""]]));
}

#[test]
fn test_mixed_edit_session() {
    let mut grid = LabeledGrid::new(
        GridInit::new()
            .with_data(matrix(&[&["Widget", "3"], &["Gadget", "5"]]))
            .with_column_labels(["Item", "Qty"])
            .with_row_labels(["1", "2"]),
    );

    grid.add_column(AddColumn::new().labeled("Price").after("Qty")).unwrap();
    grid.add_column(AddColumn::new().labeled("SKU").before("Item")).unwrap();
    grid.add_row(
        Some("3"),
        Some(vec![
            Cell::from("X-9"),
            Cell::from("Gizmo"),
            Cell::from("1"),
            Cell::from("9.99"),
        ]),
    )
    .unwrap();

    let state = grid.snapshot();
    assert_eq!(state.column_labels, ["SKU", "Item", "Qty", "Price"]);
    assert_eq!(state.row_labels, ["1", "2", "3"]);
    assert_eq!(
        state.data,
        matrix(&[
            &["", "Widget", "3", ""],
            &["", "Gadget", "5", ""],
            &["X-9", "Gizmo", "1", "9.99"],
        ])
    );
    assert!(state.is_aligned());
}

#[test]
fn test_strict_session_rejects_bad_rows() {
    let mut grid = LabeledGrid::with_options(
        GridInit::new().with_data(matrix(&[&["a", "b"]])),
        GridOptions::strict(),
    )
    .unwrap();

    let err = grid.add_row(None, Some(vec![Cell::from("only")])).unwrap_err();
    assert_eq!(err.to_string(), "Row 1 has 1 cells, expected 2");

    grid.add_row(None, None).unwrap();
    assert_eq!(grid.row_count(), 2);
    assert!(grid.is_aligned());
}
