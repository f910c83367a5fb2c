use grid_cleaning::cleaning::{
    clean, clean_with_options, fill_empty_cells, normalize_casing, remove_duplicate_rows, remove_empty_rows,
    trim_grid, CleaningOptions,
};
use grid_cleaning::types::{Cell, Grid};
use grid_cleaning::CleaningError;

fn text_grid(rows: &[&[&str]]) -> Grid {
    Grid::new(
        rows.iter()
            .map(|row| row.iter().map(|s| Cell::text(*s)).collect())
            .collect(),
    )
}

#[test]
fn trimmed_and_cased_duplicates_collapse_and_blank_row_drops() {
    let raw = text_grid(&[&["  alice  ", "30"], &["Alice", "30"], &["", ""]]);

    let normalized = normalize_casing(&trim_grid(&raw));
    assert_eq!(normalized, text_grid(&[&["Alice", "30"], &["Alice", "30"], &["", ""]]));

    let deduped = remove_duplicate_rows(&normalized);
    assert_eq!(deduped, text_grid(&[&["Alice", "30"], &["", ""]]));

    let without_empty = remove_empty_rows(&deduped);
    assert_eq!(without_empty, text_grid(&[&["Alice", "30"]]));
    assert_eq!(fill_empty_cells(&without_empty, "N/A"), without_empty);

    let result = clean(&raw).unwrap();
    assert_eq!(result.cleaned_grid, text_grid(&[&["Alice", "30"]]));
    assert_eq!(result.header_row_index, 0);
    assert_eq!(result.original_row_count, 3);
    assert_eq!(result.cleaned_row_count, 1);
}

#[test]
fn empty_row_is_removed_and_empty_cell_is_filled() {
    let raw = Grid::new(vec![vec![Cell::Empty, Cell::Empty], vec![Cell::text("x"), Cell::Empty]]);

    let result = clean(&raw).unwrap();

    assert_eq!(
        result.cleaned_grid.rows,
        vec![vec![Cell::text("X"), Cell::text("N/A")]]
    );
    assert_eq!(result.cleaned_row_count, 1);
    assert_eq!(result.header_row_index, 0);
}

#[test]
fn grid_without_rows_is_rejected() {
    let err = clean(&Grid::new(Vec::new())).unwrap_err();
    assert!(matches!(err, CleaningError::EmptyInput));
    assert!(err.to_string().contains("empty input"));
}

#[test]
fn identical_rows_collapse_to_one() {
    let row = vec![Cell::text("a"), Cell::Number(1.0), Cell::Boolean(true)];
    let raw = Grid::new(vec![row; 10]);

    let result = clean(&raw).unwrap();

    assert_eq!(result.original_row_count, 10);
    assert_eq!(result.cleaned_row_count, 1);
    assert_eq!(
        result.cleaned_grid.rows,
        vec![vec![Cell::text("A"), Cell::Number(1.0), Cell::Boolean(true)]]
    );
}

#[test]
fn grid_of_only_blank_rows_cleans_to_zero_rows() {
    let raw = Grid::new(vec![
        vec![Cell::Empty, Cell::text("   ")],
        vec![Cell::text("\t"), Cell::Empty],
    ]);

    let result = clean(&raw).unwrap();

    assert!(result.cleaned_grid.is_empty());
    assert_eq!(result.cleaned_row_count, 0);
    assert_eq!(result.header_row_index, 0);
    assert_eq!(result.rows_removed(), 2);
}

#[test]
fn cleaning_is_idempotent_on_cleaned_output() {
    let raw = Grid::new(vec![
        vec![Cell::text(" Name "), Cell::text("AGE"), Cell::text("notes")],
        vec![Cell::text("ann lee"), Cell::Number(31.0), Cell::Empty],
        vec![Cell::text("ANN LEE"), Cell::Number(31.0), Cell::Empty],
        vec![Cell::Empty, Cell::Empty, Cell::Empty],
        vec![Cell::text("o'brien"), Cell::Boolean(false), Cell::text("  x ")],
    ]);

    let once = clean(&raw).unwrap();
    let twice = clean(&once.cleaned_grid).unwrap();

    assert_eq!(twice.cleaned_grid, once.cleaned_grid);
    assert_eq!(twice.cleaned_row_count, once.cleaned_row_count);
}

#[test]
fn invariants_hold_on_mixed_input() {
    let raw = Grid::new(vec![
        vec![Cell::Empty],
        vec![Cell::text("  "), Cell::text("b"), Cell::Number(2.0)],
        vec![Cell::text(""), Cell::text("B"), Cell::Number(2.0)],
        vec![Cell::text("5")],
        vec![Cell::Number(5.0)],
        vec![],
        vec![Cell::text("tail"), Cell::Empty, Cell::Empty, Cell::Empty],
    ]);

    let result = clean(&raw).unwrap();
    let grid = &result.cleaned_grid;

    assert_eq!(result.cleaned_row_count, grid.row_count());
    assert!(result.cleaned_row_count <= result.original_row_count);
    assert!(result.header_row_index < result.cleaned_row_count);

    for row in grid.rows() {
        for cell in row {
            assert!(!cell.is_blank(), "blank cell survived: {cell:?}");
            assert!(!matches!(cell, Cell::Empty));
        }
    }

    let keys: Vec<_> = grid.rows().map(grid_cleaning::cleaning::dedup::row_key).collect();
    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            assert_ne!(keys[i], keys[j], "rows {i} and {j} are duplicates");
        }
    }

    // "5" and 5 differ by kind; the two `b`/`B` rows collapse once trimmed and title-cased.
    assert_eq!(
        grid.rows,
        vec![
            vec![Cell::text("N/A"), Cell::text("B"), Cell::Number(2.0)],
            vec![Cell::text("5")],
            vec![Cell::Number(5.0)],
            vec![Cell::text("Tail"), Cell::text("N/A"), Cell::text("N/A"), Cell::text("N/A")],
        ]
    );
}

#[test]
fn rows_identical_only_after_placeholder_fill_are_kept() {
    // Empty and "" are distinct for deduplication, but both become "N/A" afterwards.
    let raw = Grid::new(vec![
        vec![Cell::text("a"), Cell::Empty],
        vec![Cell::text("a"), Cell::text("")],
    ]);

    let result = clean(&raw).unwrap();

    assert_eq!(result.cleaned_row_count, 2);
    assert_eq!(result.cleaned_grid.rows[0], result.cleaned_grid.rows[1]);
}

#[test]
fn header_index_skips_nothing_once_blank_rows_are_gone() {
    let raw = Grid::new(vec![
        vec![Cell::Empty, Cell::Empty],
        vec![Cell::text(""), Cell::text(" ")],
        vec![Cell::text("id"), Cell::text("name")],
        vec![Cell::Number(1.0), Cell::text("ann")],
    ]);

    let result = clean(&raw).unwrap();

    assert_eq!(result.header_row_index, 0);
    assert_eq!(result.cleaned_grid.rows[0], vec![Cell::text("Id"), Cell::text("Name")]);
}

#[test]
fn irregular_row_lengths_are_preserved() {
    let raw = Grid::new(vec![
        vec![Cell::text("a")],
        vec![Cell::text("b"), Cell::Empty, Cell::text("c")],
    ]);

    let result = clean_with_options(
        &raw,
        &CleaningOptions {
            placeholder: "?".to_string(),
            ..Default::default()
        },
    )
    .unwrap();

    let lens: Vec<usize> = result.cleaned_grid.rows().map(<[Cell]>::len).collect();
    assert_eq!(lens, vec![1, 3]);
    assert_eq!(result.cleaned_grid.rows[1][1], Cell::text("?"));
}
