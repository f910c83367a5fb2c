#![cfg(feature = "excel_test_writer")]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use grid_cleaning::cleaning::clean;
use grid_cleaning::io::excel::read_excel_grid_from_path;
use grid_cleaning::io::{read_grid_from_path, GridFileOptions};
use grid_cleaning::types::Cell;

fn tmp_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("grid-cleaning-{name}-{nanos}.xlsx"))
}

fn write_contacts_xlsx(path: &PathBuf) {
    use rust_xlsxwriter::Workbook;

    let mut wb = Workbook::new();

    let ws = wb.add_worksheet();
    ws.set_name("Contacts").unwrap();
    ws.write_string(0, 0, "name").unwrap();
    ws.write_string(0, 1, "age").unwrap();
    ws.write_string(0, 2, "member").unwrap();
    ws.write_string(1, 0, "  ada  ").unwrap();
    ws.write_number(1, 1, 36).unwrap();
    ws.write_boolean(1, 2, true).unwrap();
    ws.write_string(2, 0, "ADA").unwrap();
    ws.write_number(2, 1, 36).unwrap();
    ws.write_boolean(2, 2, true).unwrap();
    // row 3 left blank
    ws.write_string(4, 0, "grace").unwrap();
    ws.write_boolean(4, 2, false).unwrap();

    let other = wb.add_worksheet();
    other.set_name("Other").unwrap();
    other.write_string(0, 0, "unrelated").unwrap();

    wb.save(path).unwrap();
}

#[test]
fn reads_first_sheet_by_default_and_cleans_it() {
    let path = tmp_file("contacts");
    write_contacts_xlsx(&path);

    let raw = read_excel_grid_from_path(&path, None).unwrap();
    assert_eq!(raw.row_count(), 5);
    assert_eq!(raw.rows[3], vec![Cell::Empty, Cell::Empty, Cell::Empty]);

    let result = clean(&raw).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(result.original_row_count, 5);
    assert_eq!(
        result.cleaned_grid.rows,
        vec![
            vec![Cell::text("Name"), Cell::text("Age"), Cell::text("Member")],
            vec![Cell::text("Ada"), Cell::Number(36.0), Cell::Boolean(true)],
            vec![Cell::text("Grace"), Cell::text("N/A"), Cell::Boolean(false)],
        ]
    );
}

#[test]
fn reads_named_sheet_through_unified_entrypoint() {
    let path = tmp_file("contacts-named");
    write_contacts_xlsx(&path);

    let opts = GridFileOptions {
        sheet: Some("Other".to_string()),
        ..Default::default()
    };
    let raw = read_grid_from_path(&path, &opts).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(raw.rows, vec![vec![Cell::text("unrelated")]]);
}
