use std::fs;
use stockinbound::sheet::{CsvStore, SheetStore};

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_append_after_hand_edited_sheet_without_final_newline() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = CsvStore::new(dir.path());
    assert!(store.ensure_worksheet("t", "inbound", &["date", "order"]).expect("create"));

    // hand edit: last line saved without a trailing newline
    let path = store.worksheet_path("t", "inbound");
    fs::write(&path, "date,order\n2026-02-26 10:00:00,ORD1").expect("hand edit");

    store
        .append_row("t", "inbound", &cells(&["2026-02-26 11:00:00", "ORD2"]))
        .expect("append");

    let rows = store.get_all_rows("t", "inbound").expect("rows");
    assert_eq!(
        rows,
        vec![
            cells(&["date", "order"]),
            cells(&["2026-02-26 10:00:00", "ORD1"]),
            cells(&["2026-02-26 11:00:00", "ORD2"]),
        ]
    );
}

#[test]
fn test_append_keeps_well_formed_sheet_intact() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = CsvStore::new(dir.path());
    store.ensure_worksheet("t", "log", &["a", "b"]).expect("create");

    store.append_row("t", "log", &cells(&["1", "2"])).expect("append");
    store.append_row("t", "log", &cells(&["3"])).expect("append");

    let content = fs::read_to_string(store.worksheet_path("t", "log")).expect("read");
    assert_eq!(content, "a,b\n1,2\n3\n");
}

#[test]
fn test_missing_store_and_worksheet_errors() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = CsvStore::new(dir.path().join("nope"));
    let err = missing.get_all_rows("t", "inbound").expect_err("no store");
    assert!(err.is_source_unavailable());

    let store = CsvStore::new(dir.path());
    let err = store.get_column("t", "inbound", 1).expect_err("no worksheet");
    assert!(err.is_source_unavailable());
}
