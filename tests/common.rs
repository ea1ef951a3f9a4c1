#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use stockinbound::config::Config;
use stockinbound::sheet::{CsvStore, SheetStore};
use tempfile::TempDir;

pub fn sib() -> Command {
    cargo_bin_cmd!("stockinbound")
}

/// Fresh store directory, removed when the TempDir is dropped
pub fn setup_store() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = dir.path().join("store").to_string_lossy().to_string();
    (dir, store)
}

/// `stockinbound --test --store <store> ...`
pub fn sib_in(store: &str) -> Command {
    let mut cmd = sib();
    cmd.args(["--test", "--store", store, "--image-host", "folder"]);
    cmd
}

pub fn init_store(store: &str) {
    sib_in(store).arg("init").assert().success();
}

/// Catalog row with the cells placed at the default columns
pub fn catalog_row(order: &str, category: &str, vendor: &str) -> Vec<String> {
    let cfg = Config::default();
    let width = cfg.category_column.max(cfg.vendor_column).max(cfg.order_column);
    let mut row = vec![String::new(); width];
    row[cfg.order_column - 1] = order.to_string();
    row[cfg.vendor_column - 1] = vendor.to_string();
    row[cfg.category_column - 1] = category.to_string();
    row
}

/// Initialize the store and fill the catalog worksheet
pub fn init_store_with_catalog(store: &str) {
    init_store(store);

    let cfg = Config::default();
    let csv = CsvStore::new(store);
    for (order, category, vendor) in [
        ("ORD-100", "Electronics", "Acme"),
        ("ORD-200", "Furniture", "Ikon"),
        ("ORD-300", "Toys", "Playco"),
    ] {
        csv.append_row(
            &cfg.table_id,
            &cfg.catalog_sheet,
            &catalog_row(order, category, vendor),
        )
        .expect("append catalog row");
    }
}

/// Write a small fake photo and return its path
pub fn write_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F']).expect("write image");
    path
}

/// Create an absolute output path inside the temp dir
pub fn temp_out(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().to_string()
}
