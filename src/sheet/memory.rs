//! In-memory store, used by tests and by embedders that already hold the
//! tables. It counts remote-style reads and can be switched offline to
//! simulate an unreachable backend.

use crate::errors::{AppError, AppResult};
use crate::sheet::{SheetStore, column_of};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
pub struct MemoryStore {
    sheets: Mutex<HashMap<(String, String), Vec<Vec<String>>>>,
    reads: AtomicUsize,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a worksheet with the given rows (header first).
    pub fn put_sheet<S: AsRef<str>>(&self, table_id: &str, worksheet: &str, rows: &[Vec<S>]) {
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|c| c.as_ref().to_string()).collect())
            .collect();

        if let Ok(mut sheets) = self.sheets.lock() {
            sheets.insert((table_id.to_string(), worksheet.to_string()), rows);
        }
    }

    /// Number of get_column / get_all_rows calls served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::SourceUnavailable("store is offline".into()));
        }
        Ok(())
    }

    fn with_sheet<T>(
        &self,
        table_id: &str,
        worksheet: &str,
        f: impl FnOnce(&mut Vec<Vec<String>>) -> AppResult<T>,
    ) -> AppResult<T> {
        self.check_online()?;

        let mut sheets = self
            .sheets
            .lock()
            .map_err(|_| AppError::Other("memory store lock poisoned".into()))?;

        let rows = sheets
            .get_mut(&(table_id.to_string(), worksheet.to_string()))
            .ok_or_else(|| AppError::WorksheetNotFound(format!("{table_id}/{worksheet}")))?;

        f(rows)
    }
}

impl SheetStore for MemoryStore {
    fn get_column(
        &self,
        table_id: &str,
        worksheet: &str,
        column: usize,
    ) -> AppResult<Vec<String>> {
        if column == 0 {
            return Err(AppError::InvalidColumn(column));
        }
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.with_sheet(table_id, worksheet, |rows| Ok(column_of(rows, column)))
    }

    fn get_all_rows(&self, table_id: &str, worksheet: &str) -> AppResult<Vec<Vec<String>>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.with_sheet(table_id, worksheet, |rows| Ok(rows.clone()))
    }

    fn append_row(&self, table_id: &str, worksheet: &str, cells: &[String]) -> AppResult<()> {
        self.with_sheet(table_id, worksheet, |rows| {
            rows.push(cells.to_vec());
            Ok(())
        })
    }

    fn delete_row(&self, table_id: &str, worksheet: &str, row_index: usize) -> AppResult<()> {
        self.with_sheet(table_id, worksheet, |rows| {
            if row_index < 2 || row_index > rows.len() {
                return Err(AppError::InvalidRowIndex(row_index));
            }
            rows.remove(row_index - 1);
            Ok(())
        })
    }
}
