//! Spreadsheet store: the external tables the tool reads from and appends to.
//!
//! A store holds workbooks (`table_id`), each made of named worksheets.
//! Rows are plain text cells and may be ragged: spreadsheets drop trailing
//! empty cells, so callers never assume a fixed row width.

pub mod csv_store;
pub mod log;
pub mod memory;

use crate::errors::AppResult;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;

pub trait SheetStore {
    /// Values of one column, header included. `column` is 1-based.
    /// Trailing empty cells are not returned, so columns may be shorter
    /// than the worksheet.
    fn get_column(&self, table_id: &str, worksheet: &str, column: usize)
    -> AppResult<Vec<String>>;

    /// Every row of the worksheet, header first.
    fn get_all_rows(&self, table_id: &str, worksheet: &str) -> AppResult<Vec<Vec<String>>>;

    /// Append one row at the bottom of the worksheet.
    fn append_row(&self, table_id: &str, worksheet: &str, cells: &[String]) -> AppResult<()>;

    /// Delete a row by its 1-based sheet index. Row 1 is the header.
    fn delete_row(&self, table_id: &str, worksheet: &str, row_index: usize) -> AppResult<()>;
}

/// Cut one column out of a set of rows, dropping trailing blanks like a
/// spreadsheet column read does.
pub(crate) fn column_of(rows: &[Vec<String>], column: usize) -> Vec<String> {
    let idx = column - 1;
    let mut values: Vec<String> = rows
        .iter()
        .map(|r| r.get(idx).cloned().unwrap_or_default())
        .collect();

    while values.last().is_some_and(|v| v.is_empty()) {
        values.pop();
    }

    values
}

/// Strip the header of a fetched column or table.
pub fn without_header<T>(mut values: Vec<T>) -> Vec<T> {
    if !values.is_empty() {
        values.remove(0);
    }
    values
}

impl<T: SheetStore + ?Sized> SheetStore for std::sync::Arc<T> {
    fn get_column(
        &self,
        table_id: &str,
        worksheet: &str,
        column: usize,
    ) -> AppResult<Vec<String>> {
        (**self).get_column(table_id, worksheet, column)
    }

    fn get_all_rows(&self, table_id: &str, worksheet: &str) -> AppResult<Vec<Vec<String>>> {
        (**self).get_all_rows(table_id, worksheet)
    }

    fn append_row(&self, table_id: &str, worksheet: &str, cells: &[String]) -> AppResult<()> {
        (**self).append_row(table_id, worksheet, cells)
    }

    fn delete_row(&self, table_id: &str, worksheet: &str, row_index: usize) -> AppResult<()> {
        (**self).delete_row(table_id, worksheet, row_index)
    }
}
