//! Directory-backed workbook store: `<root>/<table_id>/<worksheet>.csv`.

use crate::errors::{AppError, AppResult};
use crate::sheet::{SheetStore, column_of};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn worksheet_path(&self, table_id: &str, worksheet: &str) -> PathBuf {
        self.root.join(table_id).join(format!("{worksheet}.csv"))
    }

    /// Create the worksheet with the given header if it does not exist yet.
    pub fn ensure_worksheet(
        &self,
        table_id: &str,
        worksheet: &str,
        header: &[&str],
    ) -> AppResult<bool> {
        let path = self.worksheet_path(table_id, worksheet);
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = WriterBuilder::new().flexible(true).from_path(&path)?;
        wtr.write_record(header)?;
        wtr.flush()?;

        debug!(path = %path.display(), "worksheet created");
        Ok(true)
    }

    fn open_existing(&self, table_id: &str, worksheet: &str) -> AppResult<PathBuf> {
        if !self.root.is_dir() {
            return Err(AppError::SourceUnavailable(format!(
                "store directory {} does not exist",
                self.root.display()
            )));
        }

        let path = self.worksheet_path(table_id, worksheet);
        if !path.exists() {
            return Err(AppError::WorksheetNotFound(format!("{table_id}/{worksheet}")));
        }
        Ok(path)
    }

    fn read_rows(&self, path: &Path) -> AppResult<Vec<Vec<String>>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn write_rows(&self, path: &Path, rows: &[Vec<String>]) -> AppResult<()> {
        let tmp = path.with_extension("csv.tmp");
        {
            let mut wtr = WriterBuilder::new().flexible(true).from_path(&tmp)?;
            for row in rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl SheetStore for CsvStore {
    fn get_column(
        &self,
        table_id: &str,
        worksheet: &str,
        column: usize,
    ) -> AppResult<Vec<String>> {
        if column == 0 {
            return Err(AppError::InvalidColumn(column));
        }
        let path = self.open_existing(table_id, worksheet)?;
        let rows = self.read_rows(&path)?;
        Ok(column_of(&rows, column))
    }

    fn get_all_rows(&self, table_id: &str, worksheet: &str) -> AppResult<Vec<Vec<String>>> {
        let path = self.open_existing(table_id, worksheet)?;
        self.read_rows(&path)
    }

    fn append_row(&self, table_id: &str, worksheet: &str, cells: &[String]) -> AppResult<()> {
        let path = self.open_existing(table_id, worksheet)?;

        let mut file = OpenOptions::new().read(true).append(true).open(&path)?;

        // a hand-edited sheet may lack the final newline
        let len = file.metadata()?.len();
        if len > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }

        let mut wtr = WriterBuilder::new().flexible(true).from_writer(file);
        wtr.write_record(cells)?;
        wtr.flush()?;

        debug!(worksheet, cells = cells.len(), "row appended");
        Ok(())
    }

    fn delete_row(&self, table_id: &str, worksheet: &str, row_index: usize) -> AppResult<()> {
        let path = self.open_existing(table_id, worksheet)?;
        let mut rows = self.read_rows(&path)?;

        if row_index < 2 || row_index > rows.len() {
            return Err(AppError::InvalidRowIndex(row_index));
        }

        rows.remove(row_index - 1);
        self.write_rows(&path, &rows)?;

        debug!(worksheet, row_index, "row deleted");
        Ok(())
    }
}
