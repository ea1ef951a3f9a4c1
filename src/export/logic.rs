// src/export/logic.rs

use crate::core::daily::is_on_day;
use crate::core::inbound::InboundService;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::sheet::log::ttlog;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High level export of the inbound log.
pub struct ExportLogic;

impl ExportLogic {
    /// Export inbound records.
    ///
    /// - `file`: absolute path of the output file
    /// - `day`: `None` for the whole log, otherwise only the records of
    ///   that day (matched like `today`)
    ///
    /// Returns the number of exported records.
    pub fn export(
        service: &InboundService,
        format: ExportFormat,
        file: &str,
        day: Option<NaiveDate>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let records: Vec<RecordExport> = match day {
            // numbering follows the full log so it matches `history`
            Some(d) => {
                let mode = service.config().date_match;
                service
                    .history()
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| is_on_day(&r.date, d, mode))
                    .map(|(i, r)| RecordExport::new(i + 1, r))
                    .collect()
            }
            None => service
                .history()
                .iter()
                .enumerate()
                .map(|(i, r)| RecordExport::new(i + 1, r))
                .collect(),
        };

        if records.is_empty() {
            match day {
                Some(d) => warning(format!("No inbound records found for {d}.")),
                None => warning("The inbound log is empty, nothing to export."),
            }
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Xlsx => export_xlsx(&records, path)?,
        }

        let cfg = service.config();
        if let Err(e) = ttlog(
            service.store(),
            &cfg.table_id,
            "export",
            format.as_str(),
            &format!("{} records to {}", records.len(), path.display()),
        ) {
            tracing::warn!(error = %e, "failed to write internal log");
        }

        Ok(records.len())
    }
}
