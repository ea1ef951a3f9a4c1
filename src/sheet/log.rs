use crate::errors::AppResult;
use crate::sheet::SheetStore;
use chrono::Local;

/// Name of the internal audit worksheet.
pub const LOG_SHEET: &str = "log";

pub const LOG_HEADER: [&str; 4] = ["date", "operation", "target", "message"];

/// Write an internal log line into the `log` worksheet.
pub fn ttlog(
    store: &dyn SheetStore,
    table_id: &str,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    // Timestamp locale, ISO 8601
    let now = Local::now().to_rfc3339();

    store.append_row(
        table_id,
        LOG_SHEET,
        &[
            now,
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ],
    )
}
