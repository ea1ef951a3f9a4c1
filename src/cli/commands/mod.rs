pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod lookup;
pub mod orders;
pub mod scorecard;
pub mod shell;
pub mod today;

use crate::config::Config;
use crate::core::inbound::InboundService;
use crate::models::log_row::LogRow;
use crate::sheet::CsvStore;
use crate::utils::colors::colorize_optional;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

/// Open the configured store. The image host is attached only by `add`.
pub(crate) fn open_service(cfg: &Config) -> InboundService {
    let store = CsvStore::new(expand_tilde(&cfg.store));
    InboundService::new(cfg.clone(), Box::new(store))
}

/// Render `(number, record)` pairs as the inbound records table.
pub(crate) fn records_table<'a, I>(records: I) -> Table
where
    I: IntoIterator<Item = (usize, &'a LogRow)>,
{
    let mut table = Table::new(vec![
        Column::new("#", 5),
        Column::new("date", 19),
        Column::new("order", 24),
        Column::new("category", 24),
        Column::new("vendor", 24),
        Column::new("image", 60),
    ]);

    for (no, r) in records {
        table.add_row(vec![
            no.to_string(),
            colorize_optional(&r.date),
            colorize_optional(&r.order),
            colorize_optional(&r.category),
            colorize_optional(&r.vendor),
            colorize_optional(&r.image_url),
        ]);
    }

    table
}
