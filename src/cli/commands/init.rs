use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::log_row::LOG_HEADER;
use crate::sheet::CsvStore;
use crate::sheet::log::{LOG_HEADER as AUDIT_HEADER, LOG_SHEET, ttlog};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

/// Header row with `names` placed at their 1-based columns, blanks between.
fn sparse_header(names: &[(usize, &'static str)]) -> Vec<&'static str> {
    let width = names.iter().map(|(c, _)| *c).max().unwrap_or(0);
    let mut header = vec![""; width];
    for (col, name) in names {
        if *col > 0 {
            header[col - 1] = *name;
        }
    }
    header
}

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (unless in test mode)
///  - the store directory
///  - the inbound, log, catalog and scorecard worksheets when missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::init_all(cli.store.clone(), cli.test)?;
    if let Some(host) = cli.image_host {
        cfg.image_host = host;
    }

    println!("⚙️  Initializing stockinbound…");

    let store = CsvStore::new(expand_tilde(&cfg.store));
    let table = cfg.table_id.as_str();

    let catalog = sparse_header(&[
        (cfg.order_column, "order"),
        (cfg.vendor_column, "vendor"),
        (cfg.category_column, "category"),
    ]);
    let scorecard = sparse_header(&[
        (cfg.scorecard_date_column, "date"),
        (cfg.scorecard_order_column, "order"),
    ]);

    let sheets: [(&str, &[&str]); 4] = [
        (cfg.inbound_sheet.as_str(), LOG_HEADER.as_slice()),
        (LOG_SHEET, AUDIT_HEADER.as_slice()),
        (cfg.catalog_sheet.as_str(), catalog.as_slice()),
        (cfg.scorecard_sheet.as_str(), scorecard.as_slice()),
    ];

    for (name, header) in sheets {
        if store.ensure_worksheet(table, name, header)? {
            info(format!("Worksheet created: {table}/{name}"));
        } else {
            info(format!("Worksheet already present: {table}/{name}"));
        }
    }

    if let Err(e) = ttlog(
        &store,
        table,
        "init",
        "store initialized",
        &format!("store initialized at {}", store.root().display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("stockinbound initialized at {}", store.root().display()));
    Ok(())
}
